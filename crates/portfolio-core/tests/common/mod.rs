// Recording surface shared by the renderer tests.
#![allow(dead_code)]

use glam::Vec2;
use portfolio_core::{BlendMode, GradientStop, Rgba, Surface2d};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        alpha: f32,
        blur: f32,
    },
    Gradient {
        center: Vec2,
        radius: f32,
        stops: Vec<GradientStop>,
        blend: BlendMode,
    },
    Line {
        from: Vec2,
        to: Vec2,
        alpha: f32,
    },
}

pub struct Recorder {
    pub width: u32,
    pub height: u32,
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn clears(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Clear)).count()
    }

    pub fn circles(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .collect()
    }

    pub fn lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count()
    }
}

impl Surface2d for Recorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_glow_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32, blur: f32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            alpha,
            blur,
        });
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        blend: BlendMode,
    ) {
        self.calls.push(DrawCall::Gradient {
            center,
            radius,
            stops: stops.to_vec(),
            blend,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _color: Rgba, alpha: f32, _width: f32) {
        self.calls.push(DrawCall::Line { from, to, alpha });
    }
}
