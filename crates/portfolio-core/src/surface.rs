//! Drawing seam between the simulations and the host canvas.
//!
//! Renderers only ever talk to [`Surface2d`]; the web front-end implements it
//! over `CanvasRenderingContext2d`, tests implement it with a recorder.

use crate::color::Rgba;
use glam::Vec2;

/// How a fill is composited onto what is already drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    SourceOver,
    Screen,
}

impl BlendMode {
    /// Value for `globalCompositeOperation`.
    pub fn as_css(&self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Screen => "screen",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

pub trait Surface2d {
    /// Backing-store size in pixels.
    fn size(&self) -> (u32, u32);

    fn clear(&mut self);

    /// Filled circle with a soft shadow of `blur` pixels in the same color.
    fn fill_glow_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32, blur: f32);

    /// Circle filled with a radial gradient centred on `center`.
    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        blend: BlendMode,
    );

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, alpha: f32, width: f32);
}
