use crate::color::Rgba;
use crate::constants::{NEBULA_MID_ALPHA, NEBULA_MID_STOP};
use crate::surface::{BlendMode, GradientStop, Surface2d};
use glam::Vec2;
use smallvec::SmallVec;

/// A soft radial glow anchored at a fractional viewport position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NebulaBlob {
    pub anchor: Vec2, // fraction of viewport width/height
    pub radius: f32,
    pub color: Rgba,
    pub parallax_speed: f32,
}

impl NebulaBlob {
    /// Screen-space centre for a viewport and scroll offset.
    #[inline]
    pub fn center(&self, width: f32, height: f32, scroll_y: f32) -> Vec2 {
        Vec2::new(
            self.anchor.x * width,
            self.anchor.y * height + scroll_y * self.parallax_speed,
        )
    }

    pub fn gradient_stops(&self) -> [GradientStop; 3] {
        [
            GradientStop {
                offset: 0.0,
                color: self.color,
            },
            GradientStop {
                offset: NEBULA_MID_STOP,
                color: self.color.with_alpha(NEBULA_MID_ALPHA),
            },
            GradientStop {
                offset: 1.0,
                color: Rgba::TRANSPARENT,
            },
        ]
    }
}

pub const DEFAULT_NEBULAS: [NebulaBlob; 3] = [
    NebulaBlob {
        anchor: Vec2::new(0.2, 0.3),
        radius: 400.0,
        color: Rgba::new(255, 0, 255, 0.1),
        parallax_speed: 0.1,
    },
    NebulaBlob {
        anchor: Vec2::new(0.8, 0.7),
        radius: 300.0,
        color: Rgba::new(0, 255, 255, 0.08),
        parallax_speed: 0.05,
    },
    NebulaBlob {
        anchor: Vec2::new(0.5, 0.1),
        radius: 500.0,
        color: Rgba::new(255, 255, 0, 0.06),
        parallax_speed: 0.08,
    },
];

/// Fixed set of blobs redrawn every frame with the `screen` blend.
pub struct Nebula {
    blobs: SmallVec<[NebulaBlob; 4]>,
}

impl Default for Nebula {
    fn default() -> Self {
        Self::new(&DEFAULT_NEBULAS)
    }
}

impl Nebula {
    pub fn new(blobs: &[NebulaBlob]) -> Self {
        Self {
            blobs: blobs.iter().copied().collect(),
        }
    }

    pub fn blobs(&self) -> &[NebulaBlob] {
        &self.blobs
    }

    pub fn frame(&self, surface: &mut dyn Surface2d, scroll_y: f32) {
        let (w, h) = surface.size();
        surface.clear();
        for blob in &self.blobs {
            let center = blob.center(w as f32, h as f32, scroll_y);
            surface.fill_radial_gradient(
                center,
                blob.radius,
                &blob.gradient_stops(),
                BlendMode::Screen,
            );
        }
    }
}
