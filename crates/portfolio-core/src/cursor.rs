//! Spring-smoothed cursor follower.
//!
//! The raw pointer drives two position springs; a third spring animates the
//! hover progress (0 idle, 1 hovering) which sizes and colors the ring and dot.

use crate::color::Rgba;
use crate::constants::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

const SKY: Rgba = Rgba::rgb(0x38, 0xbd, 0xf8);
const AMBER: Rgba = Rgba::rgb(0xfb, 0xbf, 0x24);

/// Tags that count as interactive or readable content.
pub const HOVER_TAGS: [&str; 7] = ["BUTTON", "A", "P", "SPAN", "H1", "H2", "H3"];

#[inline]
pub fn is_hover_tag(tag_name: &str) -> bool {
    HOVER_TAGS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag_name))
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(CURSOR_FOLLOW_STIFFNESS, CURSOR_FOLLOW_DAMPING)
    }
}

/// One-dimensional damped spring integrated with fixed sub-steps.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub config: SpringConfig,
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` with no motion.
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn step(&mut self, dt_sec: f32) {
        let mut remaining = dt_sec.clamp(0.0, SPRING_MAX_DT_SEC);
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.value - self.target).abs() < epsilon && self.velocity.abs() < epsilon
    }
}

/// What the DOM layer needs to place and paint the follower.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorStyle {
    pub position: Vec2,
    pub outer_size: f32,
    pub inner_size: f32,
    pub color: Rgba,
    pub glow: String,
}

pub struct CursorFollower {
    pointer: Vec2,
    hovering: bool,
    x: Spring,
    y: Spring,
    hover: Spring,
    initialized: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(
            SpringConfig::default(),
            SpringConfig::new(CURSOR_SIZE_STIFFNESS, CURSOR_SIZE_DAMPING),
        )
    }
}

impl CursorFollower {
    pub fn new(follow: SpringConfig, size: SpringConfig) -> Self {
        Self {
            pointer: Vec2::ZERO,
            hovering: false,
            x: Spring::new(follow, 0.0),
            y: Spring::new(follow, 0.0),
            hover: Spring::new(size, 0.0),
            initialized: false,
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
        if !self.initialized {
            // first sample: appear under the pointer instead of flying in from 0,0
            self.x.snap(pos.x);
            self.y.snap(pos.y);
            self.initialized = true;
        } else {
            self.x.set_target(pos.x);
            self.y.set_target(pos.y);
        }
    }

    /// Pointer entered an element with the given tag name.
    pub fn pointer_over(&mut self, tag_name: &str) {
        self.set_hovering(is_hover_tag(tag_name));
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
        self.hover.set_target(if hovering { 1.0 } else { 0.0 });
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.x.step(dt_sec);
        self.y.step(dt_sec);
        self.hover.step(dt_sec);
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.value, self.y.value)
    }

    /// Hover progress; may overshoot slightly while the spring rings.
    pub fn hover_progress(&self) -> f32 {
        self.hover.value
    }

    pub fn outer_size(&self) -> f32 {
        lerp(CURSOR_OUTER_IDLE, CURSOR_OUTER_HOVER, self.hover.value)
    }

    pub fn inner_size(&self) -> f32 {
        lerp(CURSOR_INNER_IDLE, CURSOR_INNER_HOVER, self.hover.value)
    }

    pub fn style(&self) -> CursorStyle {
        let t = self.hover.value.clamp(0.0, 1.0);
        let glow_color = SKY.with_alpha(0.7).lerp(AMBER.with_alpha(0.8), t);
        let glow_px = lerp(15.0, 25.0, t);
        CursorStyle {
            position: self.position(),
            outer_size: self.outer_size(),
            inner_size: self.inner_size(),
            color: SKY.lerp(AMBER, t),
            glow: format!("0 0 {:.0}px {}", glow_px, glow_color.to_css_rgba()),
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
