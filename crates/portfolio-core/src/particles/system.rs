use super::config::{ClickMode, HoverMode, MoveDirection, OutMode, ParticleConfig};
use crate::color::Rgba;
use crate::surface::Surface2d;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

// Configured speeds are pixels per frame at 60 Hz.
const REFERENCE_FPS: f32 = 60.0;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

pub struct ParticleSystem {
    config: ParticleConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    scale: f32,
    hover: Option<Vec2>,
    next_color: usize,
    since_last_step: f32,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new(config: ParticleConfig, width: u32, height: u32, pixel_ratio: f32, seed: u64) -> Self {
        let scale = if config.detect_retina {
            pixel_ratio.max(1.0)
        } else {
            1.0
        };
        let mut sys = Self {
            config,
            particles: Vec::new(),
            width: width as f32,
            height: height as f32,
            scale,
            hover: None,
            next_color: 0,
            since_last_step: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        sys.fill_to_target();
        sys
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Count for the current canvas, density-scaled when enabled.
    pub fn target_count(&self) -> usize {
        let number = &self.config.particles.number;
        let base = number.value as f32;
        let count = if number.density.enable {
            // density works in CSS pixels
            let css_area = (self.width / self.scale) * (self.height / self.scale);
            (base * css_area / (number.density.area * number.density.factor)).round()
        } else {
            base
        };
        let count = count.max(0.0) as usize;
        if number.limit > 0 {
            count.min(number.limit)
        } else {
            count
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        for p in &mut self.particles {
            p.position.x = p.position.x.clamp(0.0, self.width);
            p.position.y = p.position.y.clamp(0.0, self.height);
        }
        if self.config.interactivity.events.resize {
            let target = self.target_count();
            self.particles.truncate(target);
            self.fill_to_target();
        }
    }

    pub fn pointer_moved(&mut self, pos: Option<Vec2>) {
        self.hover = pos;
    }

    pub fn click(&mut self, pos: Vec2) {
        let (enable, mode) = {
            let click = &self.config.interactivity.events.on_click;
            (click.enable, click.mode)
        };
        if !enable {
            return;
        }
        let quantity = self.config.interactivity.modes.push.quantity;
        match mode {
            ClickMode::Push => {
                for _ in 0..quantity {
                    if self.at_limit() {
                        break;
                    }
                    let p = self.spawn(Some(pos));
                    self.particles.push(p);
                }
                log::debug!(
                    "[particles] push at ({:.0},{:.0}) n={}",
                    pos.x,
                    pos.y,
                    self.particles.len()
                );
            }
            ClickMode::Remove => {
                let keep = self.particles.len().saturating_sub(quantity);
                self.particles.truncate(keep);
            }
        }
    }

    fn at_limit(&self) -> bool {
        let limit = self.config.particles.number.limit;
        limit > 0 && self.particles.len() >= limit
    }

    fn fill_to_target(&mut self) {
        let target = self.target_count();
        while self.particles.len() < target {
            let p = self.spawn(None);
            self.particles.push(p);
        }
    }

    fn spawn(&mut self, at: Option<Vec2>) -> Particle {
        let opts = &self.config.particles;
        let position = at.unwrap_or_else(|| {
            Vec2::new(
                self.rng.gen::<f32>() * self.width,
                self.rng.gen::<f32>() * self.height,
            )
        });
        let angle = match opts.motion.direction {
            MoveDirection::None => self.rng.gen::<f32>() * TAU,
            MoveDirection::Right => 0.0,
            MoveDirection::Bottom => TAU * 0.25,
            MoveDirection::Left => TAU * 0.5,
            MoveDirection::Top => TAU * 0.75,
        };
        let magnitude = if opts.motion.random {
            self.rng.gen::<f32>() * opts.motion.speed
        } else {
            opts.motion.speed
        };
        let (min, max) = opts.size.value.bounds();
        let radius = if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        let colors = opts.color.value.colors();
        let color = colors
            .get(self.next_color % colors.len().max(1))
            .copied()
            .unwrap_or(Rgba::WHITE);
        self.next_color = self.next_color.wrapping_add(1);
        Particle {
            position,
            velocity: Vec2::new(angle.cos(), angle.sin()) * magnitude * self.scale,
            radius: radius * self.scale,
            color,
        }
    }

    /// Advance by `dt_sec`. Returns false when the frame was skipped by the fps limit.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        self.since_last_step += dt_sec.max(0.0);
        let limit = self.config.fps_limit;
        if limit > 0 && self.since_last_step < 1.0 / limit as f32 {
            return false;
        }
        let dt = self.since_last_step.min(0.1);
        self.since_last_step = 0.0;

        if self.config.particles.motion.enable {
            let frames = dt * REFERENCE_FPS;
            let out_mode = self.config.particles.motion.out_modes.default;
            let (w, h) = (self.width, self.height);
            for p in &mut self.particles {
                p.position += p.velocity * frames;
                match out_mode {
                    OutMode::Out => wrap_out(p, w, h),
                    OutMode::Bounce => bounce(p, w, h),
                }
            }
        }
        self.apply_hover(dt);
        true
    }

    fn apply_hover(&mut self, dt: f32) {
        let hover = &self.config.interactivity.events.on_hover;
        let Some(pointer) = self.hover else {
            return;
        };
        if !hover.enable {
            return;
        }
        let repulse = &self.config.interactivity.modes.repulse;
        let distance = repulse.distance * self.scale;
        let rate = (dt / repulse.duration).min(1.0);
        let sign = match hover.mode {
            HoverMode::Repulse => 1.0,
            HoverMode::Attract => -1.0,
        };
        for p in &mut self.particles {
            let delta = p.position - pointer;
            let d = delta.length();
            if d <= f32::EPSILON || d >= distance {
                continue;
            }
            let push = (distance - d) * rate * sign;
            p.position += delta / d * push;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface2d) {
        surface.clear();
        let opts = &self.config.particles;
        if opts.links.enable {
            let max_d = opts.links.distance * self.scale;
            let width = opts.links.width * self.scale;
            for (i, a) in self.particles.iter().enumerate() {
                for b in &self.particles[i + 1..] {
                    let d = a.position.distance(b.position);
                    if d < max_d {
                        let alpha = opts.links.opacity * (1.0 - d / max_d);
                        surface.stroke_line(a.position, b.position, opts.links.color, alpha, width);
                    }
                }
            }
        }
        for p in &self.particles {
            surface.fill_glow_circle(p.position, p.radius, p.color, opts.opacity.value, 0.0);
        }
    }

    pub fn frame(&mut self, surface: &mut dyn Surface2d, dt_sec: f32) {
        let (w, h) = surface.size();
        if w as f32 != self.width || h as f32 != self.height {
            self.resize(w, h);
        }
        if self.step(dt_sec) {
            self.draw(surface);
        }
    }
}

fn wrap_out(p: &mut Particle, w: f32, h: f32) {
    let r = p.radius;
    if p.position.x < -r {
        p.position.x = w + r;
    } else if p.position.x > w + r {
        p.position.x = -r;
    }
    if p.position.y < -r {
        p.position.y = h + r;
    } else if p.position.y > h + r {
        p.position.y = -r;
    }
}

fn bounce(p: &mut Particle, w: f32, h: f32) {
    if p.position.x < 0.0 || p.position.x > w {
        p.velocity.x = -p.velocity.x;
        p.position.x = p.position.x.clamp(0.0, w);
    }
    if p.position.y < 0.0 || p.position.y > h {
        p.velocity.y = -p.velocity.y;
        p.position.y = p.position.y.clamp(0.0, h);
    }
}
