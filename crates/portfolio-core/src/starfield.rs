use crate::color::Rgba;
use crate::constants::*;
use crate::surface::Surface2d;
use glam::Vec2;
use rand::prelude::*;

const STAR_CYAN: Rgba = Rgba::rgb(0, 255, 255);

#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub opacity: f32,
    pub color: Rgba,
}

impl Star {
    fn random(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(
                rng.gen::<f32>() * width,
                rng.gen::<f32>() * height,
            ),
            radius: rng.gen::<f32>() * STAR_RADIUS_SPAN + STAR_RADIUS_MIN,
            speed: rng.gen::<f32>() * STAR_SPEED_SPAN + STAR_SPEED_MIN,
            opacity: rng.gen::<f32>() * STAR_OPACITY_SPAN + STAR_OPACITY_MIN,
            color: if rng.gen_bool(STAR_CYAN_PROBABILITY) {
                STAR_CYAN
            } else {
                Rgba::WHITE
            },
        }
    }

    /// Opacity multiplier at `time_sec`, in `[0.4, 1.0]`.
    #[inline]
    pub fn twinkle(&self, time_sec: f64) -> f32 {
        let phase = time_sec + (self.position.x * TWINKLE_PHASE_PER_PX) as f64;
        phase.sin() as f32 * TWINKLE_AMPLITUDE + TWINKLE_BIAS
    }
}

/// Falling, twinkling stars. The star count never changes after construction.
pub struct Starfield {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl Starfield {
    pub fn new(count: usize, width: u32, height: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (w, h) = (width as f32, height as f32);
        let stars = (0..count).map(|_| Star::random(&mut rng, w, h)).collect();
        Self {
            stars,
            width: w,
            height: h,
            rng,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Stars keep their positions; only the wrap and respawn bounds change.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }

    /// Advance one frame: drift down, wrap to the top past the bottom edge.
    pub fn advance(&mut self) {
        for star in &mut self.stars {
            star.position.y += star.speed;
            if star.position.y > self.height {
                star.position.y = 0.0;
                star.position.x = self.rng.gen::<f32>() * self.width;
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface2d, time_sec: f64) {
        surface.clear();
        for star in &self.stars {
            surface.fill_glow_circle(
                star.position,
                star.radius,
                star.color,
                (star.opacity * star.twinkle(time_sec)).clamp(0.0, 1.0),
                star.radius * STAR_GLOW_PER_RADIUS,
            );
        }
    }

    pub fn frame(&mut self, surface: &mut dyn Surface2d, time_sec: f64) {
        let (w, h) = surface.size();
        if w as f32 != self.width || h as f32 != self.height {
            self.resize(w, h);
        }
        self.advance();
        self.draw(surface, time_sec);
    }
}
