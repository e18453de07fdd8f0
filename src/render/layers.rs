use super::CanvasSurface;
use portfolio_core::nebula::Nebula;
use portfolio_core::particles::ParticleSystem;
use portfolio_core::starfield::Starfield;
use portfolio_core::{FrameTime, PageState, RenderTick};
use std::cell::RefCell;
use std::rc::Rc;

pub struct StarfieldLayer {
    pub surface: CanvasSurface,
    pub stars: Starfield,
}

impl RenderTick for StarfieldLayer {
    fn tick(&mut self, time: FrameTime) {
        self.stars.frame(&mut self.surface, time.now_sec());
    }
}

/// Reads the live scroll offset each frame, so parallax never lags a
/// re-created closure.
pub struct NebulaLayer {
    pub surface: CanvasSurface,
    pub nebula: Nebula,
    pub page: Rc<RefCell<PageState>>,
}

impl RenderTick for NebulaLayer {
    fn tick(&mut self, _time: FrameTime) {
        let scroll_y = self.page.borrow().scroll_y;
        self.nebula.frame(&mut self.surface, scroll_y);
    }
}

pub struct ParticleLayer {
    pub surface: CanvasSurface,
    pub particles: Rc<RefCell<ParticleSystem>>,
}

impl RenderTick for ParticleLayer {
    fn tick(&mut self, time: FrameTime) {
        self.particles
            .borrow_mut()
            .frame(&mut self.surface, time.dt_sec);
    }
}
