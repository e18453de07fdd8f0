use portfolio_core::{FrameClock, RenderTick};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Running requestAnimationFrame chain. Stopping (or dropping) it halts
/// future scheduling.
pub struct LoopHandle {
    name: &'static str,
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    closure: RafClosure,
}

impl LoopHandle {
    pub fn stop(&self) {
        if !self.alive.replace(false) {
            return;
        }
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> Rc -> closure cycle
        self.closure.borrow_mut().take();
        log::debug!("[frame] stopped {}", self.name);
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(closure: &RafClosure, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = closure.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// Drive `tick` once per animation frame until the handle is stopped.
pub fn start_loop<R>(name: &'static str, tick: Rc<RefCell<R>>) -> LoopHandle
where
    R: RenderTick + 'static,
{
    let alive = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let closure: RafClosure = Rc::new(RefCell::new(None));

    let alive_tick = alive.clone();
    let raf_tick = raf_id.clone();
    let closure_tick = closure.clone();
    let mut clock = FrameClock::default();
    *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        raf_tick.set(None);
        if !alive_tick.get() {
            return;
        }
        let time = clock.advance(ts);
        tick.borrow_mut().tick(time);
        if alive_tick.get() {
            schedule(&closure_tick, &raf_tick);
        }
    }) as Box<dyn FnMut(f64)>));

    schedule(&closure, &raf_id);
    log::debug!("[frame] started {}", name);
    LoopHandle {
        name,
        alive,
        raf_id,
        closure,
    }
}

/// Run `f` on the next animation frame, once.
pub fn next_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
