use crate::constants::{CURSOR_DOT_CLASS, CURSOR_RING_CLASS};
use crate::dom;
use crate::layout;
use portfolio_core::cursor::CursorFollower;
use portfolio_core::{FrameTime, RenderTick};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Ring and dot elements that mirror a [`CursorFollower`].
pub struct CursorView {
    ring: web::Element,
    dot: web::Element,
    follower: Rc<RefCell<CursorFollower>>,
}

impl CursorView {
    pub fn mount(
        document: &web::Document,
        follower: Rc<RefCell<CursorFollower>>,
    ) -> Option<CursorView> {
        let body = document.body()?;
        let ring = create_div(document, CURSOR_RING_CLASS)?;
        let dot = create_div(document, CURSOR_DOT_CLASS)?;
        for el in [&ring, &dot] {
            dom::set_style(el, "position", "fixed");
            dom::set_style(el, "top", "0");
            dom::set_style(el, "left", "0");
            dom::set_style(el, "pointer-events", "none");
            dom::set_style(el, "border-radius", "50%");
            dom::set_style(el, "z-index", "9999");
            _ = body.append_child(el);
        }
        dom::set_style(&ring, "border", "2px solid");
        Some(CursorView {
            ring,
            dot,
            follower,
        })
    }

    fn apply(&self) {
        let style = self.follower.borrow().style();
        let transform = layout::cursor_transform(style.position.x, style.position.y);
        let color = style.color.to_hex();

        dom::set_style(&self.ring, "transform", &transform);
        dom::set_style(&self.ring, "width", &format!("{:.1}px", style.outer_size));
        dom::set_style(&self.ring, "height", &format!("{:.1}px", style.outer_size));
        dom::set_style(&self.ring, "border-color", &color);
        dom::set_style(&self.ring, "box-shadow", &style.glow);

        dom::set_style(&self.dot, "transform", &transform);
        dom::set_style(&self.dot, "width", &format!("{:.1}px", style.inner_size));
        dom::set_style(&self.dot, "height", &format!("{:.1}px", style.inner_size));
        dom::set_style(&self.dot, "background-color", &color);
    }
}

impl RenderTick for CursorView {
    fn tick(&mut self, time: FrameTime) {
        self.follower.borrow_mut().step(time.dt_sec);
        self.apply();
    }
}

impl Drop for CursorView {
    fn drop(&mut self) {
        self.ring.remove();
        self.dot.remove();
    }
}

fn create_div(document: &web::Document, class: &str) -> Option<web::Element> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class);
    Some(el)
}
