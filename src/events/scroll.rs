use crate::constants::SCROLLING_CLASS;
use crate::controller::PageHandles;
use crate::dom::{self, ListenerGuard};
use crate::frame;
use crate::overlay;
use crate::sections;
use portfolio_core::{FrameTime, PageState, RenderTick};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scroll events are coalesced to one evaluation per animation frame.
pub fn wire_scroll(h: &PageHandles) -> Option<ListenerGuard> {
    let window = web::window()?;
    let h = h.clone();
    dom::listen_passive(&window, "scroll", move |_ev: web::Event| {
        if !h.scroll_gate.borrow_mut().request() {
            return;
        }
        let h = h.clone();
        frame::next_frame(move || {
            // closed by teardown while this frame was pending
            if h.scroll_gate.borrow_mut().release() {
                evaluate_scroll(&h);
            }
        });
    })
}

/// Read the scroll offset, re-measure sections and resolve the active one.
pub fn evaluate_scroll(h: &PageHandles) {
    let Some(window) = web::window() else {
        return;
    };
    let scroll_y = dom::scroll_y(&window);
    let viewport_height = {
        let mut page = h.page.borrow_mut();
        page.record_scroll(scroll_y as f32, js_sys::Date::now());
        page.viewport.height
    };
    let bounds = h.sections.measure(scroll_y);
    let changed = {
        let mut tracker = h.tracker.borrow_mut();
        tracker.set_sections(bounds);
        tracker.update(scroll_y as f32, viewport_height)
    };
    if let Some(id) = changed {
        h.page.borrow_mut().active_section = id;
        sections::highlight_nav(&h.document, id);
        log::info!("[scroll] active section -> {}", id);
    }
}

/// Mirrors the page's scrolling flag onto a body class.
pub struct ScrollActivity {
    document: web::Document,
    page: Rc<RefCell<PageState>>,
    shown: bool,
}

impl ScrollActivity {
    pub fn new(document: web::Document, page: Rc<RefCell<PageState>>) -> Self {
        Self {
            document,
            page,
            shown: false,
        }
    }
}

impl RenderTick for ScrollActivity {
    fn tick(&mut self, _time: FrameTime) {
        let scrolling = self.page.borrow().is_scrolling(js_sys::Date::now());
        if scrolling != self.shown {
            self.shown = scrolling;
            overlay::set_body_class(&self.document, SCROLLING_CLASS, scrolling);
        }
    }
}
