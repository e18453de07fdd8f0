use super::scroll::evaluate_scroll;
use crate::controller::PageHandles;
use crate::dom::{self, ListenerGuard};
use crate::frame;
use portfolio_core::Viewport;
use web_sys as web;

/// Resize every background canvas to the window and refresh the viewport.
pub fn apply_resize(h: &PageHandles) {
    let Some(window) = web::window() else {
        return;
    };
    for (canvas, ratio) in h.canvases.iter() {
        dom::sync_canvas_to_window(canvas, *ratio);
    }
    let (w, ht) = dom::inner_size(&window);
    h.page.borrow_mut().viewport = Viewport::new(w as f32, ht as f32);
    log::debug!("[resize] viewport {}x{}", w, ht);
    // sections reflow with the viewport
    evaluate_scroll(h);
}

pub fn wire_resize(h: &PageHandles) -> Option<ListenerGuard> {
    let window = web::window()?;
    let h = h.clone();
    dom::listen(&window, "resize", move |_ev: web::Event| {
        if !h.resize_gate.borrow_mut().request() {
            return;
        }
        let h = h.clone();
        frame::next_frame(move || {
            if h.resize_gate.borrow_mut().release() {
                apply_resize(&h);
            }
        });
    })
}
