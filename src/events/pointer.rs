use crate::controller::PageHandles;
use crate::dom::{self, ListenerGuard};
use crate::layout;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(h: &PageHandles) -> Vec<ListenerGuard> {
    let mut guards = Vec::new();
    guards.extend(wire_pointermove(h));
    guards.extend(wire_pointerover(h));
    guards.extend(wire_pointerleave(h));
    guards.extend(wire_click(h));
    guards
}

fn particle_pos(h: &PageHandles, ev: &web::MouseEvent) -> Vec2 {
    let [x, y] = layout::client_to_canvas(
        ev.client_x() as f64,
        ev.client_y() as f64,
        h.particle_ratio,
    );
    Vec2::new(x, y)
}

fn wire_pointermove(h: &PageHandles) -> Option<ListenerGuard> {
    let window = web::window()?;
    let h = h.clone();
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        h.cursor.borrow_mut().pointer_moved(client);
        if let Some(p) = &h.particles {
            p.borrow_mut().pointer_moved(Some(particle_pos(&h, &ev)));
        }
    })
}

fn wire_pointerover(h: &PageHandles) -> Option<ListenerGuard> {
    let window = web::window()?;
    let h = h.clone();
    dom::listen(&window, "pointerover", move |ev: web::PointerEvent| {
        let tag = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.tag_name())
            .unwrap_or_default();
        let mut cursor = h.cursor.borrow_mut();
        let was = cursor.is_hovering();
        cursor.pointer_over(&tag);
        if was != cursor.is_hovering() {
            log::debug!("[cursor] hovering={} ({})", cursor.is_hovering(), tag);
        }
    })
}

fn wire_pointerleave(h: &PageHandles) -> Option<ListenerGuard> {
    let root = h.document.document_element()?;
    let h = h.clone();
    dom::listen(&root, "pointerleave", move |_ev: web::PointerEvent| {
        if let Some(p) = &h.particles {
            p.borrow_mut().pointer_moved(None);
        }
    })
}

fn wire_click(h: &PageHandles) -> Option<ListenerGuard> {
    let window = web::window()?;
    let h = h.clone();
    dom::listen(&window, "click", move |ev: web::MouseEvent| {
        if let Some(p) = &h.particles {
            p.borrow_mut().click(particle_pos(&h, &ev));
        }
    })
}
