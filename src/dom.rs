use crate::layout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Registered event listener; removed from its target when dropped.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Add `handler` for `event` on `target`. Events that are not an `E` are ignored.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> Option<ListenerGuard>
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        Ok(()) => Some(ListenerGuard {
            target: target.clone(),
            event,
            closure,
        }),
        Err(e) => {
            log::warn!("[dom] could not listen for {}: {:?}", event, e);
            None
        }
    }
}

/// Like [`listen`], registered as passive (scroll, touch).
pub fn listen_passive<E>(
    target: &web::EventTarget,
    event: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> Option<ListenerGuard>
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    match target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        Ok(()) => Some(ListenerGuard {
            target: target.clone(),
            event,
            closure,
        }),
        Err(e) => {
            log::warn!("[dom] could not listen for {}: {:?}", event, e);
            None
        }
    }
}

#[inline]
pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Size the canvas backing store to the window (times `pixel_ratio`).
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement, pixel_ratio: f64) {
    if let Some(w) = web::window() {
        let (iw, ih) = inner_size(&w);
        let (w_px, h_px) = layout::canvas_size_for_window(iw, ih, pixel_ratio);
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn html_element(el: &web::Element) -> Option<&web::HtmlElement> {
    el.dyn_ref::<web::HtmlElement>()
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = html_element(el) {
        _ = h.style().set_property(property, value);
    }
}

pub fn set_inner_html_by_id(document: &web::Document, id: &str, html: &str) {
    match document.get_element_by_id(id) {
        Some(el) => el.set_inner_html(html),
        None => log::debug!("[dom] no #{} to fill", id),
    }
}
