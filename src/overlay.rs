use crate::constants::{HIDDEN_CLASS, LOADING_SCREEN_ID};
use web_sys as web;

#[inline]
pub fn show_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    }
}
