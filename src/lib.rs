#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod controller;
mod cursor;
mod dom;
mod events;
mod frame;
mod layout;
mod overlay;
mod planets;
mod render;
mod sections;

use controller::PageController;

thread_local! {
    static PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        // never leave the page stuck behind the loader
        if let Some(document) = web::window().and_then(|w| w.document()) {
            overlay::hide_loading(&document);
        }
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let controller = PageController::mount(&window, document)?;
    PAGE.with(|p| {
        if let Some(previous) = p.borrow_mut().replace(controller) {
            log::warn!("[page] replacing an already mounted page");
            previous.teardown();
        }
    });
    Ok(())
}

/// Remove all listeners and stop all animation loops.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(controller) = PAGE.with(|p| p.borrow_mut().take()) {
        controller.teardown();
    }
}

/// Id of the section currently highlighted in the navigation.
#[wasm_bindgen(js_name = "activeSection")]
pub fn active_section() -> Option<String> {
    PAGE.with(|p| {
        p.borrow()
            .as_ref()
            .map(|c| c.active_section().as_str().to_string())
    })
}
