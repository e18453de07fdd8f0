use crate::constants::*;
use crate::dom::{self, ListenerGuard};
use crate::layout;
use fnv::FnvHashMap;
use portfolio_core::content;
use portfolio_core::scroll::SectionBounds;
use portfolio_core::SectionId;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Section elements looked up once at startup, keyed by id.
pub struct Sections {
    elements: FnvHashMap<SectionId, web::Element>,
}

impl Sections {
    pub fn find(document: &web::Document) -> Sections {
        let mut elements = FnvHashMap::default();
        for id in SectionId::ALL {
            match document.get_element_by_id(id.as_str()) {
                Some(el) => {
                    elements.insert(id, el);
                }
                None => log::warn!("[sections] missing #{}", id),
            }
        }
        Sections { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Document-space bounds in page order, which is the tracker's tie-break order.
    pub fn measure(&self, scroll_y: f64) -> Vec<SectionBounds> {
        SectionId::ALL
            .iter()
            .filter_map(|id| {
                let rect = self.elements.get(id)?.get_bounding_client_rect();
                let (top, bottom) = layout::document_bounds(rect.top(), rect.bottom(), scroll_y);
                Some(SectionBounds::new(*id, top, bottom))
            })
            .collect()
    }
}

pub fn render_content(document: &web::Document) {
    dom::set_inner_html_by_id(document, HERO_CONTENT_ID, &content::hero_html(&content::HERO));
    dom::set_inner_html_by_id(document, ABOUT_CONTENT_ID, &content::about_html());
    dom::set_inner_html_by_id(document, RESUME_CONTENT_ID, &content::resume_html());
    dom::set_inner_html_by_id(
        document,
        PROJECTS_CONTENT_ID,
        &content::projects_html(content::PROJECTS),
    );
    dom::set_inner_html_by_id(
        document,
        CONTACT_CONTENT_ID,
        &content::contact_html(&content::CONTACT),
    );
}

fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Mark the nav link(s) for `active` and clear the rest.
pub fn highlight_nav(document: &web::Document, active: SectionId) {
    for link in query_all(document, NAV_LINK_SELECTOR) {
        let is_active = link.get_attribute(NAV_SECTION_ATTR).as_deref() == Some(active.as_str());
        _ = link
            .class_list()
            .toggle_with_force(NAV_ACTIVE_CLASS, is_active);
    }
}

/// Smooth-scroll to the target section when a nav link or call-to-action is clicked.
pub fn wire_nav_clicks(document: &web::Document) -> Vec<ListenerGuard> {
    let mut guards = Vec::new();
    for link in query_all(document, SCROLL_LINK_SELECTOR) {
        let Some(id) = link
            .get_attribute(NAV_SECTION_ATTR)
            .as_deref()
            .and_then(SectionId::from_id)
        else {
            continue;
        };
        let doc = document.clone();
        let guard = dom::listen(&link, "click", move |ev: web::MouseEvent| {
            if let Some(target) = doc.get_element_by_id(id.as_str()) {
                ev.prevent_default();
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
                log::debug!("[nav] scroll to {}", id);
            }
        });
        guards.extend(guard);
    }
    guards
}

/// The contact form has nowhere to post; keep it from reloading the page.
pub fn wire_contact_form(document: &web::Document) -> Option<ListenerGuard> {
    let form = document.query_selector(CONTACT_FORM_SELECTOR).ok().flatten()?;
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        log::info!("[contact] form submitted (static page, nothing sent)");
    })
}
