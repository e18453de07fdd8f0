//! Page-level state owned by the front-end controller.
//!
//! Everything that used to live in ambient component state (current section,
//! scroll position, loading flag) is kept here and handed to the pieces that
//! need it.

use crate::constants::{MOBILE_BREAKPOINT_PX, SCROLL_SETTLE_MS};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Resume,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Resume,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the section element, also used in `data-section` on nav links.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Resume => "resume",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Resume => "Resume",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }
}

#[derive(Clone, Debug)]
pub struct PageState {
    pub active_section: SectionId,
    pub scroll_y: f32,
    pub viewport: Viewport,
    pub loading: bool,
    last_scroll_ms: Option<f64>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Home,
            scroll_y: 0.0,
            viewport: Viewport::default(),
            loading: true,
            last_scroll_ms: None,
        }
    }
}

impl PageState {
    pub fn record_scroll(&mut self, scroll_y: f32, now_ms: f64) {
        self.scroll_y = scroll_y;
        self.last_scroll_ms = Some(now_ms);
    }

    /// True until [`SCROLL_SETTLE_MS`] have passed since the last scroll.
    pub fn is_scrolling(&self, now_ms: f64) -> bool {
        self.last_scroll_ms
            .map(|t| now_ms - t < SCROLL_SETTLE_MS)
            .unwrap_or(false)
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}
