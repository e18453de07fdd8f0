use crate::constants::PLANETS_CONTAINER_ID;
use crate::dom;
use crate::layout;
use portfolio_core::planets::{PlanetConfig, PoseGate, PLANETS};
use portfolio_core::scroll::SectionTracker;
use portfolio_core::{FrameTime, PageState, RenderTick};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct PlanetNodes {
    config: &'static PlanetConfig,
    root: web::Element,
    body: web::Element,
    detail: Vec<web::Element>,
}

/// Decorative planets, one per section, posed from the scroll offset.
pub struct PlanetsView {
    planets: Vec<PlanetNodes>,
    page: Rc<RefCell<PageState>>,
    tracker: Rc<RefCell<SectionTracker>>,
    gate: PoseGate,
}

impl PlanetsView {
    pub fn mount(
        document: &web::Document,
        page: Rc<RefCell<PageState>>,
        tracker: Rc<RefCell<SectionTracker>>,
    ) -> Option<PlanetsView> {
        let container = document.get_element_by_id(PLANETS_CONTAINER_ID)?;
        let mut planets = Vec::with_capacity(PLANETS.len());
        for config in PLANETS.iter() {
            if let Some(nodes) = build_planet(document, config) {
                _ = container.append_child(&nodes.root);
                planets.push(nodes);
            }
        }
        log::info!("[planets] mounted {}", planets.len());
        Some(PlanetsView {
            planets,
            page,
            tracker,
            gate: PoseGate::default(),
        })
    }
}

impl RenderTick for PlanetsView {
    fn tick(&mut self, _time: FrameTime) {
        let (scroll_y, viewport) = {
            let page = self.page.borrow();
            (page.scroll_y, page.viewport)
        };
        if !self.gate.changed(scroll_y, viewport) {
            return;
        }

        let tracker = self.tracker.borrow();
        for p in &self.planets {
            let visible = tracker
                .sections()
                .iter()
                .find(|s| s.id == p.config.section)
                .map(|s| s.intersects_viewport(scroll_y, viewport.height))
                .unwrap_or(false);
            let pose = p.config.pose(scroll_y, viewport, visible);
            dom::set_style(&p.root, "transform", &layout::planet_transform(pose.parallax_offset));
            dom::set_style(&p.root, "opacity", &pose.opacity.to_string());
            dom::set_style(&p.body, "width", &format!("{:.0}px", pose.size));
            dom::set_style(&p.body, "height", &format!("{:.0}px", pose.size));
            dom::set_style(&p.body, "transform", &format!("rotate({:.1}deg)", pose.rotation_deg));
            let display = if pose.detailed { "" } else { "none" };
            for d in &p.detail {
                dom::set_style(d, "display", display);
            }
        }
    }
}

impl Drop for PlanetsView {
    fn drop(&mut self) {
        for p in &self.planets {
            p.root.remove();
        }
    }
}

fn build_planet(document: &web::Document, config: &'static PlanetConfig) -> Option<PlanetNodes> {
    let root = document.create_element("div").ok()?;
    root.set_class_name("planet");
    dom::set_style(&root, "position", "fixed");
    dom::set_style(&root, "pointer-events", "none");
    dom::set_style(&root, "left", &format!("{}%", config.anchor.x * 100.0));
    dom::set_style(&root, "top", &format!("{}%", config.anchor.y * 100.0));

    let body = document.create_element("div").ok()?;
    body.set_class_name("planet-body");
    dom::set_style(&body, "background", config.gradient);
    dom::set_style(&body, "border-radius", "50%");
    _ = root.append_child(&body);

    let mut detail = Vec::new();
    if config.atmosphere {
        let glow = document.create_element("div").ok()?;
        glow.set_class_name("planet-atmosphere");
        dom::set_style(&glow, "background", config.gradient);
        _ = root.append_child(&glow);
        detail.push(glow);
    }
    if config.rings {
        let ring = document.create_element("div").ok()?;
        ring.set_class_name("planet-ring");
        _ = body.append_child(&ring);
        let outer = document.create_element("div").ok()?;
        outer.set_class_name("planet-ring planet-ring-outer");
        _ = body.append_child(&outer);
        detail.push(outer);
    }
    let moon = document.create_element("div").ok()?;
    moon.set_class_name("planet-moon");
    dom::set_style(&moon, "--orbit-radius", &format!("{}px", config.orbit_radius));
    _ = body.append_child(&moon);
    detail.push(moon);

    let label = document.create_element("div").ok()?;
    label.set_class_name("planet-label");
    label.set_text_content(Some(config.name));
    _ = root.append_child(&label);

    Some(PlanetNodes {
        config,
        root,
        body,
        detail,
    })
}
