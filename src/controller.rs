use crate::constants::*;
use crate::cursor::CursorView;
use crate::dom::{self, ListenerGuard};
use crate::events;
use crate::frame::{self, LoopHandle};
use crate::overlay;
use crate::planets::PlanetsView;
use crate::render::{CanvasSurface, NebulaLayer, ParticleLayer, StarfieldLayer};
use crate::sections::{self, Sections};
use portfolio_core::constants::STAR_COUNT;
use portfolio_core::cursor::CursorFollower;
use portfolio_core::nebula::Nebula;
use portfolio_core::particles::{ParticleConfig, ParticleSystem};
use portfolio_core::scroll::{FrameGate, SectionTracker};
use portfolio_core::starfield::Starfield;
use portfolio_core::{PageState, SectionId, Viewport};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared state handed to event handlers and frame ticks.
#[derive(Clone)]
pub struct PageHandles {
    pub document: web::Document,
    pub page: Rc<RefCell<PageState>>,
    pub tracker: Rc<RefCell<SectionTracker>>,
    pub sections: Rc<Sections>,
    pub cursor: Rc<RefCell<CursorFollower>>,
    pub particles: Option<Rc<RefCell<ParticleSystem>>>,
    /// Background canvases with the pixel ratio their backing store uses.
    pub canvases: Rc<Vec<(web::HtmlCanvasElement, f64)>>,
    pub particle_ratio: f64,
    pub scroll_gate: Rc<RefCell<FrameGate>>,
    pub resize_gate: Rc<RefCell<FrameGate>>,
}

/// Owns every listener and animation loop of the page. Dropping it tears
/// the page's behavior down.
pub struct PageController {
    handles: PageHandles,
    listeners: Vec<ListenerGuard>,
    loops: SmallVec<[LoopHandle; 8]>,
}

impl PageController {
    pub fn mount(window: &web::Window, document: web::Document) -> anyhow::Result<Self> {
        let page = Rc::new(RefCell::new(PageState::default()));
        let (iw, ih) = dom::inner_size(window);
        page.borrow_mut().viewport = Viewport::new(iw as f32, ih as f32);
        overlay::show_loading(&document);

        sections::render_content(&document);
        let sections = Sections::find(&document);
        if sections.is_empty() {
            anyhow::bail!("no section elements found");
        }
        log::info!("[page] {} sections", sections.len());
        let sections = Rc::new(sections);

        let pixel_ratio = window.device_pixel_ratio();
        let particle_config = load_particle_config(&document);
        let particle_ratio = if particle_config.detect_retina {
            pixel_ratio
        } else {
            1.0
        };

        let mut canvases = Vec::new();
        let mut loops: SmallVec<[LoopHandle; 8]> = SmallVec::new();

        if let Some(canvas) = dom::canvas_by_id(&document, STARFIELD_CANVAS_ID) {
            dom::sync_canvas_to_window(&canvas, 1.0);
            canvases.push((canvas.clone(), 1.0));
            match CanvasSurface::new(canvas.clone()) {
                Some(surface) => {
                    let stars = Starfield::new(
                        STAR_COUNT,
                        canvas.width(),
                        canvas.height(),
                        rand::random(),
                    );
                    let layer = Rc::new(RefCell::new(StarfieldLayer { surface, stars }));
                    loops.push(frame::start_loop("starfield", layer));
                }
                None => log::warn!("[render] no 2d context for #{}", STARFIELD_CANVAS_ID),
            }
        }

        if let Some(canvas) = dom::canvas_by_id(&document, NEBULA_CANVAS_ID) {
            dom::sync_canvas_to_window(&canvas, 1.0);
            canvases.push((canvas.clone(), 1.0));
            match CanvasSurface::new(canvas) {
                Some(surface) => {
                    let layer = Rc::new(RefCell::new(NebulaLayer {
                        surface,
                        nebula: Nebula::default(),
                        page: page.clone(),
                    }));
                    loops.push(frame::start_loop("nebula", layer));
                }
                None => log::warn!("[render] no 2d context for #{}", NEBULA_CANVAS_ID),
            }
        }

        let mut particles = None;
        if let Some(canvas) = dom::canvas_by_id(&document, PARTICLES_CANVAS_ID) {
            dom::sync_canvas_to_window(&canvas, particle_ratio);
            canvases.push((canvas.clone(), particle_ratio));
            match CanvasSurface::new(canvas.clone()) {
                Some(surface) => {
                    let system = Rc::new(RefCell::new(ParticleSystem::new(
                        particle_config,
                        canvas.width(),
                        canvas.height(),
                        particle_ratio as f32,
                        rand::random(),
                    )));
                    log::info!("[particles] {} particles", system.borrow().particles().len());
                    let layer = Rc::new(RefCell::new(ParticleLayer {
                        surface,
                        particles: system.clone(),
                    }));
                    loops.push(frame::start_loop("particles", layer));
                    particles = Some(system);
                }
                None => log::warn!("[render] no 2d context for #{}", PARTICLES_CANVAS_ID),
            }
        }

        let handles = PageHandles {
            document: document.clone(),
            page: page.clone(),
            tracker: Rc::new(RefCell::new(SectionTracker::new(SectionId::Home))),
            sections,
            cursor: Rc::new(RefCell::new(CursorFollower::default())),
            particles,
            canvases: Rc::new(canvases),
            particle_ratio,
            scroll_gate: Rc::new(RefCell::new(FrameGate::default())),
            resize_gate: Rc::new(RefCell::new(FrameGate::default())),
        };

        if let Some(view) = CursorView::mount(&document, handles.cursor.clone()) {
            loops.push(frame::start_loop("cursor", Rc::new(RefCell::new(view))));
        }
        if let Some(view) = PlanetsView::mount(&document, page.clone(), handles.tracker.clone()) {
            loops.push(frame::start_loop("planets", Rc::new(RefCell::new(view))));
        }
        loops.push(frame::start_loop(
            "scroll-activity",
            Rc::new(RefCell::new(events::ScrollActivity::new(
                document.clone(),
                page.clone(),
            ))),
        ));

        let mut listeners = Vec::new();
        listeners.extend(events::wire_scroll(&handles));
        listeners.extend(events::wire_resize(&handles));
        listeners.extend(events::wire_pointer_handlers(&handles));
        listeners.extend(sections::wire_nav_clicks(&document));
        listeners.extend(sections::wire_contact_form(&document));

        // initial evaluation so the nav reflects a restored scroll position
        events::evaluate_scroll(&handles);
        let active = handles.page.borrow().active_section;
        sections::highlight_nav(&document, active);

        page.borrow_mut().finish_loading();
        overlay::hide_loading(&document);
        log::info!(
            "[page] mounted: {} loops, {} listeners, active={}",
            loops.len(),
            listeners.len(),
            active
        );

        Ok(Self {
            handles,
            listeners,
            loops,
        })
    }

    pub fn active_section(&self) -> SectionId {
        self.handles.page.borrow().active_section
    }

    /// Halt every loop and remove every listener.
    pub fn teardown(mut self) {
        self.handles.scroll_gate.borrow_mut().close();
        self.handles.resize_gate.borrow_mut().close();
        for l in &self.loops {
            l.stop();
        }
        self.loops.clear();
        self.listeners.clear();
        overlay::set_body_class(&self.handles.document, SCROLLING_CLASS, false);
        log::info!("[page] torn down");
    }
}

fn load_particle_config(document: &web::Document) -> ParticleConfig {
    let Some(text) = document
        .get_element_by_id(PARTICLES_CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return ParticleConfig::default();
    };
    match ParticleConfig::from_json(&text) {
        Ok(c) => {
            log::info!("[particles] using page config");
            c
        }
        Err(e) => {
            log::warn!("[particles] {}; using defaults", e);
            ParticleConfig::default()
        }
    }
}
