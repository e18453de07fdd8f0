use portfolio_core::scroll::{section_at, viewport_midpoint, FrameGate, SectionBounds, SectionTracker};
use portfolio_core::{PageState, SectionId, Viewport};

fn page_layout() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new(SectionId::Home, 0.0, 800.0),
        SectionBounds::new(SectionId::About, 800.0, 1000.0),
        SectionBounds::new(SectionId::Resume, 1000.0, 2000.0),
        SectionBounds::new(SectionId::Projects, 2000.0, 3000.0),
        SectionBounds::new(SectionId::Contact, 3000.0, 3600.0),
    ]
}

#[test]
fn midpoint_is_half_a_viewport_below_scroll() {
    assert_eq!(viewport_midpoint(500.0, 1000.0), 1000.0);
}

#[test]
fn shared_boundary_resolves_to_later_section() {
    let layout = page_layout();
    assert_eq!(section_at(&layout, 1000.0), Some(SectionId::Resume));
    assert_eq!(section_at(&layout, 999.0), Some(SectionId::About));
    assert_eq!(section_at(&layout, 0.0), Some(SectionId::Home));
    assert_eq!(section_at(&layout, 3600.0), Some(SectionId::Contact));
    assert_eq!(section_at(&layout, 3600.5), None);
}

#[test]
fn tracker_reports_only_changes() {
    let mut tracker = SectionTracker::new(SectionId::Home);
    tracker.set_sections(page_layout());
    // midpoint 1000 sits on the about/resume boundary
    assert_eq!(tracker.update(500.0, 1000.0), Some(SectionId::Resume));
    assert_eq!(tracker.active(), SectionId::Resume);
    assert_eq!(tracker.update(600.0, 1000.0), None);
    assert_eq!(tracker.update(1800.0, 1000.0), Some(SectionId::Projects));
}

#[test]
fn no_match_keeps_previous_section() {
    let mut tracker = SectionTracker::new(SectionId::Home);
    tracker.set_sections(page_layout());
    tracker.update(1800.0, 1000.0);
    assert_eq!(tracker.active(), SectionId::Projects);
    assert_eq!(tracker.update(9_000.0, 1000.0), None);
    assert_eq!(tracker.active(), SectionId::Projects);
}

#[test]
fn empty_layout_keeps_initial_section() {
    let mut tracker = SectionTracker::new(SectionId::About);
    assert_eq!(tracker.update(0.0, 800.0), None);
    assert_eq!(tracker.active(), SectionId::About);
}

#[test]
fn viewport_intersection_excludes_touching_edges() {
    let resume = SectionBounds::new(SectionId::Resume, 1000.0, 2000.0);
    assert!(!resume.intersects_viewport(0.0, 1000.0));
    assert!(resume.intersects_viewport(1.0, 1000.0));
    assert!(resume.intersects_viewport(1500.0, 1000.0));
    assert!(!resume.intersects_viewport(2000.0, 1000.0));
}

#[test]
fn frame_gate_coalesces_bursts() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.request());
    assert!(gate.is_pending());
    gate.release();
    assert!(!gate.is_pending());
    assert!(gate.request());
}

#[test]
fn scrolling_flag_settles_after_quiet_period() {
    let mut page = PageState::default();
    assert!(!page.is_scrolling(0.0));
    page.record_scroll(320.0, 1_000.0);
    assert_eq!(page.scroll_y, 320.0);
    assert!(page.is_scrolling(1_000.0));
    assert!(page.is_scrolling(1_149.0));
    assert!(!page.is_scrolling(1_150.0));
    page.record_scroll(400.0, 1_140.0);
    assert!(page.is_scrolling(1_200.0));
}

#[test]
fn page_starts_loading_on_home() {
    let mut page = PageState::default();
    assert!(page.loading);
    assert_eq!(page.active_section, SectionId::Home);
    page.finish_loading();
    assert!(!page.loading);
}

#[test]
fn mobile_breakpoint() {
    assert!(Viewport::new(767.0, 1000.0).is_mobile());
    assert!(!Viewport::new(768.0, 1000.0).is_mobile());
}

#[test]
fn section_ids_match_dom_ids() {
    for id in SectionId::ALL {
        assert_eq!(SectionId::from_id(id.as_str()), Some(id));
    }
    assert_eq!(SectionId::from_id("blog"), None);
    assert_eq!(
        serde_json::to_string(&SectionId::Projects).unwrap(),
        "\"projects\""
    );
    assert_eq!(SectionId::Resume.label(), "Resume");
}

#[test]
fn closed_gate_drops_in_flight_callback() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    // page torn down before the scheduled frame fires
    gate.close();
    assert!(gate.is_closed());
    assert!(!gate.release());
    assert!(!gate.request());
}

#[test]
fn open_gate_runs_its_callback() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(gate.release());
}
