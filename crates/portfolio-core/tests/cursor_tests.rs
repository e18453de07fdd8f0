use glam::Vec2;
use portfolio_core::cursor::{is_hover_tag, CursorFollower, Spring, SpringConfig};

const FRAME: f32 = 1.0 / 60.0;

fn run(follower: &mut CursorFollower, seconds: f32) {
    let frames = (seconds / FRAME).round() as usize;
    for _ in 0..frames {
        follower.step(FRAME);
    }
}

#[test]
fn hover_allow_list() {
    for tag in ["BUTTON", "A", "P", "SPAN", "H1", "H2", "H3"] {
        assert!(is_hover_tag(tag), "{}", tag);
    }
    assert!(is_hover_tag("button"));
    for tag in ["DIV", "SECTION", "IMG", "H4", ""] {
        assert!(!is_hover_tag(tag), "{}", tag);
    }
}

#[test]
fn first_pointer_sample_snaps() {
    let mut f = CursorFollower::default();
    f.pointer_moved(Vec2::new(120.0, 80.0));
    assert_eq!(f.position(), Vec2::new(120.0, 80.0));
    assert_eq!(f.pointer(), Vec2::new(120.0, 80.0));
}

#[test]
fn follower_converges_on_pointer() {
    let mut f = CursorFollower::default();
    f.pointer_moved(Vec2::new(100.0, 100.0));
    f.pointer_moved(Vec2::new(400.0, 250.0));
    // lags behind right after the move
    f.step(FRAME);
    assert!(f.position().x < 400.0);
    run(&mut f, 2.0);
    assert!(f.position().distance(Vec2::new(400.0, 250.0)) < 0.5);
}

#[test]
fn hover_grows_ring_and_reverts() {
    let mut f = CursorFollower::default();
    assert_eq!(f.outer_size(), 45.0);
    assert_eq!(f.inner_size(), 10.0);

    f.pointer_over("BUTTON");
    assert!(f.is_hovering());
    run(&mut f, 2.0);
    assert!((f.outer_size() - 70.0).abs() < 0.5, "outer {}", f.outer_size());
    assert!((f.inner_size() - 14.0).abs() < 0.1, "inner {}", f.inner_size());

    f.pointer_over("DIV");
    assert!(!f.is_hovering());
    run(&mut f, 2.0);
    assert!((f.outer_size() - 45.0).abs() < 0.5, "outer {}", f.outer_size());
}

#[test]
fn style_colors_follow_hover() {
    let mut f = CursorFollower::default();
    let idle = f.style();
    assert_eq!(idle.color.to_hex(), "#38bdf8");
    assert_eq!(idle.glow, "0 0 15px rgba(56, 189, 248, 0.7)");

    f.set_hovering(true);
    run(&mut f, 2.0);
    let hovered = f.style();
    assert_eq!(hovered.color.to_hex(), "#fbbf24");
    assert!(hovered.glow.starts_with("0 0 25px rgba(251, 191, 36,"));
}

#[test]
fn spring_clamps_long_stalls() {
    let config = SpringConfig::new(300.0, 20.0);
    let mut a = Spring::new(config, 0.0);
    let mut b = Spring::new(config, 0.0);
    a.set_target(100.0);
    b.set_target(100.0);
    a.step(10.0);
    b.step(0.1);
    assert_eq!(a.value, b.value);
    assert_eq!(a.velocity, b.velocity);
}

#[test]
fn spring_settles_and_snaps() {
    let mut s = Spring::new(SpringConfig::new(200.0, 15.0), 0.0);
    s.set_target(1.0);
    assert!(!s.is_settled(1e-3));
    for _ in 0..240 {
        s.step(FRAME);
    }
    assert!(s.is_settled(1e-3));
    s.snap(5.0);
    assert_eq!((s.value, s.target, s.velocity), (5.0, 5.0, 0.0));
}

#[test]
fn default_follow_spring_is_underdamped() {
    let ratio = SpringConfig::default().damping_ratio();
    assert!(ratio > 0.5 && ratio < 0.6, "ratio {}", ratio);
}
