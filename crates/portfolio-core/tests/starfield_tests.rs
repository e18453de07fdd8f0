mod common;

use common::{DrawCall, Recorder};
use portfolio_core::constants::STAR_COUNT;
use portfolio_core::starfield::Starfield;

#[test]
fn star_count_is_constant_across_frames() {
    let mut field = Starfield::new(STAR_COUNT, 800, 600, 7);
    for _ in 0..5_000 {
        field.advance();
    }
    assert_eq!(field.stars().len(), STAR_COUNT);
}

#[test]
fn initial_stars_respect_ranges() {
    let field = Starfield::new(STAR_COUNT, 800, 600, 11);
    for s in field.stars() {
        assert!((0.0..800.0).contains(&s.position.x));
        assert!((0.0..600.0).contains(&s.position.y));
        assert!((0.5..2.5).contains(&s.radius), "radius {}", s.radius);
        assert!((0.1..0.6).contains(&s.speed), "speed {}", s.speed);
        assert!((0.2..1.0).contains(&s.opacity), "opacity {}", s.opacity);
    }
}

#[test]
fn palette_is_mostly_white_with_some_cyan() {
    let field = Starfield::new(2_000, 800, 600, 3);
    let cyan = field
        .stars()
        .iter()
        .filter(|s| s.color.to_hex() == "#00ffff")
        .count();
    let white = field
        .stars()
        .iter()
        .filter(|s| s.color.to_hex() == "#ffffff")
        .count();
    assert_eq!(cyan + white, 2_000);
    // 30% cyan, loose bounds for a seeded sample
    assert!(cyan > 450 && cyan < 750, "cyan={}", cyan);
}

#[test]
fn star_past_bottom_wraps_to_top_with_new_x() {
    let mut field = Starfield::new(1, 800, 600, 5);
    field.stars_mut()[0].position.y = 600.0;
    field.advance();
    let star = &field.stars()[0];
    assert_eq!(star.position.y, 0.0);
    assert!((0.0..800.0).contains(&star.position.x));
}

#[test]
fn stars_stay_within_canvas_while_falling() {
    let mut field = Starfield::new(STAR_COUNT, 320, 240, 9);
    for _ in 0..3_000 {
        field.advance();
        for s in field.stars() {
            assert!(s.position.y >= 0.0 && s.position.y <= 240.0);
        }
    }
}

#[test]
fn twinkle_stays_within_bounds() {
    let field = Starfield::new(50, 800, 600, 1);
    for s in field.stars() {
        for i in 0..200 {
            let t = s.twinkle(i as f64 * 0.37);
            assert!((0.4 - 1e-5..=1.0 + 1e-5).contains(&t), "twinkle {}", t);
        }
    }
}

#[test]
fn draw_clears_then_paints_every_star_with_glow() {
    let field = Starfield::new(STAR_COUNT, 800, 600, 2);
    let mut rec = Recorder::new(800, 600);
    field.draw(&mut rec, 1.5);
    assert_eq!(rec.calls.first(), Some(&DrawCall::Clear));
    assert_eq!(rec.clears(), 1);
    let circles = rec.circles();
    assert_eq!(circles.len(), STAR_COUNT);
    for (call, star) in circles.iter().zip(field.stars()) {
        let DrawCall::Circle {
            radius,
            alpha,
            blur,
            ..
        } = call
        else {
            unreachable!()
        };
        assert_eq!(*radius, star.radius);
        assert_eq!(*blur, star.radius * 2.0);
        assert!((0.0..=1.0).contains(alpha));
    }
}

#[test]
fn frame_follows_surface_size() {
    let mut field = Starfield::new(STAR_COUNT, 800, 600, 4);
    let mut rec = Recorder::new(1280, 720);
    field.frame(&mut rec, 0.0);
    assert_eq!(field.size(), (1280.0, 720.0));
    assert_eq!(field.stars().len(), STAR_COUNT);
}
