mod common;

use common::Recorder;
use glam::Vec2;
use portfolio_core::particles::{
    ClickMode, HoverMode, OutMode, Palette, ParticleConfig, ParticleSystem, RangeValue,
};
use portfolio_core::{PortfolioError, Rgba};

// The stock tsParticles options the page shipped with.
const PAGE_CONFIG: &str = r##"{
    "background": { "color": { "value": "transparent" } },
    "fpsLimit": 120,
    "interactivity": {
        "events": {
            "onClick": { "enable": true, "mode": "push" },
            "onHover": { "enable": true, "mode": "repulse" },
            "resize": true
        },
        "modes": {
            "push": { "quantity": 4 },
            "repulse": { "distance": 100, "duration": 0.4 }
        }
    },
    "particles": {
        "color": { "value": ["#00ffff", "#ff00ff", "#ffff00", "#00ff00"] },
        "links": { "color": "#ffffff", "distance": 150, "enable": true, "opacity": 0.1, "width": 1 },
        "move": {
            "direction": "none",
            "enable": true,
            "outModes": { "default": "out" },
            "random": true,
            "speed": 1,
            "straight": false
        },
        "number": { "density": { "enable": true, "area": 1000 }, "value": 100 },
        "opacity": { "value": 0.5 },
        "shape": { "type": "circle" },
        "size": { "value": { "min": 1, "max": 3 } }
    },
    "detectRetina": true
}"##;

/// No ambient particles and no drift, so tests place particles by clicking.
fn manual_config() -> ParticleConfig {
    let mut c = ParticleConfig::default();
    c.particles.number.density.enable = false;
    c.particles.number.value = 0;
    c.particles.motion.enable = false;
    c.interactivity.modes.push.quantity = 1;
    c
}

#[test]
fn page_json_matches_defaults() -> anyhow::Result<()> {
    let parsed = ParticleConfig::from_json(PAGE_CONFIG)?;
    assert_eq!(parsed, ParticleConfig::default());
    Ok(())
}

#[test]
fn json_round_trip() -> anyhow::Result<()> {
    let mut config = ParticleConfig::default();
    config.particles.color.value = Palette::One(Rgba::rgb(255, 0, 0));
    config.particles.size.value = RangeValue::Fixed(2.0);
    config.particles.motion.out_modes.default = OutMode::Bounce;
    config.interactivity.events.on_hover.mode = HoverMode::Attract;
    let json = config.to_json()?;
    assert!(json.contains("\"fpsLimit\": 120"));
    assert!(json.contains("\"move\""));
    assert_eq!(ParticleConfig::from_json(&json)?, config);
    Ok(())
}

#[test]
fn invalid_configs_are_rejected() {
    let mut empty_palette = ParticleConfig::default();
    empty_palette.particles.color.value = Palette::Many(vec![]);
    let mut bad_size = ParticleConfig::default();
    bad_size.particles.size.value = RangeValue::Range { min: 3.0, max: 1.0 };
    let mut bad_opacity = ParticleConfig::default();
    bad_opacity.particles.opacity.value = 1.5;
    let mut bad_repulse = ParticleConfig::default();
    bad_repulse.interactivity.modes.repulse.duration = 0.0;

    for config in [empty_palette, bad_size, bad_opacity, bad_repulse] {
        assert!(matches!(
            config.validate(),
            Err(PortfolioError::InvalidParticleConfig(_))
        ));
    }
    assert!(ParticleConfig::default().validate().is_ok());
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(
        ParticleConfig::from_json("{ not json"),
        Err(PortfolioError::ParticleConfigJson(_))
    ));
    let bad_color = PAGE_CONFIG.replace("#ffffff", "#zzzzzz");
    assert!(matches!(
        ParticleConfig::from_json(&bad_color),
        Err(PortfolioError::ParticleConfigJson(_))
    ));
}

#[test]
fn density_scales_count_with_area() {
    let sys = ParticleSystem::new(ParticleConfig::default(), 1000, 1000, 1.0, 1);
    assert_eq!(sys.target_count(), 100);
    assert_eq!(sys.particles().len(), 100);

    let wide = ParticleSystem::new(ParticleConfig::default(), 2000, 1000, 1.0, 1);
    assert_eq!(wide.particles().len(), 200);

    // retina backing store of the same CSS size
    let retina = ParticleSystem::new(ParticleConfig::default(), 2000, 2000, 2.0, 1);
    assert_eq!(retina.particles().len(), 100);
}

#[test]
fn limit_caps_the_count() {
    let mut config = ParticleConfig::default();
    config.particles.number.limit = 30;
    let mut sys = ParticleSystem::new(config, 1000, 1000, 1.0, 1);
    assert_eq!(sys.particles().len(), 30);
    sys.click(Vec2::new(10.0, 10.0));
    assert_eq!(sys.particles().len(), 30);
}

#[test]
fn palette_is_assigned_in_order() {
    let sys = ParticleSystem::new(ParticleConfig::default(), 1000, 1000, 1.0, 2);
    let palette = ParticleConfig::default().particles.color.value.colors().to_vec();
    for (i, p) in sys.particles().iter().enumerate() {
        assert_eq!(p.color, palette[i % palette.len()]);
        assert!(p.radius >= 1.0 && p.radius <= 3.0);
    }
}

#[test]
fn click_pushes_and_removes() {
    let mut sys = ParticleSystem::new(ParticleConfig::default(), 1000, 1000, 1.0, 3);
    sys.click(Vec2::new(500.0, 500.0));
    assert_eq!(sys.particles().len(), 104);
    assert_eq!(sys.particles()[103].position, Vec2::new(500.0, 500.0));

    let mut config = ParticleConfig::default();
    config.interactivity.events.on_click.mode = ClickMode::Remove;
    let mut sys = ParticleSystem::new(config, 1000, 1000, 1.0, 3);
    sys.click(Vec2::ZERO);
    assert_eq!(sys.particles().len(), 96);
}

#[test]
fn disabled_click_does_nothing() {
    let mut config = ParticleConfig::default();
    config.interactivity.events.on_click.enable = false;
    let mut sys = ParticleSystem::new(config, 1000, 1000, 1.0, 3);
    sys.click(Vec2::ZERO);
    assert_eq!(sys.particles().len(), 100);
}

#[test]
fn fps_limit_skips_early_frames() {
    let mut sys = ParticleSystem::new(ParticleConfig::default(), 800, 600, 1.0, 4);
    assert!(!sys.step(0.001));
    assert!(sys.step(1.0 / 60.0));
}

#[test]
fn out_mode_wraps_around_edges() {
    let mut sys = ParticleSystem::new(ParticleConfig::default(), 400, 300, 1.0, 5);
    for _ in 0..2_000 {
        sys.step(1.0 / 60.0);
        for p in sys.particles() {
            let r = p.radius + 1e-3;
            assert!(p.position.x >= -r && p.position.x <= 400.0 + r);
            assert!(p.position.y >= -r && p.position.y <= 300.0 + r);
        }
    }
}

#[test]
fn bounce_mode_keeps_particles_inside() {
    let mut config = ParticleConfig::default();
    config.particles.motion.out_modes.default = OutMode::Bounce;
    let mut sys = ParticleSystem::new(config, 400, 300, 1.0, 6);
    for _ in 0..2_000 {
        sys.step(1.0 / 60.0);
    }
    for p in sys.particles() {
        assert!((0.0..=400.0).contains(&p.position.x));
        assert!((0.0..=300.0).contains(&p.position.y));
    }
}

#[test]
fn hover_repulses_nearby_particles() {
    let mut sys = ParticleSystem::new(manual_config(), 1000, 1000, 1.0, 7);
    sys.click(Vec2::new(540.0, 500.0));
    sys.pointer_moved(Some(Vec2::new(500.0, 500.0)));
    assert!(sys.step(0.1));
    // (100 - 40) * 0.1 / 0.4
    assert!((sys.particles()[0].position.x - 555.0).abs() < 1e-3);

    sys.pointer_moved(None);
    assert!(sys.step(0.1));
    assert!((sys.particles()[0].position.x - 555.0).abs() < 1e-3);
}

#[test]
fn hover_attract_pulls_particles_in() {
    let mut config = manual_config();
    config.interactivity.events.on_hover.mode = HoverMode::Attract;
    let mut sys = ParticleSystem::new(config, 1000, 1000, 1.0, 8);
    sys.click(Vec2::new(540.0, 500.0));
    sys.pointer_moved(Some(Vec2::new(500.0, 500.0)));
    sys.step(0.1);
    assert!(sys.particles()[0].position.x < 540.0);
}

#[test]
fn particles_outside_repulse_radius_are_untouched() {
    let mut sys = ParticleSystem::new(manual_config(), 1000, 1000, 1.0, 9);
    sys.click(Vec2::new(800.0, 500.0));
    sys.pointer_moved(Some(Vec2::new(500.0, 500.0)));
    sys.step(0.1);
    assert_eq!(sys.particles()[0].position, Vec2::new(800.0, 500.0));
}

#[test]
fn draw_links_close_pairs() {
    let mut config = manual_config();
    config.interactivity.modes.push.quantity = 2;
    let mut sys = ParticleSystem::new(config, 1000, 1000, 1.0, 10);
    sys.click(Vec2::new(100.0, 100.0));
    sys.click(Vec2::new(900.0, 900.0));
    let mut rec = Recorder::new(1000, 1000);
    sys.draw(&mut rec);
    assert_eq!(rec.clears(), 1);
    assert_eq!(rec.circles().len(), 4);
    // only the two co-located pairs are within link distance
    assert_eq!(rec.lines(), 2);
}

#[test]
fn resize_refits_count_and_positions() {
    let mut sys = ParticleSystem::new(ParticleConfig::default(), 1000, 1000, 1.0, 11);
    sys.resize(500, 500);
    assert_eq!(sys.particles().len(), 25);
    for p in sys.particles() {
        assert!((0.0..=500.0).contains(&p.position.x));
        assert!((0.0..=500.0).contains(&p.position.y));
    }
}

#[test]
fn frame_tracks_surface_size() {
    let mut sys = ParticleSystem::new(ParticleConfig::default(), 1000, 1000, 1.0, 12);
    let mut rec = Recorder::new(2000, 1000);
    sys.frame(&mut rec, 1.0 / 30.0);
    assert_eq!(sys.particles().len(), 200);
    assert_eq!(rec.circles().len(), 200);
}
