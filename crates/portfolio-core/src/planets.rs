use crate::constants::*;
use crate::state::{SectionId, Viewport};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetConfig {
    pub section: SectionId,
    pub name: &'static str,
    pub size: f32,
    pub gradient: &'static str,
    pub orbit_radius: f32,
    pub parallax_speed: f32,
    pub anchor: Vec2,
    pub rings: bool,
    pub atmosphere: bool,
}

pub const PLANETS: [PlanetConfig; 5] = [
    PlanetConfig {
        section: SectionId::Home,
        name: "NEXUS PRIME",
        size: 200.0,
        gradient: "linear-gradient(45deg, #ff6b6b, #ff8e8e, #ffb3b3)",
        orbit_radius: 300.0,
        parallax_speed: 0.5,
        anchor: Vec2::new(0.2, 0.3),
        rings: true,
        atmosphere: true,
    },
    PlanetConfig {
        section: SectionId::About,
        name: "AQUA WORLD",
        size: 150.0,
        gradient: "linear-gradient(45deg, #4ecdc4, #44a08d, #093637)",
        orbit_radius: 250.0,
        parallax_speed: 0.3,
        anchor: Vec2::new(0.8, 0.2),
        rings: false,
        atmosphere: true,
    },
    PlanetConfig {
        section: SectionId::Resume,
        name: "CRYSTAL SPHERE",
        size: 180.0,
        gradient: "linear-gradient(45deg, #667eea, #764ba2, #f093fb)",
        orbit_radius: 280.0,
        parallax_speed: 0.4,
        anchor: Vec2::new(0.1, 0.7),
        rings: true,
        atmosphere: false,
    },
    PlanetConfig {
        section: SectionId::Projects,
        name: "NEBULA CORE",
        size: 220.0,
        gradient: "linear-gradient(45deg, #f093fb, #f5576c, #4facfe)",
        orbit_radius: 320.0,
        parallax_speed: 0.6,
        anchor: Vec2::new(0.9, 0.6),
        rings: true,
        atmosphere: true,
    },
    PlanetConfig {
        section: SectionId::Contact,
        name: "COMMUNICATION HUB",
        size: 160.0,
        gradient: "linear-gradient(45deg, #43e97b, #38f9d7, #00c9ff)",
        orbit_radius: 260.0,
        parallax_speed: 0.35,
        anchor: Vec2::new(0.5, 0.8),
        rings: false,
        atmosphere: true,
    },
];

pub fn planet_for(section: SectionId) -> &'static PlanetConfig {
    // PLANETS is indexed in SectionId::ALL order
    let idx = SectionId::ALL
        .iter()
        .position(|s| *s == section)
        .unwrap_or(0);
    &PLANETS[idx]
}

/// Scroll-dependent placement of one planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetPose {
    pub parallax_offset: f32,
    pub rotation_deg: f32,
    pub size: f32,
    pub opacity: f32,
    /// Mobile drops the glow, outer ring, moon and connector line.
    pub detailed: bool,
}

impl PlanetConfig {
    pub fn pose(&self, scroll_y: f32, viewport: Viewport, section_visible: bool) -> PlanetPose {
        let mobile = viewport.is_mobile();
        let parallax = scroll_y * self.parallax_speed;
        PlanetPose {
            parallax_offset: if mobile {
                parallax * PLANET_MOBILE_PARALLAX
            } else {
                parallax
            },
            rotation_deg: (scroll_y * PLANET_ROTATION_PER_PX) % 360.0,
            size: if mobile {
                self.size * PLANET_MOBILE_SCALE
            } else {
                self.size
            },
            opacity: if section_visible {
                PLANET_VISIBLE_OPACITY
            } else {
                PLANET_HIDDEN_OPACITY
            },
            detailed: !mobile,
        }
    }
}

/// Skips re-posing when neither the scroll offset nor the viewport changed.
#[derive(Debug, Default)]
pub struct PoseGate {
    last: Option<(f32, Viewport)>,
}

impl PoseGate {
    /// True (and remembers the inputs) when planets need posing again.
    pub fn changed(&mut self, scroll_y: f32, viewport: Viewport) -> bool {
        let key = (scroll_y, viewport);
        if self.last == Some(key) {
            return false;
        }
        self.last = Some(key);
        true
    }
}
