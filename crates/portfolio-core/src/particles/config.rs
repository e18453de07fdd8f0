//! Particle field configuration.
//!
//! Field names follow the tsParticles options schema so a config exported
//! from the JS library can be dropped into the page unchanged.

use crate::color::Rgba;
use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleConfig {
    pub background: Background,
    pub fps_limit: u32,
    pub interactivity: Interactivity,
    pub particles: ParticleOptions,
    pub detect_retina: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub color: ColorValue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    pub value: Rgba,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interactivity {
    pub events: InteractivityEvents,
    pub modes: InteractivityModes,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractivityEvents {
    pub on_click: ClickEvent,
    pub on_hover: HoverEvent,
    pub resize: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub enable: bool,
    pub mode: ClickMode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoverEvent {
    pub enable: bool,
    pub mode: HoverMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickMode {
    Push,
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    Repulse,
    Attract,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractivityModes {
    pub push: PushMode,
    pub repulse: RepulseMode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PushMode {
    pub quantity: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepulseMode {
    pub distance: f32,
    pub duration: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleOptions {
    pub color: PaletteValue,
    pub links: Links,
    #[serde(rename = "move")]
    pub motion: Motion,
    pub number: Number,
    pub opacity: OpacityValue,
    pub shape: Shape,
    pub size: SizeValue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteValue {
    pub value: Palette,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Palette {
    One(Rgba),
    Many(Vec<Rgba>),
}

impl Palette {
    pub fn colors(&self) -> &[Rgba] {
        match self {
            Palette::One(c) => std::slice::from_ref(c),
            Palette::Many(cs) => cs,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Links {
    pub color: Rgba,
    pub distance: f32,
    pub enable: bool,
    pub opacity: f32,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motion {
    pub direction: MoveDirection,
    pub enable: bool,
    pub out_modes: OutModes,
    pub random: bool,
    pub speed: f32,
    pub straight: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    None,
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutModes {
    pub default: OutMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutMode {
    /// Leave one edge, re-enter from the opposite one.
    Out,
    Bounce,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Number {
    pub density: Density,
    pub value: usize,
    /// Upper bound once push mode adds particles; 0 disables the cap.
    #[serde(default)]
    pub limit: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Density {
    pub enable: bool,
    pub area: f32,
    #[serde(default = "default_density_factor")]
    pub factor: f32,
}

fn default_density_factor() -> f32 {
    1000.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpacityValue {
    pub value: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeValue {
    pub value: RangeValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeValue {
    Fixed(f32),
    Range { min: f32, max: f32 },
}

impl RangeValue {
    pub fn bounds(&self) -> (f32, f32) {
        match *self {
            RangeValue::Fixed(v) => (v, v),
            RangeValue::Range { min, max } => (min, max),
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            background: Background {
                color: ColorValue {
                    value: Rgba::TRANSPARENT,
                },
            },
            fps_limit: 120,
            interactivity: Interactivity {
                events: InteractivityEvents {
                    on_click: ClickEvent {
                        enable: true,
                        mode: ClickMode::Push,
                    },
                    on_hover: HoverEvent {
                        enable: true,
                        mode: HoverMode::Repulse,
                    },
                    resize: true,
                },
                modes: InteractivityModes {
                    push: PushMode { quantity: 4 },
                    repulse: RepulseMode {
                        distance: 100.0,
                        duration: 0.4,
                    },
                },
            },
            particles: ParticleOptions {
                color: PaletteValue {
                    value: Palette::Many(vec![
                        Rgba::rgb(0, 255, 255),
                        Rgba::rgb(255, 0, 255),
                        Rgba::rgb(255, 255, 0),
                        Rgba::rgb(0, 255, 0),
                    ]),
                },
                links: Links {
                    color: Rgba::WHITE,
                    distance: 150.0,
                    enable: true,
                    opacity: 0.1,
                    width: 1.0,
                },
                motion: Motion {
                    direction: MoveDirection::None,
                    enable: true,
                    out_modes: OutModes {
                        default: OutMode::Out,
                    },
                    random: true,
                    speed: 1.0,
                    straight: false,
                },
                number: Number {
                    density: Density {
                        enable: true,
                        area: 1000.0,
                        factor: default_density_factor(),
                    },
                    value: 100,
                    limit: 0,
                },
                opacity: OpacityValue { value: 0.5 },
                shape: Shape {
                    kind: ShapeKind::Circle,
                },
                size: SizeValue {
                    value: RangeValue::Range { min: 1.0, max: 3.0 },
                },
            },
            detect_retina: true,
        }
    }
}

impl ParticleConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ParticleConfig = serde_json::from_str(json)
            .map_err(|e| PortfolioError::ParticleConfigJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PortfolioError::ParticleConfigJson(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(PortfolioError::InvalidParticleConfig(msg.to_string()));
        let p = &self.particles;
        if p.color.value.colors().is_empty() {
            return invalid("particles.color.value is empty");
        }
        let (min, max) = p.size.value.bounds();
        if min <= 0.0 || min > max {
            return invalid("particles.size.value must satisfy 0 < min <= max");
        }
        if p.links.enable && p.links.distance <= 0.0 {
            return invalid("particles.links.distance must be positive");
        }
        if !(0.0..=1.0).contains(&p.opacity.value) || !(0.0..=1.0).contains(&p.links.opacity) {
            return invalid("opacity values must be within [0, 1]");
        }
        if p.number.density.enable && (p.number.density.area <= 0.0 || p.number.density.factor <= 0.0)
        {
            return invalid("particles.number.density area and factor must be positive");
        }
        if p.motion.speed < 0.0 {
            return invalid("particles.move.speed must not be negative");
        }
        let repulse = &self.interactivity.modes.repulse;
        if repulse.distance <= 0.0 || repulse.duration <= 0.0 {
            return invalid("interactivity.modes.repulse distance and duration must be positive");
        }
        Ok(())
    }
}
