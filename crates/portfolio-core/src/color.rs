//! Structured CSS colors.
//!
//! Canvas and DOM APIs take colors as CSS strings. Keeping the channels
//! structured means alpha can be changed with [`Rgba::with_alpha`] instead of
//! rewriting the tail of an `rgba(..)` string.

use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same channels, alpha clamped to `[0, 1]`.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Channel-wise interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Always `rgba(r, g, b, a)`, regardless of how the color was written.
    pub fn to_css_rgba(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Rgba::TRANSPARENT {
            f.write_str("transparent")
        } else if self.a >= 1.0 {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_css_rgba())
        }
    }
}

impl FromStr for Rgba {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || PortfolioError::InvalidColor(s.to_string());
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Rgba::TRANSPARENT);
        }
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        let lower = trimmed.to_ascii_lowercase();
        let body = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid());
        }
        let channel = |p: &str| p.parse::<u8>().ok();
        let r = channel(parts[0]).ok_or_else(invalid)?;
        let g = channel(parts[1]).ok_or_else(invalid)?;
        let b = channel(parts[2]).ok_or_else(invalid)?;
        let a = match parts.get(3) {
            Some(p) => p.parse::<f32>().map_err(|_| invalid())?,
            None => 1.0,
        };
        if !(0.0..=1.0).contains(&a) {
            return Err(invalid());
        }
        Ok(Rgba::new(r, g, b, a))
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                out[i] = v * 17;
            }
            Some(Rgba::rgb(out[0], out[1], out[2]))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

impl TryFrom<String> for Rgba {
    type Error = PortfolioError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}
