//! The [`Rgba`] color type used by every draw call in the sketch.
//!
//! Components are f64 in [0, 1] with a straight (non-premultiplied) alpha.
//! Serializes as a hex string: `"#rrggbb"` when fully opaque, `"#rrggbbaa"`
//! otherwise. The hex round-trip has 8-bit quantization, which is acceptable
//! since hex colors are inherently 8-bit.

use crate::error::SketchError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with straight alpha, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Builds a color from 8-bit components, the unit the original sketch
    /// constants are written in.
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Returns the same color with alpha replaced by `a`, clamped to [0, 1].
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Returns the same color with alpha multiplied by `factor`, clamped.
    pub fn scale_alpha(self, factor: f64) -> Rgba {
        self.with_alpha(self.a * factor)
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (leading `#` optional,
    /// case insensitive). A missing alpha pair means fully opaque.
    ///
    /// Returns `SketchError::InvalidColor` on any other shape.
    pub fn from_hex(hex: &str) -> Result<Rgba, SketchError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(SketchError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        let component = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| SketchError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        let r = component(0..2, "red")?;
        let g = component(2..4, "green")?;
        let b = component(4..6, "blue")?;
        let a = if hex.len() == 8 {
            component(6..8, "alpha")?
        } else {
            255
        };
        Ok(Rgba::from_u8(r, g, b, a))
    }

    /// Converts to a hex string, quantizing each component to 8 bits.
    /// Alpha is omitted when it rounds to 255.
    pub fn to_hex(self) -> String {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (q(self.r), q(self.g), q(self.b), q(self.a));
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
