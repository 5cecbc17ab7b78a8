//! Color types and utilities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error returned when a hex color string cannot be parsed
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),

    #[error("color `{0}` must have 3, 6 or 8 hex digits")]
    InvalidLength(String),

    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Parse a CSS hex string (`#rgb`, `#rrggbb` or `#rrggbbaa`)
    pub fn from_hex_str(value: &str) -> Result<Self, ColorParseError> {
        let digits = value
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(value.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 | 8 => digits.to_string(),
            _ => return Err(ColorParseError::InvalidLength(value.to_string())),
        };

        // Digits are validated above, so parsing cannot fail here.
        let raw = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))?;

        if expanded.len() == 8 {
            Ok(Self::from_rgba8(
                ((raw >> 24) & 0xFF) as u8,
                ((raw >> 16) & 0xFF) as u8,
                ((raw >> 8) & 0xFF) as u8,
                (raw & 0xFF) as u8,
            ))
        } else {
            Ok(Self::from_hex(raw))
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Lighten the color
    pub fn lighten(self, amount: f32) -> Self {
        Self {
            r: (self.r + amount).min(1.0),
            g: (self.g + amount).min(1.0),
            b: (self.b + amount).min(1.0),
            a: self.a,
        }
    }

    /// Darken the color
    pub fn darken(self, amount: f32) -> Self {
        Self {
            r: (self.r - amount).max(0.0),
            g: (self.g - amount).max(0.0),
            b: (self.b - amount).max(0.0),
            a: self.a,
        }
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Format as a CSS color value
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r}, {g}, {b}, {:.2})", self.a)
        }
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex_str(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_str_short_and_long() {
        assert_eq!(Color::from_hex_str("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex_str("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::from_hex_str("#3d71d9").unwrap(), Color::from_hex(0x3D71D9));
    }

    #[test]
    fn test_from_hex_str_with_alpha() {
        let color = Color::from_hex_str("#ff000080").unwrap();
        assert_eq!(color.to_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_from_hex_str_errors() {
        assert!(matches!(
            Color::from_hex_str("fff"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex_str("#ffff"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::from_hex_str("#gggggg"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Color::from_hex(0x1F60C4).to_css(), "#1f60c4");
        assert_eq!(Color::BLACK.with_alpha(0.5).to_css(), "rgba(0, 0, 0, 0.50)");
    }

    #[test]
    fn test_lighten_and_darken_clamp() {
        assert_eq!(Color::WHITE.lighten(0.2), Color::WHITE);
        assert_eq!(Color::BLACK.darken(0.2), Color::BLACK);
    }

    #[test]
    fn test_serde_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0xE02F44)).unwrap();
        assert_eq!(json, "\"#e02f44\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_rgba8(), [0xE0, 0x2F, 0x44, 0xFF]);
    }
}
