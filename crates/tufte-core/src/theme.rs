// File: crates/tufte-core/src/theme.rs
// Summary: Colors and the Tufte palette (black data ink, grays for secondary series and axes).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Straight (non-premultiplied) RGBA color, serialized as `#RRGGBB[AA]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with its alpha scaled by `alpha` (0..=1).
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = (self.a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let err = || ColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(err());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }

    fn named(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "k" => Some(Color::BLACK),
            "white" | "w" => Some(Color::WHITE),
            "gray" | "grey" => Some(Color::rgb(128, 128, 128)),
            "red" => Some(Color::rgb(0xE7, 0x4C, 0x3C)),
            "blue" => Some(Color::rgb(0x34, 0x98, 0xDB)),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Color::named(s.trim()) {
            Some(c) => Ok(c),
            None => Color::from_hex(s),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Named colors of the Tufte palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    /// Main data color.
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub accent_red: Color,
    pub accent_blue: Color,
    /// Very light gray for optional gridlines.
    pub grid: Color,
    /// Medium gray for spines and ticks.
    pub spine: Color,
    pub background: Color,
    pub text: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x00, 0x00, 0x00),
            secondary: Color::rgb(0x66, 0x66, 0x66),
            tertiary: Color::rgb(0x99, 0x99, 0x99),
            accent_red: Color::rgb(0xE7, 0x4C, 0x3C),
            accent_blue: Color::rgb(0x34, 0x98, 0xDB),
            grid: Color::rgb(0xE5, 0xE5, 0xE5),
            spine: Color::rgb(0x66, 0x66, 0x66),
            background: Color::WHITE,
            text: Color::BLACK,
        }
    }
}

/// Grayscale ramp used for multiple series, darkest first.
pub fn grayscale_palette() -> Vec<Color> {
    vec![
        Color::rgb(0x00, 0x00, 0x00),
        Color::rgb(0x66, 0x66, 0x66),
        Color::rgb(0x99, 0x99, 0x99),
        Color::rgb(0xCC, 0xCC, 0xCC),
    ]
}
