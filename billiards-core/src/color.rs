//! Display colors for bodies
//!
//! The simulation treats a color as an opaque string handed over by the
//! picker or the table file. Only the presentation layer needs RGB, so the
//! conversion lives here as a best-effort helper.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display color of a body: a CSS-style name or `#rgb` / `#rrggbb` hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("magenta", [255, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("brown", [165, 42, 42]),
    ("pink", [255, 192, 203]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
];

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build a `#rrggbb` color
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the color to RGB, or `None` if the value is not recognized
    pub fn to_rgb(&self) -> Option<[u8; 3]> {
        let value = self.0.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|(_, rgb)| *rgb)
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                let nibble = digit.to_digit(16)? as u8;
                *slot = nibble * 17;
            }
            Some(rgb)
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some([channel(0)?, channel(2)?, channel(4)?])
        }
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_resolve_case_insensitively() {
        assert_eq!(Color::new("red").to_rgb(), Some([255, 0, 0]));
        assert_eq!(Color::new("Yellow").to_rgb(), Some([255, 255, 0]));
    }

    #[test]
    fn hex_colors_resolve() {
        assert_eq!(Color::new("#1a2b3c").to_rgb(), Some([0x1a, 0x2b, 0x3c]));
        assert_eq!(Color::new("#f0a").to_rgb(), Some([0xff, 0x00, 0xaa]));
    }

    #[test]
    fn unknown_values_pass_through_without_rgb() {
        let color = Color::new("not-a-color");
        assert_eq!(color.to_rgb(), None);
        assert_eq!(color.as_str(), "not-a-color");
        assert_eq!(Color::new("#12345").to_rgb(), None);
        assert_eq!(Color::new("#gggggg").to_rgb(), None);
    }

    #[test]
    fn from_rgb_formats_lowercase_hex() {
        let color = Color::from_rgb(255, 8, 0);
        assert_eq!(color.as_str(), "#ff0800");
        assert_eq!(color.to_rgb(), Some([255, 8, 0]));
    }
}
