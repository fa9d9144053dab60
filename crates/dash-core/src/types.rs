// File: crates/dash-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings).

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{DashError, Result};

/// Default figure width in pixels.
pub const WIDTH: u32 = 600;
/// Default figure height in pixels.
pub const HEIGHT: u32 = 400;

/// Straight RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DashError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| DashError::InvalidColor(s.to_string()));
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)?, a })
    }

    /// Same color with alpha set from a 0..=1 fraction.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8, ..self }
    }

    pub fn alpha_fraction(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// `#rrggbb`, dropping alpha; SVG carries opacity separately.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` form, used where the page needs translucent theme tints.
    pub fn to_css_rgba(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.alpha_fraction())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{}{:02x}", self.to_hex(), self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 44, 56)
    }
}
