// File: crates/dash-core/src/theme.rs
// Summary: Theme registry: named color roles, built-in presets and TOML overrides.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};
use crate::types::Color;

/// Semantic style roles every builder and the page composer read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Background,
    PlotBackground,
    Grid,
    Text,
    MutedText,
    AccentPrimary,
    AccentSecondary,
    AccentTertiary,
    AccentQuaternary,
    AccentFifth,
    Positive,
    Negative,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Background,
        Role::PlotBackground,
        Role::Grid,
        Role::Text,
        Role::MutedText,
        Role::AccentPrimary,
        Role::AccentSecondary,
        Role::AccentTertiary,
        Role::AccentQuaternary,
        Role::AccentFifth,
        Role::Positive,
        Role::Negative,
    ];

    /// Accent roles in palette order.
    pub const ACCENTS: [Role; 5] = [
        Role::AccentPrimary,
        Role::AccentSecondary,
        Role::AccentTertiary,
        Role::AccentQuaternary,
        Role::AccentFifth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Background => "background",
            Role::PlotBackground => "plot_background",
            Role::Grid => "grid",
            Role::Text => "text",
            Role::MutedText => "muted_text",
            Role::AccentPrimary => "accent_primary",
            Role::AccentSecondary => "accent_secondary",
            Role::AccentTertiary => "accent_tertiary",
            Role::AccentQuaternary => "accent_quaternary",
            Role::AccentFifth => "accent_fifth",
            Role::Positive => "positive",
            Role::Negative => "negative",
        }
    }

    pub fn from_name(name: &str) -> Result<Role> {
        Role::ALL
            .into_iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| DashError::UndefinedRole(name.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub plot_background: Color,
    pub grid: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub accent_tertiary: Color,
    pub accent_quaternary: Color,
    pub accent_fifth: Color,
    pub positive: Color,
    pub negative: Color,
    pub font_family: String,
    /// Figure title size in points.
    pub title_font_size: f64,
}

const DEFAULT_FONT: &str = "'Segoe UI', Helvetica, Arial, sans-serif";

impl Theme {
    pub fn midnight() -> Self {
        Self {
            name: "midnight".into(),
            background: Color::rgb(0x0a, 0x0a, 0x0f),
            plot_background: Color::rgb(0x12, 0x12, 0x1a),
            grid: Color::rgb(0x2a, 0x2a, 0x3a),
            text: Color::rgb(0xe0, 0xe0, 0xe0),
            muted_text: Color::rgb(0xa0, 0xa0, 0xa0),
            accent_primary: Color::rgb(0x00, 0xd4, 0xaa),
            accent_secondary: Color::rgb(0x7c, 0x3a, 0xed),
            accent_tertiary: Color::rgb(0xf5, 0x9e, 0x0b),
            accent_quaternary: Color::rgb(0xec, 0x48, 0x99),
            accent_fifth: Color::rgb(0x3b, 0x82, 0xf6),
            positive: Color::rgb(0x4a, 0xde, 0x80),
            negative: Color::rgb(0xf8, 0x71, 0x71),
            font_family: DEFAULT_FONT.into(),
            title_font_size: 14.0,
        }
    }

    pub fn daylight() -> Self {
        Self {
            name: "daylight".into(),
            background: Color::rgb(250, 250, 252),
            plot_background: Color::rgb(255, 255, 255),
            grid: Color::rgb(226, 232, 240),
            text: Color::rgb(30, 41, 59),
            muted_text: Color::rgb(100, 116, 139),
            accent_primary: Color::rgb(32, 120, 200),
            accent_secondary: Color::rgb(124, 58, 237),
            accent_tertiary: Color::rgb(217, 119, 6),
            accent_quaternary: Color::rgb(219, 39, 119),
            accent_fifth: Color::rgb(20, 160, 90),
            positive: Color::rgb(22, 163, 74),
            negative: Color::rgb(220, 38, 38),
            font_family: DEFAULT_FONT.into(),
            title_font_size: 14.0,
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark".into(),
            background: Color::rgb(0x00, 0x2b, 0x36),      // base03
            plot_background: Color::rgb(0x07, 0x36, 0x42), // base02
            grid: Color::rgb(0x58, 0x6e, 0x75),            // base01
            text: Color::rgb(0xee, 0xe8, 0xd5),            // base2
            muted_text: Color::rgb(0x83, 0x94, 0x96),      // base0
            accent_primary: Color::rgb(0x2a, 0xa1, 0x98),  // cyan
            accent_secondary: Color::rgb(0x6c, 0x71, 0xc4), // violet
            accent_tertiary: Color::rgb(0xb5, 0x89, 0x00), // yellow
            accent_quaternary: Color::rgb(0xd3, 0x36, 0x82), // magenta
            accent_fifth: Color::rgb(0x26, 0x8b, 0xd2),    // blue
            positive: Color::rgb(0x85, 0x99, 0x00),        // green
            negative: Color::rgb(0xdc, 0x32, 0x2f),        // red
            font_family: DEFAULT_FONT.into(),
            title_font_size: 14.0,
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".into(),
            background: Color::rgb(0x00, 0x00, 0x00),
            plot_background: Color::rgb(0x0b, 0x0b, 0x0b),
            grid: Color::rgb(0x44, 0x44, 0x44),
            text: Color::rgb(0xff, 0xff, 0xff),
            muted_text: Color::rgb(0xcc, 0xcc, 0xcc),
            accent_primary: Color::rgb(0x00, 0xff, 0xff),
            accent_secondary: Color::rgb(0xff, 0x00, 0xff),
            accent_tertiary: Color::rgb(0xff, 0xff, 0x00),
            accent_quaternary: Color::rgb(0xff, 0x80, 0x00),
            accent_fifth: Color::rgb(0x00, 0xaa, 0xff),
            positive: Color::rgb(0x00, 0xff, 0x00),
            negative: Color::rgb(0xff, 0x00, 0x00),
            font_family: DEFAULT_FONT.into(),
            title_font_size: 15.0,
        }
    }

    pub fn get(&self, role: Role) -> Color {
        match role {
            Role::Background => self.background,
            Role::PlotBackground => self.plot_background,
            Role::Grid => self.grid,
            Role::Text => self.text,
            Role::MutedText => self.muted_text,
            Role::AccentPrimary => self.accent_primary,
            Role::AccentSecondary => self.accent_secondary,
            Role::AccentTertiary => self.accent_tertiary,
            Role::AccentQuaternary => self.accent_quaternary,
            Role::AccentFifth => self.accent_fifth,
            Role::Positive => self.positive,
            Role::Negative => self.negative,
        }
    }

    /// Look a role up by its name. Unknown names are an error, never a default.
    pub fn lookup(&self, role_name: &str) -> Result<Color> {
        Role::from_name(role_name).map(|r| self.get(r))
    }

    fn slot_mut(&mut self, role: Role) -> &mut Color {
        match role {
            Role::Background => &mut self.background,
            Role::PlotBackground => &mut self.plot_background,
            Role::Grid => &mut self.grid,
            Role::Text => &mut self.text,
            Role::MutedText => &mut self.muted_text,
            Role::AccentPrimary => &mut self.accent_primary,
            Role::AccentSecondary => &mut self.accent_secondary,
            Role::AccentTertiary => &mut self.accent_tertiary,
            Role::AccentQuaternary => &mut self.accent_quaternary,
            Role::AccentFifth => &mut self.accent_fifth,
            Role::Positive => &mut self.positive,
            Role::Negative => &mut self.negative,
        }
    }

    /// The five accents in order.
    pub fn palette(&self) -> [Color; 5] {
        Role::ACCENTS.map(|r| self.get(r))
    }

    /// Accent for the `i`-th series, cycling through the palette.
    pub fn accent(&self, i: usize) -> Color {
        self.get(Self::accent_role(i))
    }

    pub fn accent_role(i: usize) -> Role {
        Role::ACCENTS[i % Role::ACCENTS.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::midnight(),
        Theme::daylight(),
        Theme::solarized_dark(),
        Theme::high_contrast(),
    ]
}

/// Find a preset by `name` (case-insensitive).
pub fn find(name: &str) -> Result<Theme> {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| DashError::UnknownPreset(name.to_string()))
}

/// User-supplied adjustments loaded from a TOML theme file.
///
/// ```toml
/// preset = "midnight"
///
/// [colors]
/// accent_primary = "#22c55e"
///
/// [fonts]
/// family = "Inter, sans-serif"
/// title_size = 16.0
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverrides {
    pub preset: Option<String>,
    #[serde(default)]
    pub colors: IndexMap<String, String>,
    #[serde(default)]
    pub fonts: FontOverrides,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontOverrides {
    pub family: Option<String>,
    pub title_size: Option<f64>,
}

impl ThemeOverrides {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Resolve against `fallback` (used when the file names no preset).
    /// Every color key must name a defined role.
    pub fn resolve(&self, fallback: Theme) -> Result<Theme> {
        let mut theme = match &self.preset {
            Some(name) => find(name)?,
            None => fallback,
        };
        for (role_name, hex) in &self.colors {
            let role = Role::from_name(role_name)?;
            *theme.slot_mut(role) = Color::from_hex(hex)?;
        }
        if let Some(family) = &self.fonts.family {
            theme.font_family = family.clone();
        }
        if let Some(size) = self.fonts.title_size {
            theme.title_font_size = size.max(1.0);
        }
        Ok(theme)
    }
}
