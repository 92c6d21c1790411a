//! Theme system for the portfolio
//!
//! Provides:
//! - `ThemeKind`, the two supported themes (light, dark)
//! - `Palette`, one colour per semantic role
//! - `ThemeContext`, the active theme handed down to every draw call
//! - Hex colour parsing for config overrides
//! - Tailwind gradient lookup for skill card accents

use ratatui::style::Color;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::preferences::Preferences;

/// The two supported themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 2] = [ThemeKind::Light, ThemeKind::Dark];

    /// The other theme
    pub fn toggle(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }

    /// Display name for the theme picker
    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Light => "Light",
            ThemeKind::Dark => "Dark",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ThemeKind::Light => "☀",
            ThemeKind::Dark => "☾",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeKind {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeKind::Light),
            "dark" => Ok(ThemeKind::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

/// Semantic colour roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Background,
    Surface,
    Card,
    Border,
    Text,
    TextSecondary,
    Accent,
    AccentSecondary,
    Glow,
    Gradient1,
    Gradient2,
}

/// Colours for every semantic role.
///
/// Translucent web colours are pre-blended over the theme background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub card: Color,
    pub border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub accent_secondary: Color,
    pub glow: Color,
    pub gradient1: Color,
    pub gradient2: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),       // #ffffff
            surface: Color::Rgb(248, 250, 252),          // #f8fafc
            card: Color::Rgb(255, 255, 255),             // #ffffff
            border: Color::Rgb(226, 232, 240),           // #e2e8f0
            text: Color::Rgb(30, 41, 59),                // #1e293b
            text_secondary: Color::Rgb(100, 116, 139),   // #64748b
            accent: Color::Rgb(249, 115, 22),            // #f97316
            accent_secondary: Color::Rgb(59, 130, 246),  // #3b82f6
            glow: Color::Rgb(252, 185, 139),             // accent @ 50%
            gradient1: Color::Rgb(254, 222, 197),        // orange-400 @ 30%
            gradient2: Color::Rgb(196, 218, 252),        // blue-500 @ 30%
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(6, 9, 24),            // #060918
            surface: Color::Rgb(13, 17, 23),             // #0d1117
            card: Color::Rgb(22, 27, 34),                // #161b22
            border: Color::Rgb(31, 34, 47),              // white @ 10%
            text: Color::Rgb(255, 255, 255),             // #ffffff
            text_secondary: Color::Rgb(180, 181, 186),   // white @ 70%
            accent: Color::Rgb(249, 115, 22),            // #f97316
            accent_secondary: Color::Rgb(59, 130, 246),  // #3b82f6
            glow: Color::Rgb(128, 62, 23),               // accent @ 50%
            gradient1: Color::Rgb(42, 25, 24),           // accent @ 15%
            gradient2: Color::Rgb(14, 27, 57),           // blue-500 @ 15%
        }
    }

    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    /// Every role with its colour, in declaration order
    pub fn roles(&self) -> [(Role, Color); 11] {
        [
            (Role::Background, self.background),
            (Role::Surface, self.surface),
            (Role::Card, self.card),
            (Role::Border, self.border),
            (Role::Text, self.text),
            (Role::TextSecondary, self.text_secondary),
            (Role::Accent, self.accent),
            (Role::AccentSecondary, self.accent_secondary),
            (Role::Glow, self.glow),
            (Role::Gradient1, self.gradient1),
            (Role::Gradient2, self.gradient2),
        ]
    }
}

/// Per-role colour overrides from the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub background: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub surface: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub card: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub border: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub text: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub text_secondary: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub accent: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub accent_secondary: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub glow: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub gradient1: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub gradient2: Option<Color>,
}

impl PaletteOverrides {
    pub fn apply(&self, base: Palette) -> Palette {
        Palette {
            background: self.background.unwrap_or(base.background),
            surface: self.surface.unwrap_or(base.surface),
            card: self.card.unwrap_or(base.card),
            border: self.border.unwrap_or(base.border),
            text: self.text.unwrap_or(base.text),
            text_secondary: self.text_secondary.unwrap_or(base.text_secondary),
            accent: self.accent.unwrap_or(base.accent),
            accent_secondary: self.accent_secondary.unwrap_or(base.accent_secondary),
            glow: self.glow.unwrap_or(base.glow),
            gradient1: self.gradient1.unwrap_or(base.gradient1),
            gradient2: self.gradient2.unwrap_or(base.gradient2),
        }
    }
}

/// The active theme.
///
/// Owned by `App` and passed by reference into the draw functions. Changes
/// are written through to the preference store when one is attached.
#[derive(Debug)]
pub struct ThemeContext {
    kind: ThemeKind,
    palette: Palette,
    light_overrides: PaletteOverrides,
    dark_overrides: PaletteOverrides,
    store: Option<Preferences>,
}

impl ThemeContext {
    /// Restore the persisted theme, falling back to dark
    pub fn load(
        store: Preferences,
        light_overrides: PaletteOverrides,
        dark_overrides: PaletteOverrides,
    ) -> Self {
        let kind = store.load_theme();
        tracing::info!("Restored theme {} from {}", kind, store.path().display());
        let mut ctx = Self::detached(kind);
        ctx.light_overrides = light_overrides;
        ctx.dark_overrides = dark_overrides;
        ctx.palette = ctx.resolve(kind);
        ctx.store = Some(store);
        ctx
    }

    /// A context that never persists
    pub fn detached(kind: ThemeKind) -> Self {
        Self {
            kind,
            palette: Palette::for_kind(kind),
            light_overrides: PaletteOverrides::default(),
            dark_overrides: PaletteOverrides::default(),
            store: None,
        }
    }

    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette for any theme, with overrides applied
    pub fn resolve(&self, kind: ThemeKind) -> Palette {
        let overrides = match kind {
            ThemeKind::Light => &self.light_overrides,
            ThemeKind::Dark => &self.dark_overrides,
        };
        overrides.apply(Palette::for_kind(kind))
    }

    /// Select a theme explicitly.
    ///
    /// Returns false, without touching the store, if it is already active.
    pub fn set(&mut self, kind: ThemeKind) -> bool {
        if kind == self.kind {
            return false;
        }
        self.kind = kind;
        self.palette = self.resolve(kind);
        tracing::info!("Theme changed to {}", kind);

        if let Some(ref store) = self.store {
            if let Err(e) = store.save_theme(kind) {
                tracing::warn!("Failed to persist theme: {:#}", e);
            }
        }
        true
    }

    pub fn toggle(&mut self) {
        self.set(self.kind.toggle());
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb, #rrggbbaa (alpha ignored)
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match s.len() {
        3 => Ok(Color::Rgb(channel(0..1)? * 17, channel(1..2)? * 17, channel(2..3)? * 17)),
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Serde deserializer for hex colors
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Tailwind colour by name, for the shades the bundled content uses
pub fn tailwind_color(name: &str) -> Option<Color> {
    let rgb = match name {
        "blue-400" => (96, 165, 250),
        "blue-500" => (59, 130, 246),
        "blue-600" => (37, 99, 235),
        "blue-800" => (30, 64, 175),
        "indigo-400" => (129, 140, 248),
        "indigo-500" => (99, 102, 241),
        "indigo-600" => (79, 70, 229),
        "orange-400" => (251, 146, 60),
        "orange-500" => (249, 115, 22),
        "red-400" => (248, 113, 113),
        "red-500" => (239, 68, 68),
        "red-600" => (220, 38, 38),
        "rose-600" => (225, 29, 72),
        "rose-700" => (190, 18, 60),
        "yellow-400" => (250, 204, 21),
        "yellow-600" => (202, 138, 4),
        "green-400" => (74, 222, 128),
        "green-500" => (34, 197, 94),
        "emerald-600" => (5, 150, 105),
        "cyan-400" => (34, 211, 238),
        "cyan-500" => (6, 182, 212),
        "purple-400" => (192, 132, 252),
        "purple-500" => (168, 85, 247),
        "purple-600" => (147, 51, 234),
        "pink-400" => (244, 114, 182),
        "pink-600" => (219, 39, 119),
        "gray-500" => (107, 114, 128),
        "gray-700" => (55, 65, 81),
        _ => return None,
    };
    Some(Color::Rgb(rgb.0, rgb.1, rgb.2))
}

/// Resolve `from-<a> to-<b>` into its two stops
pub fn gradient_stops(classes: &str) -> Option<(Color, Color)> {
    let mut from = None;
    let mut to = None;
    for token in classes.split_whitespace() {
        if let Some(name) = token.strip_prefix("from-") {
            from = tailwind_color(name);
        } else if let Some(name) = token.strip_prefix("to-") {
            to = tailwind_color(name);
        }
    }
    Some((from?, to?))
}

/// Linear blend between two RGB colours, `t` in 0.0..=1.0.
/// Non-RGB colours snap to the nearer end.
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => a,
        _ => b,
    }
}
