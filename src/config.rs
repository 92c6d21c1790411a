use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::preferences::Preferences;
use crate::ui::layout::GridLayout;
use crate::ui::theme::PaletteOverrides;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub search: SearchConfig,
    pub highlight: HighlightConfig,
    pub particles: ParticlesConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub prompt: String,
    /// Shown in the search bar while it is empty
    pub placeholder: String,
    /// Skill grid columns
    pub columns: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a typed query is applied
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// How long a section pulses after a footer link is activated
    pub duration_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub enabled: bool,
    pub count: usize,
    /// Fixed seed for a reproducible particle field
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Where the selected theme is stored
    pub preferences_file: Option<String>,
    pub light: PaletteOverrides,
    pub dark: PaletteOverrides,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            prompt: "❯ ".to_string(),
            placeholder: "Search skills...".to_string(),
            columns: 3,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { duration_secs: 5 }
    }
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 12,
            seed: None,
        }
    }
}

/// Longest accepted search debounce
const MAX_DEBOUNCE_MS: u64 = 10_000;
/// Longest accepted section highlight
const MAX_HIGHLIGHT_SECS: u64 = 3600;

impl AppearanceConfig {
    /// Grid column limit, clamped to what the grid can lay out
    pub fn columns(&self) -> u16 {
        self.columns.clamp(1, GridLayout::MAX_COLUMNS)
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.min(MAX_DEBOUNCE_MS))
    }
}

impl HighlightConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs.min(MAX_HIGHLIGHT_SECS))
    }
}

impl ThemeConfig {
    /// Preference store at the configured path, or the default location
    pub fn preferences(&self) -> Preferences {
        match self.preferences_file {
            Some(ref path) => Preferences::new(PathBuf::from(shellexpand::tilde(path).as_ref())),
            None => Preferences::new(Preferences::default_path()),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.debounce(), Duration::from_millis(300));
        assert_eq!(config.highlight.duration(), Duration::from_secs(5));
        assert_eq!(config.appearance.columns, 3);
        assert_eq!(config.particles.count, 12);
        assert!(config.particles.seed.is_none());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse(
            r##"
            [search]
            debounce_ms = 150

            [particles]
            seed = 7

            [theme.dark]
            accent = "#00ff00"
            "##,
        )
        .unwrap();

        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.particles.seed, Some(7));
        assert!(config.particles.enabled);
        assert_eq!(config.theme.dark.accent, Some(Color::Rgb(0, 255, 0)));
        assert_eq!(config.theme.light.accent, None);
        assert_eq!(config.appearance.placeholder, "Search skills...");
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = Config::parse(
            r##"
            [appearance]
            columns = 10

            [search]
            debounce_ms = 18446744073709551615

            [highlight]
            duration_secs = 9223372036854775807
            "##,
        )
        .unwrap();

        assert_eq!(config.appearance.columns(), GridLayout::MAX_COLUMNS);
        assert_eq!(config.search.debounce(), Duration::from_millis(MAX_DEBOUNCE_MS));
        assert_eq!(config.highlight.duration(), Duration::from_secs(MAX_HIGHLIGHT_SECS));

        let config = Config::parse("[appearance]\ncolumns = 0").unwrap();
        assert_eq!(config.appearance.columns(), 1);
    }

    #[test]
    fn test_bad_color_is_an_error() {
        assert!(Config::parse("[theme.light]\ntext = \"#12\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.appearance.prompt, "❯ ");
    }

    #[test]
    fn test_preferences_path_override() {
        let config = Config::parse("[theme]\npreferences_file = \"/tmp/folio/prefs.json\"").unwrap();
        assert_eq!(
            config.theme.preferences().path(),
            Path::new("/tmp/folio/prefs.json")
        );
    }
}
