//! Persisted user preferences.
//!
//! The only thing that outlives a session is the selected theme, stored as a
//! single string under the `portfolio-theme` key.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::theme::ThemeKind;

/// Preference file format
#[derive(Debug, Serialize, Deserialize)]
struct PreferencesFile {
    version: u32,
    #[serde(rename = "portfolio-theme", default)]
    theme: Option<String>,
}

impl Default for PreferencesFile {
    fn default() -> Self {
        Self {
            version: 1,
            theme: None,
        }
    }
}

/// File-backed preference store
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
}

impl Preferences {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the default preference file path
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("devops-folio")
            .join("preferences.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, or the default when missing, unreadable or unknown
    pub fn load_theme(&self) -> ThemeKind {
        let stored = match self.read() {
            Ok(file) => file.theme,
            Err(e) => {
                tracing::warn!("Ignoring unreadable preferences: {:#}", e);
                return ThemeKind::default();
            }
        };

        match stored {
            None => ThemeKind::default(),
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                ThemeKind::default()
            }),
        }
    }

    /// Write the theme, creating the parent directory if needed
    pub fn save_theme(&self, kind: ThemeKind) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create preferences directory")?;
        }

        let file = PreferencesFile {
            theme: Some(kind.to_string()),
            ..PreferencesFile::default()
        };
        let content = serde_json::to_string_pretty(&file)
            .context("Failed to serialize preferences")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        tracing::debug!("Saved theme {} to {}", kind, self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<PreferencesFile> {
        if !self.path.exists() {
            tracing::debug!("No preferences file found, using defaults");
            return Ok(PreferencesFile::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> Preferences {
        Preferences::new(dir.path().join("nested").join("preferences.json"))
    }

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store(&dir).load_theme(), ThemeKind::Dark);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let prefs = store(&dir);

        prefs.save_theme(ThemeKind::Light).unwrap();
        assert_eq!(prefs.load_theme(), ThemeKind::Light);

        let raw = fs::read_to_string(prefs.path()).unwrap();
        assert!(raw.contains("\"portfolio-theme\": \"light\""));
    }

    #[test]
    fn test_corrupt_file_defaults_to_dark() {
        let dir = TempDir::new().unwrap();
        let prefs = store(&dir);
        fs::create_dir_all(prefs.path().parent().unwrap()).unwrap();

        fs::write(prefs.path(), "{ not json").unwrap();
        assert_eq!(prefs.load_theme(), ThemeKind::Dark);

        fs::write(prefs.path(), r#"{"version":1,"portfolio-theme":"sepia"}"#).unwrap();
        assert_eq!(prefs.load_theme(), ThemeKind::Dark);
    }

    #[test]
    fn test_context_persists_changes_only() {
        use crate::ui::theme::{PaletteOverrides, ThemeContext};

        let dir = TempDir::new().unwrap();
        let prefs = store(&dir);

        let mut ctx = ThemeContext::load(
            prefs.clone(),
            PaletteOverrides::default(),
            PaletteOverrides::default(),
        );
        assert_eq!(ctx.kind(), ThemeKind::Dark);

        // Re-selecting the active theme writes nothing
        assert!(!ctx.set(ThemeKind::Dark));
        assert!(!prefs.path().exists());

        ctx.toggle();
        assert_eq!(prefs.load_theme(), ThemeKind::Light);

        let reloaded = ThemeContext::load(
            prefs.clone(),
            PaletteOverrides::default(),
            PaletteOverrides::default(),
        );
        assert_eq!(reloaded.kind(), ThemeKind::Light);
    }
}
