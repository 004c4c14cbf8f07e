use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::app::infrastructure::error::AppError;

/// When the Exit command asks before quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExitConfirmation {
    #[default]
    Always,
    WhenDirty,
    Never,
}

impl ExitConfirmation {
    pub fn should_ask(self, dirty: bool) -> bool {
        match self {
            Self::Always => true,
            Self::WhenDirty => dirty,
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub word_wrap_enabled: bool,

    #[serde(default)]
    pub show_whitespace: bool,

    #[serde(default)]
    pub show_border: bool,

    #[serde(default)]
    pub show_status_bar: bool,

    /// Tab size in spaces (default 2)
    #[serde(default = "default_tab_size")]
    pub tab_size: u32,

    #[serde(default)]
    pub exit_confirmation: ExitConfirmation,

    /// Ask before New/Open throw away unsaved changes
    #[serde(default)]
    pub confirm_discard_changes: bool,

    /// Show an alert when opening or saving fails (always logged either way)
    #[serde(default)]
    pub report_io_errors: bool,
}

pub const MIN_TAB_SIZE: u32 = 1;
pub const MAX_TAB_SIZE: u32 = 16;

fn default_tab_size() -> u32 {
    2
}

/// Keep a configured tab size inside what the editor can lay out.
pub fn clamp_tab_size(size: u32) -> u32 {
    size.clamp(MIN_TAB_SIZE, MAX_TAB_SIZE)
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            word_wrap_enabled: false,
            show_whitespace: false,
            show_border: false,
            show_status_bar: false,
            tab_size: default_tab_size(),
            exit_confirmation: ExitConfirmation::default(),
            confirm_discard_changes: false,
            report_io_errors: false,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults if missing or unreadable.
    ///
    /// Settings are read-only at runtime; view toggles are not written back.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)?;
        let mut settings: Self = serde_json::from_str(&contents)?;
        settings.tab_size = clamp_tab_size(settings.tab_size);
        Ok(settings)
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("notepad");
        path.push("settings.json");
        path
    }
}

/// Cosmetic options toggled from the Format and View menus. In memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    pub word_wrap: bool,
    pub show_whitespace: bool,
    pub show_border: bool,
    pub show_status_bar: bool,
}

impl ViewOptions {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            word_wrap: settings.word_wrap_enabled,
            show_whitespace: settings.show_whitespace,
            show_border: settings.show_border,
            show_status_bar: settings.show_status_bar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert!(!settings.word_wrap_enabled);
        assert!(!settings.show_whitespace);
        assert!(!settings.show_border);
        assert!(!settings.show_status_bar);
        assert_eq!(settings.tab_size, 2);
        assert_eq!(settings.exit_confirmation, ExitConfirmation::Always);
        assert!(!settings.confirm_discard_changes);
        assert!(!settings.report_io_errors);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"word_wrap_enabled": true}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(settings.word_wrap_enabled);
        assert_eq!(settings.tab_size, 2);
        assert_eq!(settings.exit_confirmation, ExitConfirmation::Always);
    }

    #[test]
    fn test_exit_confirmation_serialization() {
        let settings = AppSettings {
            exit_confirmation: ExitConfirmation::WhenDirty,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"WhenDirty\""));
    }

    #[test]
    fn test_exit_confirmation_policy() {
        assert!(ExitConfirmation::Always.should_ask(false));
        assert!(ExitConfirmation::Always.should_ask(true));
        assert!(!ExitConfirmation::WhenDirty.should_ask(false));
        assert!(ExitConfirmation::WhenDirty.should_ask(true));
        assert!(!ExitConfirmation::Never.should_ask(true));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"show_status_bar": true, "tab_size": 8, "exit_confirmation": "Never"}"#,
        )
        .unwrap();

        let settings = AppSettings::load_from(&path).unwrap();
        assert!(settings.show_status_bar);
        assert_eq!(settings.tab_size, 8);
        assert_eq!(settings.exit_confirmation, ExitConfirmation::Never);
    }

    #[test]
    fn test_load_from_clamps_tab_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, r#"{"tab_size": 0}"#).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap().tab_size, MIN_TAB_SIZE);

        fs::write(&path, r#"{"tab_size": 4294967295}"#).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap().tab_size, MAX_TAB_SIZE);

        fs::write(&path, r#"{"tab_size": 4}"#).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap().tab_size, 4);
    }

    #[test]
    fn test_load_from_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AppSettings::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_view_options_from_settings() {
        let settings = AppSettings {
            word_wrap_enabled: true,
            show_status_bar: true,
            ..Default::default()
        };
        let view = ViewOptions::from_settings(&settings);
        assert!(view.word_wrap);
        assert!(view.show_status_bar);
        assert!(!view.show_whitespace);
        assert!(!view.show_border);
    }
}
