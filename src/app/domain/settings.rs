use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app::domain::buffer::DecimalPolicy;
use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

impl ThemeMode {
    /// Resolve to a concrete dark flag, asking the platform only when needed.
    pub fn is_dark(&self, detect_system: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::SystemDefault => detect_system(),
        }
    }
}

pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 72;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_display_font_size")]
    pub display_font_size: u32,

    #[serde(default = "default_button_font_size")]
    pub button_font_size: u32,

    /// Ignore a second decimal point typed inside the same number
    #[serde(default)]
    pub strict_decimal_input: bool,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_display_font_size() -> u32 {
    28
}

fn default_button_font_size() -> u32 {
    18
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            display_font_size: default_display_font_size(),
            button_font_size: default_button_font_size(),
            strict_decimal_input: false,
        }
    }
}

impl AppSettings {
    pub fn decimal_policy(&self) -> DecimalPolicy {
        if self.strict_decimal_input {
            DecimalPolicy::Strict
        } else {
            DecimalPolicy::Lenient
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("display font size", self.display_font_size),
            ("button font size", self.button_font_size),
        ] {
            if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
                return Err(AppError::Settings(format!(
                    "{} {} is outside {}..={}",
                    name, size, MIN_FONT_SIZE, MAX_FONT_SIZE
                )));
            }
        }
        Ok(())
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(path) {
                    warn!(path = %path.display(), error = %e, "could not write default settings");
                }
                default
            }
        }
    }

    fn parse(contents: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), "settings saved");

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ferriscalc");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(settings.display_font_size, 28);
        assert_eq!(settings.button_font_size, 18);
        assert!(!settings.strict_decimal_input);
        assert_eq!(settings.decimal_policy(), DecimalPolicy::Lenient);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        // Older files may lack newer fields
        let json = r#"{"theme_mode": "Dark"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.display_font_size, 28);
        assert!(!settings.strict_decimal_input);
    }

    #[test]
    fn test_theme_mode_serialization() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Light,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Light\""));
    }

    #[test]
    fn test_theme_mode_resolution() {
        assert!(!ThemeMode::Light.is_dark(|| true));
        assert!(ThemeMode::Dark.is_dark(|| false));
        assert!(ThemeMode::SystemDefault.is_dark(|| true));
        assert!(!ThemeMode::SystemDefault.is_dark(|| false));
    }

    #[test]
    fn test_strict_policy() {
        let settings = AppSettings {
            strict_decimal_input: true,
            ..Default::default()
        };
        assert_eq!(settings.decimal_policy(), DecimalPolicy::Strict);
    }

    #[test]
    fn test_validate_font_sizes() {
        let settings = AppSettings {
            button_font_size: 200,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(AppError::Settings(_))));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            display_font_size: 32,
            button_font_size: 14,
            strict_decimal_input: true,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());

        fs::write(&path, r#"{"display_font_size": 1}"#).unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
