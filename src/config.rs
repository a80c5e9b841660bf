//! Settings for the notedeck components, loaded from TOML.
//!
//! Every field has a default, so an empty document is valid:
//!
//! ```rust
//! use notedeck_widgets::config::Settings;
//! use notedeck_widgets::timer::TimeUnit;
//!
//! let settings = Settings::from_toml_str("[timer]\nunit = \"minutes\"\nduration = 25\n").unwrap();
//! assert_eq!(settings.timer.unit, TimeUnit::Minutes);
//! assert_eq!(settings.timer.duration, 25);
//! assert_eq!(settings.notes.save_debounce_ms, 300);
//! ```

use crate::timer::{TimeUnit, MAX_DURATION, MIN_DURATION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("unable to read settings file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid TOML or has wrongly typed fields.
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid setting {field}: {reason}")]
    Invalid {
        /// Dotted field name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Task timer defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Initial duration, in `unit`s.
    pub duration: u32,
    /// Initial unit.
    pub unit: TimeUnit,
    /// Milliseconds between decrements.
    pub tick_interval_ms: u64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            duration: 60,
            unit: TimeUnit::Seconds,
            tick_interval_ms: 1000,
        }
    }
}

impl TimerSettings {
    /// The tick interval as a duration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Notes page defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesSettings {
    /// Quiet period before edits are saved.
    pub save_debounce_ms: u64,
    /// Shown in place of a blank title.
    pub untitled_label: String,
}

impl Default for NotesSettings {
    fn default() -> Self {
        Self {
            save_debounce_ms: 300,
            untitled_label: "Untitled Note".to_string(),
        }
    }
}

impl NotesSettings {
    /// The save debounce as a duration.
    pub fn save_debounce(&self) -> Duration {
        Duration::from_millis(self.save_debounce_ms)
    }
}

/// All settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `[timer]` table.
    pub timer: TimerSettings,
    /// `[notes]` table.
    pub notes: NotesSettings,
}

impl Settings {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DURATION..=MAX_DURATION).contains(&self.timer.duration) {
            return Err(ConfigError::Invalid {
                field: "timer.duration",
                reason: format!(
                    "{} is outside {}..={}",
                    self.timer.duration, MIN_DURATION, MAX_DURATION
                ),
            });
        }
        if self.timer.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "timer.tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timer.duration, 60);
        assert_eq!(settings.timer.tick_interval(), Duration::from_secs(1));
        assert_eq!(settings.notes.save_debounce(), Duration::from_millis(300));
        assert_eq!(settings.notes.untitled_label, "Untitled Note");
    }

    #[test]
    fn test_full_document() {
        let text = r#"
            [timer]
            duration = 2
            unit = "hours"
            tick_interval_ms = 500

            [notes]
            save_debounce_ms = 1000
            untitled_label = "(no title)"
        "#;
        let settings = Settings::from_toml_str(text).unwrap();
        assert_eq!(settings.timer.unit, TimeUnit::Hours);
        assert_eq!(settings.timer.duration, 2);
        assert_eq!(settings.timer.tick_interval_ms, 500);
        assert_eq!(settings.notes.save_debounce_ms, 1000);
        assert_eq!(settings.notes.untitled_label, "(no title)");
    }

    #[test]
    fn test_unknown_unit_is_a_parse_error() {
        let err = Settings::from_toml_str("[timer]\nunit = \"days\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_values() {
        let err = Settings::from_toml_str("[timer]\nduration = 120\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "timer.duration",
                ..
            }
        ));

        let err = Settings::from_toml_str("[timer]\ntick_interval_ms = 0\n").unwrap_err();
        assert!(err.to_string().contains("tick_interval_ms"));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here/notedeck.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("notedeck.toml"));
    }
}
