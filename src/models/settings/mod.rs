// Settings module
// Picker configuration surface, loadable from TOML

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::date_range::DateRange;
use crate::models::localization::LocalizedText;
use crate::utils::date::{parse_iso_date, weekday_from_index};

/// Which side of the input the calendar dialog opens towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid picker configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("first_day_of_week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidFirstDayOfWeek(u8),
}

/// Options recognised by the picker. Dates are ISO `YYYY-MM-DD` text, empty
/// for "not set".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub name: String,
    pub identifier: String,
    pub disabled: bool,
    pub direction: Direction,
    pub value: String,
    pub min: String,
    pub max: String,
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    pub localization: LocalizedText,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            name: "date".to_string(),
            identifier: String::new(),
            disabled: false,
            direction: Direction::Right,
            value: String::new(),
            min: String::new(),
            max: String::new(),
            first_day_of_week: 1, // Monday
            localization: LocalizedText::default(),
        }
    }
}

impl PickerConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize picker configuration")
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read picker config from {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("failed to parse picker config from {}", path.display()))
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if weekday_from_index(self.first_day_of_week).is_none() {
            return Err(ConfigError::InvalidFirstDayOfWeek(self.first_day_of_week));
        }
        Ok(())
    }

    /// The configured week start; out-of-range values fall back to Monday.
    pub fn first_weekday(&self) -> Weekday {
        weekday_from_index(self.first_day_of_week).unwrap_or(Weekday::Mon)
    }

    pub fn range(&self) -> DateRange {
        DateRange::from_iso(&self.min, &self.max)
    }

    pub fn initial_value(&self) -> Option<NaiveDate> {
        if self.value.is_empty() {
            return None;
        }
        let parsed = parse_iso_date(&self.value);
        if parsed.is_none() {
            log::warn!("Ignoring malformed initial value {:?}", self.value);
        }
        parsed
    }

    /// Identifier carried by notifications.
    pub fn component_id(&self) -> String {
        if self.identifier.is_empty() {
            crate::models::picker_event::COMPONENT_NAME.to_string()
        } else {
            self.identifier.clone()
        }
    }
}

/// Platform config location, e.g. `~/.config/date-picker/picker.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Ken24T", "DatePicker")
        .map(|dirs| dirs.config_dir().join("picker.toml"))
}
