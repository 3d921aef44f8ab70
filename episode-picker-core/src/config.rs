//! Picker presentation configuration
use crate::constants::{DEFAULT_REVEAL_DELAY_MS, MAX_REVEAL_DELAY_MS};
use crate::filters::FilterConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings loaded from the bundled `picker.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    /// Delay before a pick is revealed; 0 reveals immediately.
    pub reveal_delay_ms: u32,
    pub default_filters: FilterConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            default_filters: FilterConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("picker config could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reveal delay {value}ms exceeds maximum {max}ms")]
    RevealDelayTooLong { value: u32, max: u32 },
}

impl PickerConfig {
    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of bounds.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::RevealDelayTooLong` when the delay exceeds the cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal_delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(ConfigError::RevealDelayTooLong {
                value: self.reveal_delay_ms,
                max: MAX_REVEAL_DELAY_MS,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn reveals_immediately(&self) -> bool {
        self.reveal_delay_ms == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.reveal_delay_ms, 800);
    }

    #[test]
    fn default_filters_are_read_from_json() {
        let config =
            PickerConfig::from_json(r#"{"revealDelayMs":0,"defaultFilters":{"weightedShuffle":true}}"#)
                .unwrap();
        assert!(config.reveals_immediately());
        assert!(config.default_filters.weighted_shuffle);
        assert!(config.default_filters.christmas);
    }

    #[test]
    fn overlong_delay_is_rejected() {
        let err = PickerConfig::from_json(r#"{"revealDelayMs":60000}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RevealDelayTooLong {
                value: 60_000,
                max: 5_000
            }
        ));
    }
}
