//! Overlay configuration.
//!
//! All fields are optional in the JSON form; missing ones take defaults.
//!
//! ```json
//! {
//!   "stroke_width": 3.0,
//!   "history_limit": 100,
//!   "coordinate_mode": "scroll",
//!   "default_color": "red",
//!   "writing_enabled": true
//! }
//! ```

use crate::history::MAX_UNDO_HISTORY;
use crate::palette::PaletteColor;
use crate::surface::CoordinateMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for a drawing overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Stroke width used when rendering paths.
    pub stroke_width: f64,
    /// Maximum number of undo states kept.
    pub history_limit: usize,
    /// How pointer positions are translated into surface space.
    pub coordinate_mode: CoordinateMode,
    /// Color selected when a session is created.
    pub default_color: PaletteColor,
    /// Whether pointer-down starts a stroke initially.
    pub writing_enabled: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            history_limit: MAX_UNDO_HISTORY,
            coordinate_mode: CoordinateMode::default(),
            default_color: PaletteColor::default(),
            writing_enabled: true,
        }
    }
}

impl OverlayConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded overlay config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "stroke_width must be a positive number, got {}",
                self.stroke_width
            )));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = OverlayConfig::default();
        assert!((config.stroke_width - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.history_limit, MAX_UNDO_HISTORY);
        assert_eq!(config.coordinate_mode, CoordinateMode::BoundingBox);
        assert_eq!(config.default_color, PaletteColor::Black);
        assert!(config.writing_enabled);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = OverlayConfig::from_json(r#"{"coordinate_mode":"scroll","default_color":"red"}"#)
            .unwrap();
        assert_eq!(config.coordinate_mode, CoordinateMode::Scroll);
        assert_eq!(config.default_color, PaletteColor::Red);
        assert_eq!(config.history_limit, MAX_UNDO_HISTORY);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(OverlayConfig::from_json("{}").unwrap(), OverlayConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            OverlayConfig::from_json(r#"{"history_limit":0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            OverlayConfig::from_json(r#"{"stroke_width":-1.0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_color() {
        assert!(matches!(
            OverlayConfig::from_json(r#"{"default_color":"magenta"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"stroke_width": 4.5, "writing_enabled": false}}"#).unwrap();

        let config = OverlayConfig::load(file.path()).unwrap();
        assert!((config.stroke_width - 4.5).abs() < f64::EPSILON);
        assert!(!config.writing_enabled);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = OverlayConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = OverlayConfig {
            stroke_width: 5.0,
            history_limit: 10,
            coordinate_mode: CoordinateMode::Scroll,
            default_color: PaletteColor::Blue,
            writing_enabled: false,
        };
        let json = config.to_json().unwrap();
        assert_eq!(OverlayConfig::from_json(&json).unwrap(), config);
    }
}
