//! Generator settings.
//!
//! Every field has a default, so a partial TOML file only overrides what it
//! names:
//!
//! ```toml
//! collection_name = "screen"
//! desktop_mode = "d"
//! mobile_mode = "m"
//! space_prefix = "space-"
//! breakpoint = "640px"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Names the lookups search for and the breakpoint the CSS uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Variable collection holding the spacing tokens.
    pub collection_name: String,
    /// Desktop mode name; also the desktop text style prefix (`d/`).
    pub desktop_mode: String,
    /// Mobile mode name; also the mobile text style prefix (`m/`).
    pub mobile_mode: String,
    /// Name prefix of spacing variables.
    pub space_prefix: String,
    /// `min-width` at which desktop values apply.
    pub breakpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collection_name: "screen".into(),
            desktop_mode: "d".into(),
            mobile_mode: "m".into(),
            space_prefix: "space-".into(),
            breakpoint: "640px".into(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_toml(&content)?;
        tracing::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let required = [
            ("collection_name", &self.collection_name),
            ("desktop_mode", &self.desktop_mode),
            ("mobile_mode", &self.mobile_mode),
            ("space_prefix", &self.space_prefix),
            ("breakpoint", &self.breakpoint),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SettingsError::Invalid(format!("{field} must not be empty")));
            }
        }
        if self.desktop_mode == self.mobile_mode {
            return Err(SettingsError::Invalid(format!(
                "desktop_mode and mobile_mode are both \"{}\"",
                self.desktop_mode
            )));
        }
        Ok(())
    }

    /// Text style name prefix for desktop styles, e.g. `d/`.
    pub fn desktop_style_prefix(&self) -> String {
        format!("{}/", self.desktop_mode)
    }

    /// Text style name prefix for mobile styles, e.g. `m/`.
    pub fn mobile_style_prefix(&self) -> String {
        format!("{}/", self.mobile_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.collection_name, "screen");
        assert_eq!(settings.desktop_mode, "d");
        assert_eq!(settings.mobile_mode, "m");
        assert_eq!(settings.space_prefix, "space-");
        assert_eq!(settings.breakpoint, "640px");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml("breakpoint = \"768px\"\n").unwrap();
        assert_eq!(settings.breakpoint, "768px");
        assert_eq!(settings.collection_name, "screen");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Settings::from_toml("space_prefix = \"\"").unwrap_err();
        assert_eq!(err.to_string(), "invalid settings: space_prefix must not be empty");
    }

    #[test]
    fn test_same_modes_rejected() {
        let err = Settings::from_toml("desktop_mode = \"m\"").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_bad_toml() {
        let err = Settings::from_toml("breakpoint = ").unwrap_err();
        assert!(matches!(err, SettingsError::Toml(_)));
    }

    #[test]
    fn test_style_prefixes() {
        let settings = Settings::default();
        assert_eq!(settings.desktop_style_prefix(), "d/");
        assert_eq!(settings.mobile_style_prefix(), "m/");
    }
}
