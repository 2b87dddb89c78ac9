//! Display configuration.
//!
//! Region ids, style overrides, and label text for the answer input.
//! Defaults match the production survey; deployments override individual
//! fields from YAML or JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing or validating a display configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Presentation settings for one guessing-task page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Region whose contents are replaced with the estimate fragment.
    pub content_region: String,

    /// Region the part header is appended to.
    pub task_region: String,

    /// CSS width applied to the answer input.
    pub input_width: String,

    /// CSS font size applied to the answer input.
    pub input_font_size: String,

    /// CSS font size applied to the inserted labels.
    pub label_font_size: String,

    /// Text inserted immediately before the answer input.
    pub before_label: String,

    /// Text inserted immediately after the answer input.
    pub after_label: String,

    /// Whether the page's back-navigation control is suppressed.
    pub hide_previous_button: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            content_region: "dynamic-content".to_string(),
            task_region: "guessing-task-container".to_string(),
            input_width: "8%".to_string(),
            input_font_size: "24px".to_string(),
            label_font_size: "24px".to_string(),
            before_label: "I believe it is ".to_string(),
            after_label: " % likely that Bag A was drawn.".to_string(),
            hide_previous_button: true,
        }
    }
}

impl DisplayConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: DisplayConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DisplayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Labels may legitimately be empty; regions and style values may not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("content_region", &self.content_region),
            ("task_region", &self.task_region),
            ("input_width", &self.input_width),
            ("input_font_size", &self.input_font_size),
            ("label_font_size", &self.label_font_size),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ConfigError::MissingField(field.to_string()));
            }
        }
        Ok(())
    }
}
