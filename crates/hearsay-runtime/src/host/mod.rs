//! Host capabilities.
//!
//! The survey platform owns embedded storage and the page surface. The
//! handler only ever touches them through these traits, so a full pass
//! can run against the in-memory host in tests.

mod memory;

pub use memory::{MemoryStore, RecordingSurface, SurfaceOp};

use hearsay_core::DisplayConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by host capabilities.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("storage access failed for `{key}`: {reason}")]
    Storage { key: String, reason: String },

    #[error("page element `{0}` not found")]
    MissingElement(String),

    #[error("surface update failed: {0}")]
    Surface(String),
}

/// Host-managed key-value storage scoped to one survey response.
pub trait EmbeddedStorage {
    /// Read a field; `None` when it has never been set.
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Write a field, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError>;
}

/// The mutable page surface.
///
/// A handler pass applies every effect exactly once. There is no undo
/// path; the page lifecycle owns teardown.
pub trait PageSurface {
    /// Suppress the page's back-navigation control.
    fn hide_previous_button(&mut self) -> Result<(), HostError>;

    /// Append a fragment to a region, keeping existing contents.
    fn append_content(&mut self, region: &str, html: &str) -> Result<(), HostError>;

    /// Replace a region's contents with a fragment.
    fn replace_content(&mut self, region: &str, html: &str) -> Result<(), HostError>;

    /// Insert the labels around the answer input and apply the style
    /// overrides.
    fn decorate_input(&mut self, decoration: &InputDecoration) -> Result<(), HostError>;
}

/// Labels and style overrides applied around the answer input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDecoration {
    pub before_label: String,
    pub after_label: String,
    pub input_width: String,
    pub input_font_size: String,
    pub label_font_size: String,
}

impl InputDecoration {
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            before_label: config.before_label.clone(),
            after_label: config.after_label.clone(),
            input_width: config.input_width.clone(),
            input_font_size: config.input_font_size.clone(),
            label_font_size: config.label_font_size.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoration_mirrors_config() {
        let config = DisplayConfig::default();
        let decoration = InputDecoration::from_config(&config);
        assert_eq!(decoration.before_label, "I believe it is ");
        assert_eq!(decoration.after_label, " % likely that Bag A was drawn.");
        assert_eq!(decoration.input_width, "8%");
        assert_eq!(decoration.input_font_size, "24px");
        assert_eq!(decoration.label_font_size, "24px");
    }
}
