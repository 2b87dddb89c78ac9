//! The page-load handler.
//!
//! One synchronous pass per page instance: read the counter, derive the
//! page state, write the embedded fields, and apply the surface effects
//! in order. No retries, no suspension points, no cleanup path.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use hearsay_core::{
    derive, ConfigError, DisplayConfig, PageInputs, TaskDerivation, GUESSING_TASK_COUNTER_KEY,
};

use crate::host::{EmbeddedStorage, HostError, InputDecoration, PageSurface};

/// Errors from a handler pass.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid display configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

/// Result of one completed pass.
#[derive(Debug, Clone)]
pub struct PageOutcome {
    /// Everything derived for this page load.
    pub derivation: TaskDerivation,

    /// When the pass completed.
    pub rendered_at: DateTime<Utc>,
}

/// Run the page-load behavior once.
///
/// Effects are applied in a fixed order: back-button suppression, part
/// header, embedded-data writes, content replacement, input decoration.
///
/// # Arguments
///
/// * `inputs` - The host-substituted loop inputs
/// * `config` - Presentation settings; validated before any effect
/// * `store` - Embedded storage capability
/// * `surface` - Page surface capability
pub fn run_onload(
    inputs: &PageInputs,
    config: &DisplayConfig,
    store: &mut dyn EmbeddedStorage,
    surface: &mut dyn PageSurface,
) -> Result<PageOutcome, HandlerError> {
    config.validate()?;

    if config.hide_previous_button {
        surface.hide_previous_button()?;
    }

    let counter_raw = store.get(GUESSING_TASK_COUNTER_KEY)?.unwrap_or_default();
    let derivation = derive(inputs, &counter_raw);

    surface.append_content(&config.task_region, &derivation.header_html)?;

    for write in &derivation.writes {
        store.set(&write.key, &write.value)?;
    }

    surface.replace_content(&config.content_region, &derivation.body_html)?;
    surface.decorate_input(&InputDecoration::from_config(config))?;

    debug!(
        loop_index = %inputs.loop_index,
        sender_id = %derivation.sender.id,
        estimation = %derivation.estimation,
        writes = derivation.writes.len(),
        "guessing-task page pass complete"
    );

    Ok(PageOutcome {
        derivation,
        rendered_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryStore, RecordingSurface};

    #[test]
    fn invalid_config_is_rejected_before_any_effect() {
        let mut config = DisplayConfig::default();
        config.content_region = String::new();

        let inputs = PageInputs::new("1", "x:0.5", "x:0.5", "x:0");
        let mut store = MemoryStore::new();
        let mut surface = RecordingSurface::new();

        let result = run_onload(&inputs, &config, &mut store, &mut surface);
        assert!(matches!(result, Err(HandlerError::Config(_))));
        assert!(surface.ops().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn back_button_suppression_is_configurable() {
        let mut config = DisplayConfig::default();
        config.hide_previous_button = false;

        let inputs = PageInputs::new("1", "x:0.5", "x:0.5", "x:0");
        let mut store = MemoryStore::new();
        let mut surface = RecordingSurface::new();

        run_onload(&inputs, &config, &mut store, &mut surface).unwrap();
        assert!(!surface
            .ops()
            .iter()
            .any(|op| matches!(op, crate::host::SurfaceOp::HidePreviousButton)));
    }

    #[test]
    fn storage_failure_propagates() {
        struct FailingStore;

        impl EmbeddedStorage for FailingStore {
            fn get(&self, key: &str) -> Result<Option<String>, HostError> {
                Err(HostError::Storage {
                    key: key.to_string(),
                    reason: "session expired".to_string(),
                })
            }

            fn set(&mut self, _key: &str, _value: &str) -> Result<(), HostError> {
                unreachable!("get fails first")
            }
        }

        let inputs = PageInputs::new("1", "x:0.5", "x:0.5", "x:0");
        let mut store = FailingStore;
        let mut surface = RecordingSurface::new();

        let result = run_onload(&inputs, &DisplayConfig::default(), &mut store, &mut surface);
        assert!(matches!(result, Err(HandlerError::Host(_))));
    }
}
