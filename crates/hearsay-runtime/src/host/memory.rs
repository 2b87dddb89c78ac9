//! In-memory host for tests and headless runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{EmbeddedStorage, HostError, InputDecoration, PageSurface};

/// BTreeMap-backed embedded storage with deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    fields: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a field, as the platform would before the page loads.
    pub fn seed(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// All stored fields.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl EmbeddedStorage for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.fields.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.fields.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One recorded surface effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceOp {
    HidePreviousButton,
    AppendContent { region: String, html: String },
    ReplaceContent { region: String, html: String },
    DecorateInput(InputDecoration),
}

/// Records surface effects in application order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects in the order they were applied.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Final contents of `region` after all replace/append effects.
    pub fn region_html(&self, region: &str) -> String {
        let mut html = String::new();
        for op in &self.ops {
            match op {
                SurfaceOp::ReplaceContent { region: r, html: h } if r == region => {
                    html.clear();
                    html.push_str(h);
                }
                SurfaceOp::AppendContent { region: r, html: h } if r == region => {
                    html.push_str(h);
                }
                _ => {}
            }
        }
        html
    }
}

impl PageSurface for RecordingSurface {
    fn hide_previous_button(&mut self) -> Result<(), HostError> {
        self.ops.push(SurfaceOp::HidePreviousButton);
        Ok(())
    }

    fn append_content(&mut self, region: &str, html: &str) -> Result<(), HostError> {
        self.ops.push(SurfaceOp::AppendContent {
            region: region.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }

    fn replace_content(&mut self, region: &str, html: &str) -> Result<(), HostError> {
        self.ops.push(SurfaceOp::ReplaceContent {
            region: region.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }

    fn decorate_input(&mut self, decoration: &InputDecoration) -> Result<(), HostError> {
        self.ops.push(SurfaceOp::DecorateInput(decoration.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_set_then_get() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn region_html_tracks_replace_then_append() {
        let mut surface = RecordingSurface::new();
        surface.append_content("r", "<p>old</p>").unwrap();
        surface.replace_content("r", "<p>new</p>").unwrap();
        surface.append_content("r", "<p>more</p>").unwrap();
        surface.append_content("other", "<p>elsewhere</p>").unwrap();

        assert_eq!(surface.region_html("r"), "<p>new</p><p>more</p>");
        assert_eq!(surface.region_html("other"), "<p>elsewhere</p>");
    }
}
