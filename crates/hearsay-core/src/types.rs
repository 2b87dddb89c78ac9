//! Shared types for the derivation pipeline.

use serde::{Deserialize, Serialize};

use crate::record::BeliefRecord;

/// Host-substituted inputs for one loop iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInputs {
    /// Opaque loop-iteration token; only ever used as a key suffix.
    pub loop_index: String,

    /// `id:value` pairs for the incentivized beliefs.
    pub incent_beliefs: String,

    /// `id:value` pairs for the true beliefs.
    pub true_beliefs: String,

    /// `id:value` pairs for the biases.
    pub biases: String,
}

impl PageInputs {
    pub fn new(
        loop_index: impl Into<String>,
        incent_beliefs: impl Into<String>,
        true_beliefs: impl Into<String>,
        biases: impl Into<String>,
    ) -> Self {
        Self {
            loop_index: loop_index.into(),
            incent_beliefs: incent_beliefs.into(),
            true_beliefs: true_beliefs.into(),
            biases: biases.into(),
        }
    }
}

/// The selected sender with values resolved from all three records.
///
/// A missing lookup resolves to NaN and flows through classification,
/// display, and storage unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderView {
    pub id: String,
    pub incent_belief: f64,
    pub true_belief: f64,
    pub bias: f64,
}

impl SenderView {
    /// Select the first sender of the incentivized record and resolve
    /// their values in all three records.
    pub fn select(incent: &BeliefRecord, truth: &BeliefRecord, bias: &BeliefRecord) -> Self {
        let id = match incent.first_id() {
            Some(id) => id.to_string(),
            None => {
                tracing::warn!("incentivized belief record is empty; no sender to select");
                String::new()
            }
        };
        let resolve = |record: &BeliefRecord| record.get(&id).unwrap_or(f64::NAN);
        Self {
            incent_belief: resolve(incent),
            true_belief: resolve(truth),
            bias: resolve(bias),
            id,
        }
    }
}

/// One embedded-data write produced by a derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageWrite {
    pub key: String,
    pub value: String,
}

impl StorageWrite {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_first_sender_and_resolves_all_values() {
        let incent = BeliefRecord::parse("x:0.7,y:0.4");
        let truth = BeliefRecord::parse("x:0.5,y:0.6");
        let bias = BeliefRecord::parse("x:5,y:-5");

        let sender = SenderView::select(&incent, &truth, &bias);
        assert_eq!(sender.id, "x");
        assert_eq!(sender.incent_belief, 0.7);
        assert_eq!(sender.true_belief, 0.5);
        assert_eq!(sender.bias, 5.0);
    }

    #[test]
    fn missing_keys_resolve_to_nan() {
        let incent = BeliefRecord::parse("x:0.7");
        let truth = BeliefRecord::parse("y:0.5");
        let bias = BeliefRecord::parse("");

        let sender = SenderView::select(&incent, &truth, &bias);
        assert_eq!(sender.id, "x");
        assert_eq!(sender.incent_belief, 0.7);
        assert!(sender.true_belief.is_nan());
        assert!(sender.bias.is_nan());
    }

    #[test]
    fn empty_roster_degrades_to_empty_id() {
        let empty = BeliefRecord::parse("");
        let sender = SenderView::select(&empty, &empty, &empty);
        assert_eq!(sender.id, "");
        assert!(sender.incent_belief.is_nan());
        assert!(sender.bias.is_nan());
    }
}
