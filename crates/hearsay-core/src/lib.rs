//! # hearsay-core
//!
//! Deterministic derivation engine for a repeated survey guessing task.
//!
//! On each page load the host platform hands over three delimited
//! belief-record strings, a loop-iteration token, and a stored task
//! counter. This crate turns those inputs into everything the page
//! needs: the selected sender, the bias classification, the display
//! fragments, and the embedded-data write set. Applying the effects is
//! the runtime crate's job.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Total**: Derivation never fails; malformed input degrades to NaN
//!    markers instead of aborting the page
//! 3. **Host-free**: No I/O and no page types
//! 4. **Order-preserving**: Records iterate in source order and the first
//!    sender of the incentivized record wins
//!
//! ## Example
//!
//! ```rust,ignore
//! use hearsay_core::{derive, PageInputs};
//!
//! let inputs = PageInputs::new("2", "s1:0.7,s2:0.4", "s1:0.5,s2:0.6", "s1:5,s2:-5");
//! let derivation = derive(&inputs, "3");
//!
//! assert_eq!(derivation.sender.id, "s1");
//! assert_eq!(derivation.writes.len(), 6);
//! ```

pub mod classify;
pub mod config;
pub mod counter;
pub mod figure;
pub mod message;
pub mod record;
pub mod types;

// Re-export main types at crate root
pub use classify::{classify, Estimation};
pub use config::{ConfigError, DisplayConfig};
pub use counter::TaskCounter;
pub use figure::figure_link;
pub use message::{estimate_html, format_number, format_percent, header_html, task_label};
pub use record::BeliefRecord;
pub use types::{PageInputs, SenderView, StorageWrite};

use tracing::debug;

/// Embedded field holding the display label of the current task.
pub const GUESSING_TASK_TEXT_KEY: &str = "guessing_task_text";

/// Embedded field carrying the task counter across loop iterations.
pub const GUESSING_TASK_COUNTER_KEY: &str = "guessing_task_counter";

/// Everything derived for one page load.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDerivation {
    pub counter: TaskCounter,
    pub sender: SenderView,
    pub estimation: Estimation,

    /// Link for the incentives graph. Carried while the graph display is
    /// disabled; not embedded in `body_html`.
    pub figure_link: &'static str,

    /// "Guessing Task N" label.
    pub task_label: String,

    /// Part header appended to the task region.
    pub header_html: String,

    /// Estimate fragment that replaces the content region.
    pub body_html: String,

    /// The six embedded-data writes, in application order.
    pub writes: Vec<StorageWrite>,
}

/// Derive the full page behavior for one loop iteration.
///
/// # Arguments
///
/// * `inputs` - The host-substituted loop inputs
/// * `counter_raw` - The stored `guessing_task_counter` field value
pub fn derive(inputs: &PageInputs, counter_raw: &str) -> TaskDerivation {
    let counter = TaskCounter::parse(counter_raw);

    let incent = BeliefRecord::parse(&inputs.incent_beliefs);
    let truth = BeliefRecord::parse(&inputs.true_beliefs);
    let bias = BeliefRecord::parse(&inputs.biases);

    let sender = SenderView::select(&incent, &truth, &bias);
    let estimation = classify(sender.bias);
    let figure_link = figure::figure_link(sender.bias);

    let task_label = message::task_label(counter);
    let header_html = message::header_html(counter);
    let body_html = message::estimate_html(&sender, estimation);

    let idx = &inputs.loop_index;
    let writes = vec![
        StorageWrite::new(GUESSING_TASK_TEXT_KEY, task_label.clone()),
        StorageWrite::new(GUESSING_TASK_COUNTER_KEY, counter.to_string()),
        StorageWrite::new(format!("sender_id_{idx}"), sender.id.clone()),
        StorageWrite::new(
            format!("sender_incent_belief_{idx}"),
            format_number(sender.incent_belief),
        ),
        StorageWrite::new(
            format!("sender_true_belief_{idx}"),
            format_number(sender.true_belief),
        ),
        StorageWrite::new(format!("sender_bias_{idx}"), format_number(sender.bias)),
    ];

    debug!(
        incent_record = ?incent,
        true_record = ?truth,
        bias_record = ?bias,
        sender_id = %sender.id,
        incent_belief = sender.incent_belief,
        true_belief = sender.true_belief,
        bias = sender.bias,
        "derived guessing-task page state"
    );

    TaskDerivation {
        counter,
        sender,
        estimation,
        figure_link,
        task_label,
        header_html,
        body_html,
        writes,
    }
}
