//! # hearsay-runtime
//!
//! Host integration for the hearsay guessing task.
//!
//! [`hearsay_core`] derives what a page load should do; this crate makes
//! it happen against a host. The host is reached only through two
//! capability traits — [`EmbeddedStorage`] for the platform's key-value
//! fields and [`PageSurface`] for the page itself — so the full pass runs
//! unchanged against the bundled in-memory host.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hearsay_core::{DisplayConfig, PageInputs};
//! use hearsay_runtime::{run_onload, MemoryStore, RecordingSurface};
//!
//! let inputs = PageInputs::new("2", "s1:0.83", "s1:0.84", "s1:-1");
//! let mut store = MemoryStore::new();
//! store.seed("guessing_task_counter", "3");
//! let mut surface = RecordingSurface::new();
//!
//! let outcome = run_onload(&inputs, &DisplayConfig::default(), &mut store, &mut surface)?;
//! assert_eq!(outcome.derivation.sender.id, "s1");
//! ```

pub mod handler;
pub mod host;

// Re-export main types at crate root
pub use handler::{run_onload, HandlerError, PageOutcome};
pub use host::{
    EmbeddedStorage, HostError, InputDecoration, MemoryStore, PageSurface, RecordingSurface,
    SurfaceOp,
};
