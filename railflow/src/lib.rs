//! # Railflow
//!
//! A railway pipeline engine.
//!
//! Railflow chains steps that may succeed or fail. Once a step fails, the
//! following happy-path steps are skipped while the failure is carried along,
//! until a recovering step brings the pipeline back onto the success track.
//! It provides:
//!
//! - **Tracks**: an immutable current result plus the full step history
//! - **Presets**: run, recover, check, tap, note, apply and spread steps
//! - **Named memory**: memorize facts and recall them as step arguments
//! - **Trapping**: opt-in conversion of step failures and panics into Error results
//! - **Side channels**: event sinks written to from tap steps
//!
//! ## Quick Start
//!
//! ```rust
//! use railflow::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), RailflowError> {
//! let track = Track::new(10)
//!     .run(|_| Ok(Reply::error("too many bunnies")))?
//!     .run(|_| Ok(Reply::ok("ignored")))?
//!     .recover(|err| Ok(Reply::ok(format!("handled: {}", err.as_str().unwrap_or_default()))))?;
//!
//! assert_eq!(track.finish(), (Tag::Ok, json!("handled: too many bunnies")));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod engine;
pub mod errors;
pub mod events;
pub mod observability;
pub mod step;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{StepResult, Tag, Track, TrackFilter};
    pub use crate::engine::{resolve, MEMORY_NOT_FOUND, NON_LIST_VALUE};
    pub use crate::errors::{ConfigError, Fault, RailflowError};
    pub use crate::events::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::step::{Control, InputMode, Reply, StepConfig, StepInput, ValuePolicy};
}
