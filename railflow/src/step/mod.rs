//! Step configuration and the step function contract.
//!
//! A step is a caller-supplied function plus a [`StepConfig`] describing when
//! it is eligible, what it receives and how its reply merges into the track.

mod config;
mod io;

pub use config::{Control, InputMode, StepConfig, ValuePolicy};
pub(crate) use config::validate_name;
pub use io::{Reply, StepInput};
