//! The railway engine.
//!
//! This module provides:
//! - The resolution algorithm applying one step to a track
//! - Named memory and recall over a track's history
//! - Shorthand track methods for the canonical presets

mod memory;
mod presets;
mod resolver;

pub use memory::{non_list_marker, not_found_marker, MEMORY_NOT_FOUND, NON_LIST_VALUE};
pub use resolver::resolve;
