//! Testing utilities for railflow pipelines.
//!
//! This module provides:
//! - Assertions on track state and history
//! - Canned step functions and a call recorder

mod assertions;
mod fixtures;

pub use assertions::{
    assert_history_len, assert_on_error_track, assert_on_ok_track, assert_skipped,
    assert_terminal,
};
pub use fixtures::{
    error_step, failing_step, ok_step, panicking_step, raw_step, CallRecorder,
};
