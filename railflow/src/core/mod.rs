//! Core domain model types for railflow.
//!
//! This module contains the fundamental types every pipeline is built from:
//! - Track tags and eligibility filters
//! - The per-step result record
//! - The track itself, with its terminal operations

mod result;
mod tag;
mod track;

pub use result::StepResult;
pub use tag::{Tag, TrackFilter};
pub use track::Track;
