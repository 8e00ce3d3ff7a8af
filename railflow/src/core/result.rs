//! The immutable record of one step's outcome.

use super::Tag;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single step invocation, as stored in a track's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Which track the step ended on.
    pub tag: Tag,

    /// Caller-chosen name used for recall and named reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Success value or error payload.
    pub value: Value,

    /// Set when the producing step was not eligible to run.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skip: bool,
}

impl StepResult {
    /// Creates an unnamed result.
    #[must_use]
    pub fn new(tag: Tag, value: Value) -> Self {
        Self {
            tag,
            name: None,
            value,
            skip: false,
        }
    }

    /// Creates an unnamed Ok result.
    #[must_use]
    pub fn ok(value: Value) -> Self {
        Self::new(Tag::Ok, value)
    }

    /// Creates an unnamed Error result.
    #[must_use]
    pub fn error(value: Value) -> Self {
        Self::new(Tag::Error, value)
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Copy of this result marking an ineligible step, carrying that step's name.
    #[must_use]
    pub fn skipped(&self, name: Option<String>) -> Self {
        Self {
            tag: self.tag,
            name,
            value: self.value.clone(),
            skip: true,
        }
    }

    /// Returns true if the result is on the Ok track.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.tag.is_ok()
    }

    /// Returns true if the result is on the Error track.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.tag.is_error()
    }

    /// Returns true if the result came from a step that did not run.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skip
    }

    /// Returns true if this entry can answer a lookup for `name`.
    #[must_use]
    pub fn answers(&self, name: &str) -> bool {
        !self.skip && self.name.as_deref() == Some(name)
    }

    /// Returns the `(tag, value)` pair.
    #[must_use]
    pub fn into_pair(self) -> (Tag, Value) {
        (self.tag, self.value)
    }
}
