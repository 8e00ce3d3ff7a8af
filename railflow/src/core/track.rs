//! The value-and-history structure threaded through a pipeline.

use super::{StepResult, Tag};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The evolving state of a pipeline: the current result plus every result
/// produced so far.
///
/// A `Track` is consumed by each step and a new one is returned, so a caller
/// can never observe a track being changed by a later step. Clone it to
/// branch a pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    current: StepResult,
    #[serde(default)]
    history: Vec<StepResult>,
}

impl Track {
    /// Seeds a track on the Ok side with a bare value.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self::from_parts(Tag::Ok, value)
    }

    /// Seeds a track from an explicit `(tag, value)` pair.
    #[must_use]
    pub fn from_parts(tag: Tag, value: impl Into<Value>) -> Self {
        Self {
            current: StepResult::new(tag, value.into()),
            history: Vec::new(),
        }
    }

    /// Seeds a track on the Ok side.
    #[must_use]
    pub fn ok(value: impl Into<Value>) -> Self {
        Self::from_parts(Tag::Ok, value)
    }

    /// Seeds a track on the Error side.
    #[must_use]
    pub fn error(value: impl Into<Value>) -> Self {
        Self::from_parts(Tag::Error, value)
    }

    /// The authoritative latest result.
    #[must_use]
    pub fn current(&self) -> &StepResult {
        &self.current
    }

    /// The current tag.
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.current.tag
    }

    /// The current carried value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.current.value
    }

    /// Every result produced by a step, oldest first. The seed is not included.
    #[must_use]
    pub fn history(&self) -> &[StepResult] {
        &self.history
    }

    /// Number of step invocations recorded, skipped ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns true if no step has been applied yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns true if the track is on the Ok side.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.current.is_ok()
    }

    /// Returns true if the track is on the Error side.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.current.is_error()
    }

    /// Collapses the track into its final `(tag, value)` pair.
    #[must_use]
    pub fn finish(self) -> (Tag, Value) {
        self.current.into_pair()
    }

    /// Collapses the track into a native `Result`.
    pub fn into_result(self) -> Result<Value, Value> {
        match self.current.tag {
            Tag::Ok => Ok(self.current.value),
            Tag::Error => Err(self.current.value),
        }
    }

    /// Appends a result that becomes the new current one.
    pub(crate) fn advance(mut self, result: StepResult) -> Self {
        self.current = result.clone();
        self.history.push(result);
        self
    }

    /// Appends a result to history while leaving `current` as it was.
    pub(crate) fn record(mut self, result: StepResult) -> Self {
        self.history.push(result);
        self
    }
}

impl From<StepResult> for Track {
    fn from(current: StepResult) -> Self {
        Self {
            current,
            history: Vec::new(),
        }
    }
}
