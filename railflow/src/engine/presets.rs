//! Shorthand track methods for the canonical step presets.

use super::resolve;
use crate::core::{Track, TrackFilter};
use crate::errors::RailflowError;
use crate::events::EventSink;
use crate::step::{Reply, StepConfig, StepInput};
use serde_json::{json, Value};

impl Track {
    /// Applies a step with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn step<F>(self, config: &StepConfig, step: F) -> Result<Self, RailflowError>
    where
        F: FnOnce(StepInput) -> anyhow::Result<Reply>,
    {
        resolve(self, config, step)
    }

    /// Happy-path step on the current value. Skipped once the track has failed.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn run<F>(self, step: F) -> Result<Self, RailflowError>
    where
        F: FnOnce(Value) -> anyhow::Result<Reply>,
    {
        resolve(self, &StepConfig::run(), |input| step(input.into_value()))
    }

    /// Runs only on the Error track; an Ok reply brings the track back.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn recover<F>(self, step: F) -> Result<Self, RailflowError>
    where
        F: FnOnce(Value) -> anyhow::Result<Reply>,
    {
        resolve(self, &StepConfig::recover(), |input| step(input.into_value()))
    }

    /// Runs on either track and may only move it to Error. The carried value
    /// is kept.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn check<F>(self, step: F) -> Result<Self, RailflowError>
    where
        F: FnOnce(Value) -> anyhow::Result<Reply>,
    {
        resolve(self, &StepConfig::check(), |input| step(input.into_value()))
    }

    /// Side effect on the given tracks. Tag and value are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RailflowError::StepFailed`] if `step` fails.
    pub fn tap<F>(self, filter: TrackFilter, step: F) -> Result<Self, RailflowError>
    where
        F: FnOnce(Value) -> anyhow::Result<()>,
    {
        resolve(self, &StepConfig::tap(filter), |input| {
            step(input.into_value()).map(|()| Reply::raw(Value::Null))
        })
    }

    /// Observes the track whatever its tag. Tag and value are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RailflowError::StepFailed`] if `step` fails.
    pub fn note<F>(self, step: F) -> Result<Self, RailflowError>
    where
        F: FnOnce(Value) -> anyhow::Result<()>,
    {
        resolve(self, &StepConfig::note(), |input| {
            step(input.into_value()).map(|()| Reply::raw(Value::Null))
        })
    }

    /// Calls `step` with memorized values as positional arguments.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn apply<I, S, F>(self, names: I, step: F) -> Result<Self, RailflowError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(Vec<Value>) -> anyhow::Result<Reply>,
    {
        resolve(self, &StepConfig::apply(names), |input| step(input.into_args()))
    }

    /// Calls `step` with the elements of the current list value.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn spread<F>(self, step: F) -> Result<Self, RailflowError>
    where
        F: FnOnce(Vec<Value>) -> anyhow::Result<Reply>,
    {
        resolve(self, &StepConfig::spread(), |input| step(input.into_args()))
    }

    /// Emits the current result to `sink` on the given tracks.
    ///
    /// The event data is `{"tag", "name", "value"}` of the current result and
    /// the history entry is named after `event_type`.
    ///
    /// # Errors
    ///
    /// Returns [`RailflowError::InvalidConfig`] if `event_type` is blank.
    pub fn tap_sink(
        self,
        filter: TrackFilter,
        sink: &dyn EventSink,
        event_type: &str,
    ) -> Result<Self, RailflowError> {
        let data = json!({
            "tag": self.tag(),
            "name": self.current().name,
            "value": self.value(),
        });

        resolve(self, &StepConfig::tap(filter).named(event_type), |_| {
            sink.emit(event_type, Some(data));
            Ok(Reply::raw(Value::Null))
        })
    }
}
