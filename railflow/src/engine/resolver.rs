//! The resolution algorithm: one step applied to one track.

use super::memory::{non_list_marker, not_found_marker};
use crate::core::{StepResult, Tag, Track};
use crate::errors::{Fault, RailflowError};
use crate::step::{InputMode, Reply, StepConfig, StepInput, ValuePolicy};
use serde_json::Value;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// What came back from invoking a step function.
enum Invocation {
    Replied(Reply),
    Trapped(Value),
}

/// Applies one step to a track and returns the advanced track.
///
/// The step runs only if the track's tag passes `config.track_filter`;
/// otherwise a skipped copy of the current result is recorded and the track
/// stays where it was. An eligible step's reply is merged into the track
/// according to `config.control` and `config.value_policy`.
///
/// # Errors
///
/// - [`RailflowError::InvalidConfig`] if `config` fails validation.
/// - [`RailflowError::StepFailed`] if the step returns an error and
///   `config.trap_exceptions` is off.
/// - [`RailflowError::ContractViolation`] if a non-wrapped step returns
///   [`Reply::Raw`].
///
/// A panic inside `step` unwinds through this call unless
/// `config.trap_exceptions` is on.
pub fn resolve<F>(track: Track, config: &StepConfig, step: F) -> Result<Track, RailflowError>
where
    F: FnOnce(StepInput) -> anyhow::Result<Reply>,
{
    config.validate()?;

    let name = config.name.clone();
    let old_tag = track.tag();

    if !config.track_filter.matches(old_tag) {
        debug!(
            step = name.as_deref().unwrap_or("<unnamed>"),
            filter = %config.track_filter,
            tag = %old_tag,
            "Step skipped"
        );
        let skipped = track.current().skipped(name);
        return Ok(track.record(skipped));
    }

    // An unavailable input resolves like an Error reply carrying the marker.
    let (new_tag, new_value) = match negotiate_input(&track, &config.input) {
        Ok(input) => match invoke(config, step, input)? {
            Invocation::Replied(reply) => interpret(config, reply)?,
            Invocation::Trapped(payload) => (Tag::Error, payload),
        },
        Err(marker) => {
            debug!(
                step = name.as_deref().unwrap_or("<unnamed>"),
                marker = %marker,
                "Step input unavailable"
            );
            (Tag::Error, marker)
        }
    };

    let tag = config.control.merge(old_tag, new_tag);
    let value = match config.value_policy {
        ValuePolicy::Replace => new_value,
        ValuePolicy::Retain => track.value().clone(),
    };

    debug!(
        step = name.as_deref().unwrap_or("<unnamed>"),
        control = ?config.control,
        returned = %new_tag,
        tag = %tag,
        "Step resolved"
    );

    Ok(track.advance(StepResult {
        tag,
        name,
        value,
        skip: false,
    }))
}

/// Builds the step input, or the Error marker the step resolves to instead.
fn negotiate_input(track: &Track, mode: &InputMode) -> Result<StepInput, Value> {
    match mode {
        InputMode::Current => Ok(StepInput::Value(track.value().clone())),
        InputMode::Nothing => Ok(StepInput::Nothing),
        InputMode::Named(names) => names
            .iter()
            .map(|name| {
                track
                    .lookup(name)
                    .map(|result| result.value.clone())
                    .ok_or_else(|| not_found_marker(name))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(StepInput::Args),
        InputMode::Spread => match track.value() {
            Value::Array(items) => Ok(StepInput::Args(items.clone())),
            other => Err(non_list_marker(other)),
        },
    }
}

/// Calls the step function. This is the only place failures are trapped.
fn invoke<F>(config: &StepConfig, step: F, input: StepInput) -> Result<Invocation, RailflowError>
where
    F: FnOnce(StepInput) -> anyhow::Result<Reply>,
{
    let name = config.name.as_deref();

    if !config.trap_exceptions {
        return step(input)
            .map(Invocation::Replied)
            .map_err(|source| RailflowError::step_failed(name, source));
    }

    match panic::catch_unwind(AssertUnwindSafe(|| step(input))) {
        Ok(Ok(reply)) => Ok(Invocation::Replied(reply)),
        Ok(Err(err)) => {
            warn!(step = name.unwrap_or("<unnamed>"), error = %err, "Step failure trapped");
            let payload = match err.downcast::<Fault>() {
                Ok(fault) => fault.payload,
                Err(err) => Value::String(err.to_string()),
            };
            Ok(Invocation::Trapped(payload))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(step = name.unwrap_or("<unnamed>"), panic = %message, "Step panic trapped");
            Ok(Invocation::Trapped(Value::String(message)))
        }
    }
}

/// Turns a reply into the step's own `(tag, value)`.
fn interpret(config: &StepConfig, reply: Reply) -> Result<(Tag, Value), RailflowError> {
    if config.wrap {
        return Ok((Tag::Ok, reply.into_value()));
    }

    match reply {
        Reply::Tagged(tag, value) => Ok((tag, value)),
        Reply::Raw(value) => Err(RailflowError::contract_violation(config.name.as_deref(), value)),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "step panicked".to_string()
    }
}
