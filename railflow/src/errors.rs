//! Error types for the railflow engine.
//!
//! Failures on the Error track are data carried by a [`Track`](crate::core::Track),
//! not Rust errors. The types here cover the cases where a pipeline cannot
//! continue at all: a rejected step configuration, a step function breaking
//! its reply contract, or an untrapped step failure.

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// The main error type for railflow operations.
#[derive(Debug, Error)]
pub enum RailflowError {
    /// A step configuration was rejected before anything ran.
    #[error("{0}")]
    InvalidConfig(#[from] ConfigError),

    /// A non-wrapped step returned a raw value instead of a tagged reply.
    #[error("Step {} broke its reply contract: expected a tagged reply, got raw value {value}", step_label(.step))]
    ContractViolation {
        /// The step name, if any.
        step: Option<String>,
        /// The raw value that was returned.
        value: Value,
    },

    /// A step failed and was not configured to trap failures.
    #[error("Step {} failed: {source}", step_label(.step))]
    StepFailed {
        /// The step name, if any.
        step: Option<String>,
        /// The failure raised by the step function.
        #[source]
        source: anyhow::Error,
    },
}

impl RailflowError {
    /// Creates a contract violation error.
    #[must_use]
    pub fn contract_violation(step: Option<&str>, value: Value) -> Self {
        Self::ContractViolation {
            step: step.map(ToString::to_string),
            value,
        }
    }

    /// Creates a step failure error.
    #[must_use]
    pub fn step_failed(step: Option<&str>, source: anyhow::Error) -> Self {
        Self::StepFailed {
            step: step.map(ToString::to_string),
            source,
        }
    }

    /// The name of the step that raised the error, if it had one.
    #[must_use]
    pub fn step(&self) -> Option<&str> {
        match self {
            Self::InvalidConfig(err) => err.step.as_deref(),
            Self::ContractViolation { step, .. } | Self::StepFailed { step, .. } => step.as_deref(),
        }
    }
}

/// A step failure carrying a structured payload.
///
/// Steps return `anyhow::Result`, so any error type works. When a trapping
/// step fails with a `Fault`, its payload becomes the Error value verbatim;
/// any other error becomes its display string.
#[derive(Debug, Clone, Error)]
#[error("{payload}")]
pub struct Fault {
    /// The value to carry on the Error track.
    pub payload: Value,
}

impl Fault {
    /// Creates a new fault.
    #[must_use]
    pub fn new(payload: impl Into<Value>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

fn step_label(step: &Option<String>) -> String {
    step.as_ref()
        .map_or_else(|| "<unnamed>".to_string(), |name| format!("'{name}'"))
}

/// Error raised when a step configuration describes an inert or malformed step.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ConfigError {
    /// Machine-readable code (e.g., "CONFIG-RECOVER-OK-FILTER").
    pub code: &'static str,
    /// The error message.
    pub message: String,
    /// The step name, if any.
    pub step: Option<String>,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            step: None,
        }
    }

    /// Sets the step name.
    #[must_use]
    pub fn with_step(mut self, step: Option<&str>) -> Self {
        self.step = step.map(ToString::to_string);
        self
    }

    /// Hint for fixing the configuration, if the code is known.
    #[must_use]
    pub fn fix_hint(&self) -> Option<&'static str> {
        ConfigSuggestions::get(self.code)
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, Value> {
        let mut map = HashMap::new();
        map.insert("code".to_string(), Value::String(self.code.to_string()));
        map.insert("message".to_string(), Value::String(self.message.clone()));

        if let Some(ref step) = self.step {
            map.insert("step".to_string(), Value::String(step.clone()));
        }
        if let Some(hint) = self.fix_hint() {
            map.insert("fix_hint".to_string(), Value::String(hint.to_string()));
        }

        map
    }
}

/// Provides suggestions for configuration error codes.
pub struct ConfigSuggestions;

impl ConfigSuggestions {
    /// Gets a suggestion for a given error code.
    #[must_use]
    pub fn get(code: &str) -> Option<&'static str> {
        match code {
            ConfigError::RECOVER_OK_FILTER => Some(
                "A recovering step only changes anything on the Error track. \
                 Use the Error or Both filter, or switch control to Attempt.",
            ),
            ConfigError::EMPTY_NAMES => Some(
                "Pass at least one memorized name, or use InputMode::Nothing for a nullary step.",
            ),
            ConfigError::BLANK_NAME => Some("Give the step a non-blank name or leave it unnamed."),
            _ => None,
        }
    }
}

impl ConfigError {
    /// Recover control combined with an Ok-only filter.
    pub const RECOVER_OK_FILTER: &'static str = "CONFIG-RECOVER-OK-FILTER";
    /// Named-argument input without any names.
    pub const EMPTY_NAMES: &'static str = "CONFIG-EMPTY-NAMES";
    /// A step name that is empty or whitespace-only.
    pub const BLANK_NAME: &'static str = "CONFIG-BLANK-NAME";
}
