//! Canned step functions for tests.

use crate::step::Reply;
use parking_lot::Mutex;
use serde_json::Value;

/// A step that ignores its input and replies Ok with `value`.
pub fn ok_step<I>(value: impl Into<Value>) -> impl FnOnce(I) -> anyhow::Result<Reply> {
    let value = value.into();
    move |_| Ok(Reply::ok(value))
}

/// A step that ignores its input and replies Error with `value`.
pub fn error_step<I>(value: impl Into<Value>) -> impl FnOnce(I) -> anyhow::Result<Reply> {
    let value = value.into();
    move |_| Ok(Reply::error(value))
}

/// A step that replies with a bare, untagged value.
pub fn raw_step<I>(value: impl Into<Value>) -> impl FnOnce(I) -> anyhow::Result<Reply> {
    let value = value.into();
    move |_| Ok(Reply::raw(value))
}

/// A step that fails with `message`.
pub fn failing_step<I>(message: &str) -> impl FnOnce(I) -> anyhow::Result<Reply> {
    let message = message.to_string();
    move |_| Err(anyhow::anyhow!(message))
}

/// A step that panics with `message`.
pub fn panicking_step<I>(message: &str) -> impl FnOnce(I) -> anyhow::Result<Reply> {
    let message = message.to_string();
    move |_| panic!("{}", message)
}

/// Records the inputs of the steps it hands out.
#[derive(Debug, Default)]
pub struct CallRecorder {
    calls: Mutex<Vec<Value>>,
}

impl CallRecorder {
    /// Creates a new recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A step that records its input and then replies with `reply`.
    pub fn step(&self, reply: Reply) -> impl FnOnce(Value) -> anyhow::Result<Reply> + '_ {
        move |input| {
            self.calls.lock().push(input);
            Ok(reply)
        }
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Inputs seen so far, in call order.
    #[must_use]
    pub fn inputs(&self) -> Vec<Value> {
        self.calls.lock().clone()
    }
}
