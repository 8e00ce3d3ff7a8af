//! What a step function receives and what it hands back.

use crate::core::Tag;
use serde_json::Value;

/// Input negotiated for a step function by its [`InputMode`](super::InputMode).
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    /// The current carried value.
    Value(Value),
    /// Positional arguments, from named recall or a spread list.
    Args(Vec<Value>),
    /// No input.
    Nothing,
}

impl StepInput {
    /// Collapses the input into one value: arguments become a list and
    /// `Nothing` becomes null.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Args(args) => Value::Array(args),
            Self::Nothing => Value::Null,
        }
    }

    /// Returns the input as positional arguments: a single value becomes a
    /// one-element list and `Nothing` an empty one.
    #[must_use]
    pub fn into_args(self) -> Vec<Value> {
        match self {
            Self::Value(value) => vec![value],
            Self::Args(args) => args,
            Self::Nothing => Vec::new(),
        }
    }
}

/// What a step function returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// An explicit `(tag, value)` pair.
    Tagged(Tag, Value),
    /// A bare value. Only accepted by wrapped steps.
    Raw(Value),
}

impl Reply {
    /// Tagged success.
    #[must_use]
    pub fn ok(value: impl Into<Value>) -> Self {
        Self::Tagged(Tag::Ok, value.into())
    }

    /// Tagged failure.
    #[must_use]
    pub fn error(value: impl Into<Value>) -> Self {
        Self::Tagged(Tag::Error, value.into())
    }

    /// Bare value.
    #[must_use]
    pub fn raw(value: impl Into<Value>) -> Self {
        Self::Raw(value.into())
    }

    /// Returns the tag if the reply is tagged.
    #[must_use]
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Self::Tagged(tag, _) => Some(*tag),
            Self::Raw(_) => None,
        }
    }

    /// Returns the carried payload, dropping any tag.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Tagged(_, value) | Self::Raw(value) => value,
        }
    }
}

impl From<Result<Value, Value>> for Reply {
    fn from(result: Result<Value, Value>) -> Self {
        match result {
            Ok(value) => Self::Tagged(Tag::Ok, value),
            Err(value) => Self::Tagged(Tag::Error, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_shapes() {
        assert_eq!(StepInput::Value(json!(1)).into_args(), vec![json!(1)]);
        assert_eq!(StepInput::Args(vec![json!(1), json!(2)]).into_value(), json!([1, 2]));
        assert_eq!(StepInput::Nothing.into_value(), Value::Null);
        assert!(StepInput::Nothing.into_args().is_empty());
    }

    #[test]
    fn test_reply_constructors() {
        assert_eq!(Reply::ok(3).tag(), Some(Tag::Ok));
        assert_eq!(Reply::error("no").tag(), Some(Tag::Error));
        assert_eq!(Reply::raw(3).tag(), None);
        assert_eq!(Reply::error("no").into_value(), json!("no"));
    }

    #[test]
    fn test_reply_from_result() {
        assert_eq!(Reply::from(Ok(json!(1))), Reply::ok(1));
        assert_eq!(Reply::from(Err(json!("bad"))), Reply::error("bad"));
    }
}
