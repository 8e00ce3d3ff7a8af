//! Per-invocation step configuration and its named presets.

use crate::core::{Tag, TrackFilter};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// How a step's new tag merges with the track's existing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// The new tag wins only when it is Error.
    #[default]
    Attempt,
    /// The old tag is kept unconditionally.
    Hold,
    /// The new tag replaces the old one in either direction.
    Recover,
}

impl Control {
    /// Merges a step's tag into the track's tag.
    #[must_use]
    pub fn merge(self, old: Tag, new: Tag) -> Tag {
        match self {
            Self::Attempt => {
                if new == Tag::Error {
                    Tag::Error
                } else {
                    old
                }
            }
            Self::Hold => old,
            Self::Recover => new,
        }
    }
}

/// Whether the carried value changes after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuePolicy {
    /// The step's value becomes the carried value.
    #[default]
    Replace,
    /// The carried value is left untouched.
    Retain,
}

/// What is passed into a step function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// The current carried value.
    #[default]
    Current,
    /// Values recalled from history by name, in the given order.
    Named(Vec<String>),
    /// The elements of the current value, which must be a list.
    Spread,
    /// No input at all.
    Nothing,
}

/// Declarative configuration of one step invocation.
///
/// Build one from a preset ([`StepConfig::run`], [`StepConfig::recover`],
/// [`StepConfig::check`], [`StepConfig::tap`], [`StepConfig::note`], ...) and
/// adjust it with the `with_*` modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepConfig {
    /// Name given to the produced result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tags the step is eligible to run on.
    #[serde(default)]
    pub track_filter: TrackFilter,
    /// Tag merge policy.
    #[serde(default)]
    pub control: Control,
    /// Value merge policy.
    #[serde(default)]
    pub value_policy: ValuePolicy,
    /// Treat the function's reply as a bare success value.
    #[serde(default)]
    pub wrap: bool,
    /// Turn step failures and panics into Error results.
    #[serde(default)]
    pub trap_exceptions: bool,
    /// Input shape.
    #[serde(default)]
    pub input: InputMode,
}

impl StepConfig {
    /// Happy-path step: runs on Ok, may fail, replaces the value.
    #[must_use]
    pub fn run() -> Self {
        Self::default()
    }

    /// Runs only on Error; a successful reply moves the track back to Ok.
    #[must_use]
    pub fn recover() -> Self {
        Self {
            track_filter: TrackFilter::Error,
            control: Control::Recover,
            ..Self::default()
        }
    }

    /// Runs on either track, can only move the tag toward Error and always
    /// keeps the carried value.
    #[must_use]
    pub fn check() -> Self {
        Self {
            track_filter: TrackFilter::Both,
            control: Control::Attempt,
            value_policy: ValuePolicy::Retain,
            ..Self::default()
        }
    }

    /// Side-effect step on the given tracks; tag and value never change.
    #[must_use]
    pub fn tap(filter: TrackFilter) -> Self {
        Self {
            track_filter: filter,
            control: Control::Hold,
            value_policy: ValuePolicy::Retain,
            wrap: true,
            ..Self::default()
        }
    }

    /// Observes either track; tag and value are pinned.
    #[must_use]
    pub fn note() -> Self {
        Self::tap(TrackFilter::Both)
    }

    /// Run step fed with memorized values, in the order given.
    #[must_use]
    pub fn apply<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::run().with_input(InputMode::Named(names.into_iter().map(Into::into).collect()))
    }

    /// Run step fed with the elements of the current list value.
    #[must_use]
    pub fn spread() -> Self {
        Self::run().with_input(InputMode::Spread)
    }

    /// Sets the result name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the track filter.
    #[must_use]
    pub fn with_filter(mut self, filter: TrackFilter) -> Self {
        self.track_filter = filter;
        self
    }

    /// Sets the tag merge policy.
    #[must_use]
    pub fn with_control(mut self, control: Control) -> Self {
        self.control = control;
        self
    }

    /// Sets the value merge policy.
    #[must_use]
    pub fn with_value_policy(mut self, policy: ValuePolicy) -> Self {
        self.value_policy = policy;
        self
    }

    /// Sets the input shape.
    #[must_use]
    pub fn with_input(mut self, input: InputMode) -> Self {
        self.input = input;
        self
    }

    /// Treats replies as bare success values.
    #[must_use]
    pub fn wrapped(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Converts step failures and panics into Error results.
    #[must_use]
    pub fn trapping(mut self) -> Self {
        self.trap_exceptions = true;
        self
    }

    /// Rejects combinations that can never do what they describe.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a recovering Ok-only step, a named-input
    /// step with no names, or a blank step name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = self.name.as_deref();
        validate_name(step)?;

        if self.control == Control::Recover && self.track_filter == TrackFilter::Ok {
            return Err(ConfigError::new(
                ConfigError::RECOVER_OK_FILTER,
                "Recover control on an Ok-only step can never leave the Error track",
            )
            .with_step(step));
        }

        if matches!(&self.input, InputMode::Named(names) if names.is_empty()) {
            return Err(ConfigError::new(
                ConfigError::EMPTY_NAMES,
                "Named input requires at least one name",
            )
            .with_step(step));
        }

        Ok(())
    }
}

/// Rejects an empty or whitespace-only name. `None` is allowed.
pub(crate) fn validate_name(name: Option<&str>) -> Result<(), ConfigError> {
    match name {
        Some(blank) if blank.trim().is_empty() => Err(ConfigError::new(
            ConfigError::BLANK_NAME,
            "Step name cannot be empty or whitespace-only",
        )
        .with_step(name)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_run() {
        let config = StepConfig::default();
        assert_eq!(config, StepConfig::run());
        assert_eq!(config.track_filter, TrackFilter::Ok);
        assert_eq!(config.control, Control::Attempt);
        assert_eq!(config.value_policy, ValuePolicy::Replace);
        assert!(!config.wrap);
        assert!(!config.trap_exceptions);
        assert_eq!(config.input, InputMode::Current);
    }

    #[test]
    fn test_presets() {
        let recover = StepConfig::recover();
        assert_eq!(recover.track_filter, TrackFilter::Error);
        assert_eq!(recover.control, Control::Recover);

        let check = StepConfig::check();
        assert_eq!(check.track_filter, TrackFilter::Both);
        assert_eq!(check.value_policy, ValuePolicy::Retain);

        let tap = StepConfig::tap(TrackFilter::Error);
        assert_eq!(tap.track_filter, TrackFilter::Error);
        assert_eq!(tap.control, Control::Hold);
        assert!(tap.wrap);

        let note = StepConfig::note();
        assert_eq!(note.track_filter, TrackFilter::Both);
        assert_eq!(note.value_policy, ValuePolicy::Retain);
    }

    #[test]
    fn test_apply_collects_names() {
        let config = StepConfig::apply(["bunnies", "swords"]).named("total");
        assert_eq!(
            config.input,
            InputMode::Named(vec!["bunnies".to_string(), "swords".to_string()])
        );
        assert_eq!(config.name.as_deref(), Some("total"));
    }

    #[test]
    fn test_control_merge() {
        assert_eq!(Control::Attempt.merge(Tag::Ok, Tag::Error), Tag::Error);
        assert_eq!(Control::Attempt.merge(Tag::Error, Tag::Ok), Tag::Error);
        assert_eq!(Control::Attempt.merge(Tag::Ok, Tag::Ok), Tag::Ok);
        assert_eq!(Control::Hold.merge(Tag::Ok, Tag::Error), Tag::Ok);
        assert_eq!(Control::Hold.merge(Tag::Error, Tag::Ok), Tag::Error);
        assert_eq!(Control::Recover.merge(Tag::Error, Tag::Ok), Tag::Ok);
        assert_eq!(Control::Recover.merge(Tag::Ok, Tag::Error), Tag::Error);
    }

    #[test]
    fn test_validate_rejects_inert_recover() {
        let err = StepConfig::recover()
            .with_filter(TrackFilter::Ok)
            .named("fix")
            .validate()
            .unwrap_err();
        assert_eq!(err.code, ConfigError::RECOVER_OK_FILTER);
        assert_eq!(err.step.as_deref(), Some("fix"));
    }

    #[test]
    fn test_validate_rejects_empty_names_and_blank_name() {
        let empty: [&str; 0] = [];
        let err = StepConfig::apply(empty).validate().unwrap_err();
        assert_eq!(err.code, ConfigError::EMPTY_NAMES);

        let err = StepConfig::run().named(" ").validate().unwrap_err();
        assert_eq!(err.code, ConfigError::BLANK_NAME);
    }

    #[test]
    fn test_validate_accepts_presets() {
        for config in [
            StepConfig::run(),
            StepConfig::recover(),
            StepConfig::check(),
            StepConfig::tap(TrackFilter::Ok),
            StepConfig::note(),
            StepConfig::spread(),
            StepConfig::apply(["a"]),
        ] {
            assert!(config.validate().is_ok(), "{config:?}");
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name(None).is_ok());
        assert!(validate_name(Some("fact")).is_ok());

        let err = validate_name(Some("\t")).unwrap_err();
        assert_eq!(err.code, ConfigError::BLANK_NAME);
        assert_eq!(err.step.as_deref(), Some("\t"));
    }

    #[test]
    fn test_empty_json_is_run() {
        let config: StepConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StepConfig::run());
        assert_eq!(config.track_filter, TrackFilter::Ok);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = StepConfig::apply(["a", "b"]).named("sum").trapping();
        let json = serde_json::to_string(&config).unwrap();
        let back: StepConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
