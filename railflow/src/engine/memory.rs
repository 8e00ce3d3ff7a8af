//! Named memory: writing facts into history and reading them back.

use super::resolve;
use crate::core::{StepResult, Tag, Track, TrackFilter};
use crate::errors::RailflowError;
use crate::step::{validate_name, Reply, StepConfig};
use indexmap::IndexMap;
use serde_json::{json, Value};
use tracing::debug;

/// Marker error code for a recalled name with no history entry.
pub const MEMORY_NOT_FOUND: &str = "memory_not_found";

/// Marker error code for spreading a value that is not a list.
pub const NON_LIST_VALUE: &str = "cannot_apply_non_list_value";

/// The sentinel value standing in for a name that was never memorized.
#[must_use]
pub fn not_found_marker(name: &str) -> Value {
    json!({ "error": MEMORY_NOT_FOUND, "name": name })
}

/// The sentinel value for a spread over a non-list value.
#[must_use]
pub fn non_list_marker(value: &Value) -> Value {
    json!({ "error": NON_LIST_VALUE, "value": value })
}

impl Track {
    /// Stores `value` under `name` without running anything.
    ///
    /// The entry carries the current tag. The track's tag and carried value
    /// are unchanged; the fact is only visible through recall.
    ///
    /// # Errors
    ///
    /// Returns [`RailflowError::InvalidConfig`] if `name` is blank.
    pub fn memorize(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, RailflowError> {
        let name = name.into();
        validate_name(Some(&name))?;
        debug!(name = %name, tag = %self.tag(), "Memorized value");
        let entry = StepResult::new(self.tag(), value.into()).with_name(Some(name));
        Ok(self.record(entry))
    }

    /// Latest non-skipped result with the given name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&StepResult> {
        self.history().iter().rev().find(|result| result.answers(name))
    }

    /// Values for `names`, in order. Missing names yield [`not_found_marker`].
    #[must_use]
    pub fn recall<S: AsRef<str>>(&self, names: &[S]) -> Vec<Value> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.lookup(name)
                    .map_or_else(|| not_found_marker(name), |result| result.value.clone())
            })
            .collect()
    }

    /// Replaces the carried value with the list of recalled values, as an
    /// Ok-track step named `as_name`.
    ///
    /// If any name is missing the track moves to Error carrying the
    /// [`not_found_marker`] of the first missing name. Follow with
    /// [`Track::spread`] to apply a function to the gathered values.
    ///
    /// # Errors
    ///
    /// Returns [`RailflowError::InvalidConfig`] if `names` is empty.
    pub fn gather<I, S>(self, names: I, as_name: Option<&str>) -> Result<Self, RailflowError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = StepConfig::apply(names);
        config.name = as_name.map(ToString::to_string);
        resolve(self, &config, |input| Ok(Reply::ok(input.into_value())))
    }

    /// Projects history into `name -> value`, keeping entries whose tag
    /// passes `filter`. Skipped entries are ignored; the last write per name
    /// wins and keys keep the order of their first appearance.
    #[must_use]
    pub fn to_named_map(&self, filter: TrackFilter) -> IndexMap<String, Value> {
        self.to_named_results(filter)
            .into_iter()
            .map(|(name, (_, value))| (name, value))
            .collect()
    }

    /// Like [`Track::to_named_map`] but keeps each entry's tag.
    #[must_use]
    pub fn to_named_results(&self, filter: TrackFilter) -> IndexMap<String, (Tag, Value)> {
        let mut map = IndexMap::new();
        for result in self.history() {
            if result.skip || !filter.matches(result.tag) {
                continue;
            }
            if let Some(ref name) = result.name {
                map.insert(name.clone(), (result.tag, result.value.clone()));
            }
        }
        map
    }

    /// Terminal report: the named map in place of the single current pair.
    #[must_use]
    pub fn report(&self, filter: TrackFilter) -> IndexMap<String, Value> {
        self.to_named_map(filter)
    }
}
