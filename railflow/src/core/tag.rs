//! Track tags and eligibility filters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which track a result ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// The success track.
    #[default]
    Ok,
    /// The failure track.
    Error,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl Tag {
    /// Returns true for the success track.
    #[must_use]
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns true for the failure track.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Which tags a step is eligible to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackFilter {
    /// Runs only while the track is Ok.
    #[default]
    Ok,
    /// Runs only while the track is Error.
    Error,
    /// Always runs.
    Both,
}

impl fmt::Display for TrackFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Error => write!(f, "error"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl TrackFilter {
    /// Returns true if a track currently tagged `tag` passes this filter.
    #[must_use]
    pub fn matches(self, tag: Tag) -> bool {
        match self {
            Self::Both => true,
            Self::Ok => tag == Tag::Ok,
            Self::Error => tag == Tag::Error,
        }
    }
}
