//! Test assertions for tracks.

use crate::core::{Tag, Track};
use serde_json::Value;

/// Asserts that the track is on the Ok side.
pub fn assert_on_ok_track(track: &Track) {
    assert!(
        track.is_ok(),
        "Expected Ok track, got Error with value: {}",
        track.value()
    );
}

/// Asserts that the track is on the Error side.
pub fn assert_on_error_track(track: &Track) {
    assert!(
        track.is_error(),
        "Expected Error track, got Ok with value: {}",
        track.value()
    );
}

/// Asserts the track's current tag and value.
pub fn assert_terminal(track: &Track, tag: Tag, value: &Value) {
    assert_eq!(
        (track.tag(), track.value()),
        (tag, value),
        "Unexpected terminal state"
    );
}

/// Asserts how many step invocations the track has recorded.
pub fn assert_history_len(track: &Track, expected: usize) {
    assert_eq!(
        track.len(),
        expected,
        "Expected {} history entries, got {}",
        expected,
        track.len()
    );
}

/// Asserts that the history entry at `index` came from a skipped step.
pub fn assert_skipped(track: &Track, index: usize) {
    let entry = track
        .history()
        .get(index)
        .unwrap_or_else(|| panic!("No history entry at index {index}"));
    assert!(entry.skip, "Expected entry {index} to be skipped: {entry:?}");
}
