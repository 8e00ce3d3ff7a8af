//! Event sinks: caller-supplied side channels for tap steps.
//!
//! The engine never logs pipeline data on its own behalf. A caller who wants
//! a record of a pipeline's progress hands a sink to
//! [`Track::tap_sink`](crate::core::Track::tap_sink) wherever it should be
//! written to.

mod sink;

#[cfg(test)]
pub use sink::MockEventSink;
pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
