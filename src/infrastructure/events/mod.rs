//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for scripts and CI
//! - Human-readable output lives in `presentation::output`

mod json;

pub use json::{event_to_json, JsonEventSink};
