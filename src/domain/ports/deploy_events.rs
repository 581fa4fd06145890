//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::{DeployMode, EntryKind};

/// Event emitted during a deploy run
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        game_dir: PathBuf,
        mode: DeployMode,
        entry_count: usize,
    },

    /// Scaffold directory exists
    ScaffoldEnsured { path: PathBuf },

    /// Group skipped (e.g. test scripts with `--skip_test_scripts`)
    GroupSkipped { group: String },

    /// Entry deployed
    EntryDeployed {
        index: usize,
        group: String,
        kind: EntryKind,
        source: PathBuf,
        destination: PathBuf,
        replaced: bool,
    },

    /// Link mode with a source that does not exist yet
    DanglingSource { source: PathBuf },

    /// Deploy completed
    Completed {
        deployed_count: usize,
        replaced_count: usize,
        skipped_groups: usize,
    },

    /// Run aborted; `validation` is true when nothing was written
    Failed { message: String, validation: bool },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - TextEventSink: per-entry lines in the terminal
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
