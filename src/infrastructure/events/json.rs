//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for scripts and CI.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of an event
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            game_dir,
            mode,
            entry_count,
        } => serde_json::json!({
            "event": "start",
            "game_dir": game_dir.display().to_string(),
            "mode": mode.to_string(),
            "entry_count": entry_count,
        }),

        DeployEvent::ScaffoldEnsured { path } => serde_json::json!({
            "event": "scaffold",
            "path": path.display().to_string(),
        }),

        DeployEvent::GroupSkipped { group } => serde_json::json!({
            "event": "group_skipped",
            "group": group,
        }),

        DeployEvent::EntryDeployed {
            index,
            group,
            kind,
            source,
            destination,
            replaced,
        } => serde_json::json!({
            "event": "item_deployed",
            "index": index,
            "group": group,
            "kind": kind.to_string(),
            "source": source.display().to_string(),
            "destination": destination.display().to_string(),
            "replaced": replaced,
        }),

        DeployEvent::DanglingSource { source } => serde_json::json!({
            "event": "warning",
            "kind": "dangling_source",
            "source": source.display().to_string(),
        }),

        DeployEvent::Completed {
            deployed_count,
            replaced_count,
            skipped_groups,
        } => serde_json::json!({
            "event": "complete",
            "status": "success",
            "deployed": deployed_count,
            "replaced": replaced_count,
            "skipped_groups": skipped_groups,
        }),

        DeployEvent::Failed {
            message,
            validation,
        } => serde_json::json!({
            "event": "error",
            "status": "failure",
            "kind": if *validation { "validation" } else { "deploy" },
            "message": message,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}
