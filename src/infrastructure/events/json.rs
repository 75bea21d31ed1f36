//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use serde_json::{json, Value};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
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

    fn write_event(&self, event: Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn to_json(event: DeployEvent) -> Value {
    match event {
        DeployEvent::Skipped => json!({ "event": "skipped" }),

        DeployEvent::RepositoryResolved { repository } => json!({
            "event": "repository",
            "id": repository.id,
            "layout": repository.layout,
            "url": repository.url,
        }),

        DeployEvent::ArtifactSetBuilt {
            artifact_count,
            attachment_count,
        } => json!({
            "event": "artifact_set",
            "artifacts": artifact_count,
            "attachments": attachment_count,
        }),

        DeployEvent::ArtifactStarted { index, coordinate } => json!({
            "event": "item_start",
            "index": index,
            "coordinate": coordinate.to_string(),
        }),

        DeployEvent::DescriptorFlattened { coordinate, path } => json!({
            "event": "flattened",
            "coordinate": coordinate.to_string(),
            "path": path.display().to_string(),
        }),

        DeployEvent::DescriptorOnlyFallback { coordinate } => json!({
            "event": "descriptor_only",
            "coordinate": coordinate.to_string(),
        }),

        DeployEvent::Published {
            coordinate,
            file,
            effective_version,
        } => json!({
            "event": "published",
            "coordinate": coordinate.to_string(),
            "file": file.display().to_string(),
            "effective_version": effective_version,
        }),

        DeployEvent::Completed { published_count } => json!({
            "event": "complete",
            "status": "success",
            "published": published_count,
        }),

        DeployEvent::Failed { error } => json!({
            "event": "complete",
            "status": "failed",
            "error": error,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let mut value = to_json(event);
        if let Some(object) = value.as_object_mut() {
            object.insert("command".to_string(), json!("deploy"));
        }
        self.write_event(value);
    }
}
