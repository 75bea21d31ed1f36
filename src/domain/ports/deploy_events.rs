//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::{Coordinate, RepositoryTarget};

/// Event emitted during a deployment run
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Run skipped by configuration
    Skipped,

    /// Destination repository chosen
    RepositoryResolved { repository: RepositoryTarget },

    /// Candidate artifacts materialized
    ArtifactSetBuilt {
        artifact_count: usize,
        attachment_count: usize,
    },

    /// Publication of one artifact started
    ArtifactStarted { index: usize, coordinate: Coordinate },

    /// A standalone descriptor was produced
    DescriptorFlattened {
        coordinate: Coordinate,
        path: PathBuf,
    },

    /// No primary file; the descriptor is published alone
    DescriptorOnlyFallback { coordinate: Coordinate },

    /// A file was published
    Published {
        coordinate: Coordinate,
        file: PathBuf,
        effective_version: String,
    },

    /// Run finished successfully
    Completed { published_count: usize },

    /// Run failed
    Failed { error: String },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants detailed events (e.g., per-artifact)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
