//! Deploy Result
//!
//! What a run published.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{ArtifactHandle, RunState};
use crate::domain::value_objects::{Checksum, Coordinate, RepositoryTarget};

/// One file handed to the publisher
#[derive(Debug, Clone, Serialize)]
pub struct PublishedArtifact {
    pub coordinate: Coordinate,
    pub file: PathBuf,
    pub effective_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
}

/// Result of a deploy run
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    /// Destination, unset for skipped runs
    pub repository: Option<RepositoryTarget>,
    /// Publishes in the order they happened
    pub published: Vec<PublishedArtifact>,
    pub state: RunState,
    pub skipped: bool,
    /// Final state of the run's artifacts (effective versions, release flags)
    #[serde(skip)]
    pub artifacts: Vec<ArtifactHandle>,
}

impl DeployReport {
    pub fn new() -> Self {
        Self {
            repository: None,
            published: Vec::new(),
            state: RunState::Idle,
            skipped: false,
            artifacts: Vec::new(),
        }
    }

    /// No-op success for a skipped run
    pub fn skipped() -> Self {
        Self {
            state: RunState::Done,
            skipped: true,
            ..Self::new()
        }
    }

    pub fn is_success(&self) -> bool {
        self.state == RunState::Done
    }

    pub fn published_count(&self) -> usize {
        self.published.len()
    }

    /// Final handle of a deployed artifact
    pub fn artifact(&self, coordinate: &Coordinate) -> Option<&ArtifactHandle> {
        self.artifacts.iter().find(|a| a.coordinate() == coordinate)
    }

    /// Effective version the last publish of `coordinate` produced
    pub fn effective_version_of(&self, coordinate: &Coordinate) -> Option<&str> {
        self.published
            .iter()
            .rev()
            .find(|p| &p.coordinate == coordinate)
            .map(|p| p.effective_version.as_str())
    }
}

impl Default for DeployReport {
    fn default() -> Self {
        Self::new()
    }
}
