//! Deployment run entity
//!
//! One run owns its destination, the artifacts to publish and their
//! attachments. Nothing here survives the run.

use serde::Serialize;

use crate::domain::value_objects::RepositoryTarget;

use super::{ArtifactHandle, ArtifactSet};

/// Lifecycle of a run. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    RepositoryResolved,
    ArtifactSetBuilt,
    Publishing,
    Done,
    Failed,
}

impl RunState {
    pub fn can_transition_to(self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, next),
            (Idle, RepositoryResolved)
                | (RepositoryResolved, ArtifactSetBuilt)
                | (ArtifactSetBuilt, Publishing)
                | (Publishing, Done)
                | (Idle, Done)
                | (Idle, Failed)
                | (RepositoryResolved, Failed)
                | (ArtifactSetBuilt, Failed)
                | (Publishing, Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::RepositoryResolved => "repository-resolved",
            RunState::ArtifactSetBuilt => "artifact-set-built",
            RunState::Publishing => "publishing",
            RunState::Done => "done",
            RunState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Artifacts to publish in one invocation
#[derive(Debug, Clone)]
pub struct DeploymentRun {
    repository: RepositoryTarget,
    artifacts: Vec<ArtifactHandle>,
    attachments: Vec<ArtifactHandle>,
    flatten_descriptors: bool,
}

impl DeploymentRun {
    pub fn new(
        repository: RepositoryTarget,
        artifacts: ArtifactSet,
        attachments: Vec<ArtifactHandle>,
        flatten_descriptors: bool,
    ) -> Self {
        Self {
            repository,
            artifacts: artifacts.into_handles(),
            attachments,
            flatten_descriptors,
        }
    }

    pub fn repository(&self) -> &RepositoryTarget {
        &self.repository
    }

    pub fn artifacts(&self) -> &[ArtifactHandle] {
        &self.artifacts
    }

    /// Destination, mutable artifacts and attachments, borrowed together
    pub fn parts_mut(&mut self) -> (&RepositoryTarget, &mut [ArtifactHandle], &[ArtifactHandle]) {
        (&self.repository, &mut self.artifacts, &self.attachments)
    }

    pub fn attachments(&self) -> &[ArtifactHandle] {
        &self.attachments
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    pub fn flatten_descriptors(&self) -> bool {
        self.flatten_descriptors
    }
}
