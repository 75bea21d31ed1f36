//! Artifact Publisher Port
//!
//! The low-level transport that copies a local file to a repository.

use std::path::Path;

use crate::domain::entities::ArtifactHandle;
use crate::domain::value_objects::{LocalCache, RepositoryTarget};
use crate::error::PublishError;

pub trait ArtifactPublisher: Send + Sync {
    /// Publish `file` as `artifact` (plus its attached metadata).
    ///
    /// Returns the effective version the repository assigned, which may
    /// differ from the requested one for snapshot-style versions.
    fn publish(
        &self,
        file: &Path,
        artifact: &ArtifactHandle,
        repository: &RepositoryTarget,
        local: &LocalCache,
    ) -> Result<String, PublishError>;
}
