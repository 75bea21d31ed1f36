use tracing::debug;

use crate::domain::entities::{ArtifactHandle, ArtifactSet};
use crate::error::DeployResult;

use super::ArtifactSetBuilder;

/// The project's own primary artifact, optionally with its dependencies
#[derive(Debug, Clone)]
pub struct ProjectArtifacts {
    primary: ArtifactHandle,
    dependencies: Vec<ArtifactHandle>,
    include_dependencies: bool,
}

impl ProjectArtifacts {
    pub fn new(primary: ArtifactHandle) -> Self {
        Self {
            primary,
            dependencies: Vec::new(),
            include_dependencies: false,
        }
    }

    /// Dependencies the build already resolved
    pub fn with_dependencies(mut self, dependencies: Vec<ArtifactHandle>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn include_dependencies(mut self, include: bool) -> Self {
        self.include_dependencies = include;
        self
    }
}

impl ArtifactSetBuilder for ProjectArtifacts {
    fn build(&self) -> DeployResult<ArtifactSet> {
        let mut set = ArtifactSet::new();
        set.insert(self.primary.clone());

        if self.include_dependencies {
            for dependency in &self.dependencies {
                if !set.insert(dependency.clone()) {
                    debug!(coordinate = %dependency.coordinate(), "duplicate artifact ignored");
                }
            }
        }

        Ok(set)
    }
}
