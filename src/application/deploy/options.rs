//! Deploy Options
//!
//! Operator-facing run parameters and the project being deployed.

use crate::application::ResolutionContext;
use crate::domain::entities::ArtifactHandle;
use crate::domain::value_objects::RepositoryTarget;

/// Options for the deploy use case
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// `ID::LAYOUT::URL` override of the project's distribution target
    pub alt_repository: Option<String>,
    /// Publish the project's resolved dependencies too
    pub include_dependencies: bool,
    /// Publish flattened descriptors instead of the project's own
    pub flatten_descriptors: bool,
    /// Turn the whole run into a no-op
    pub skip: bool,
    /// Mark published artifacts as releases
    pub update_release_info: bool,
    /// Refuse to deploy (nothing can be reached)
    pub offline: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alt_repository(mut self, spec: impl Into<String>) -> Self {
        self.alt_repository = Some(spec.into());
        self
    }

    pub fn with_include_dependencies(mut self, include: bool) -> Self {
        self.include_dependencies = include;
        self
    }

    pub fn with_flatten_descriptors(mut self, flatten: bool) -> Self {
        self.flatten_descriptors = flatten;
        self
    }

    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_update_release_info(mut self, release: bool) -> Self {
        self.update_release_info = release;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }
}

/// What the deploy run knows about the project it is publishing
#[derive(Debug, Clone)]
pub struct DeployProject {
    /// Distribution target declared by the project, if any
    pub distribution: Option<RepositoryTarget>,
    /// Secondary outputs published after each artifact
    pub attachments: Vec<ArtifactHandle>,
    /// Where descriptors and ancestors are resolved from
    pub context: ResolutionContext,
}

impl DeployProject {
    pub fn new(context: ResolutionContext) -> Self {
        Self {
            distribution: None,
            attachments: Vec::new(),
            context,
        }
    }

    pub fn with_distribution(mut self, target: RepositoryTarget) -> Self {
        self.distribution = Some(target);
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<ArtifactHandle>) -> Self {
        self.attachments = attachments;
        self
    }
}
