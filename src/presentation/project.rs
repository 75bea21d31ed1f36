//! Local project wiring for the `deploy` command
//!
//! Turns a descriptor on disk plus command-line files into the primary
//! artifact, its attachments and dependencies.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use crate::application::{DeployProject, DescriptorFlattener, ResolutionContext};
use crate::domain::entities::{ArtifactHandle, DescriptorDocument};
use crate::domain::ports::{ArtifactResolver, DescriptorStore};
use crate::domain::services::publishable_dependencies;
use crate::domain::value_objects::Coordinate;
use crate::error::{DeployResult, DescriptorError, ResolutionError};
use crate::infrastructure::PinnedFilesResolver;

/// `TYPE[:CLASSIFIER]=PATH` attachment argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentSpec {
    pub artifact_type: String,
    pub classifier: Option<String>,
    pub file: PathBuf,
}

impl FromStr for AttachmentSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, file) = s
            .split_once('=')
            .ok_or_else(|| format!("expected TYPE[:CLASSIFIER]=PATH, got '{s}'"))?;
        let (artifact_type, classifier) = match kind.split_once(':') {
            Some((t, c)) => (t.trim(), Some(c.trim())),
            None => (kind.trim(), None),
        };
        if artifact_type.is_empty() || file.trim().is_empty() {
            return Err(format!("expected TYPE[:CLASSIFIER]=PATH, got '{s}'"));
        }
        Ok(Self {
            artifact_type: artifact_type.to_string(),
            classifier: classifier.filter(|c| !c.is_empty()).map(str::to_string),
            file: PathBuf::from(file.trim()),
        })
    }
}

/// A project described by a descriptor file on disk
#[derive(Debug, Clone)]
pub struct LocalProject {
    descriptor_file: PathBuf,
    document: DescriptorDocument,
    /// `document` with its ancestors merged in
    effective: DescriptorDocument,
    coordinate: Coordinate,
}

impl LocalProject {
    pub fn load(store: &dyn DescriptorStore, descriptor_file: &Path) -> DeployResult<Self> {
        let document = store.load(descriptor_file)?;
        let coordinate = document.coordinate().ok_or_else(|| DescriptorError::Parse {
            path: descriptor_file.to_path_buf(),
            message: "group, name and version are required (group and version may come from the parent)"
                .to_string(),
        })?;
        Ok(Self {
            descriptor_file: descriptor_file.to_path_buf(),
            effective: document.clone(),
            document,
            coordinate,
        })
    }

    /// Merge the ancestor chain into the effective model. Distribution
    /// targets and managed versions declared by a parent apply from here on.
    pub fn with_ancestors(
        mut self,
        flattener: &DescriptorFlattener,
        context: &ResolutionContext,
    ) -> DeployResult<Self> {
        self.effective = flattener.merge_document(&self.document, context)?;
        Ok(self)
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn document(&self) -> &DescriptorDocument {
        &self.document
    }

    pub fn effective(&self) -> &DescriptorDocument {
        &self.effective
    }

    /// The packaged artifact, with its file when the build produced one
    pub fn primary(&self, file: Option<&Path>) -> ArtifactHandle {
        let handle = ArtifactHandle::new(self.coordinate.clone());
        match file {
            Some(file) => handle.with_file(file),
            None => handle,
        }
    }

    pub fn attachment(&self, spec: &AttachmentSpec) -> ArtifactHandle {
        let coordinate = Coordinate::new(
            self.coordinate.group.clone(),
            self.coordinate.name.clone(),
            self.coordinate.version.clone(),
            spec.artifact_type.clone(),
        );
        let coordinate = match &spec.classifier {
            Some(classifier) => coordinate.with_classifier(classifier.clone()),
            None => coordinate,
        };
        ArtifactHandle::new(coordinate).with_file(&spec.file)
    }

    /// Non-test dependencies of the effective model, resolved
    pub fn dependencies(
        &self,
        resolver: &dyn ArtifactResolver,
        context: &ResolutionContext,
    ) -> DeployResult<Vec<ArtifactHandle>> {
        let managed = self.effective.managed_versions();
        publishable_dependencies(&self.effective.dependencies)
            .iter()
            .map(|dependency| {
                let version = dependency
                    .version
                    .as_deref()
                    .or_else(|| managed.get(&dependency.group, &dependency.name))
                    .ok_or_else(|| {
                        ResolutionError::unversioned(
                            dependency.coordinate(""),
                            "no version declared or managed",
                        )
                    })?;
                let coordinate = dependency.coordinate(version);
                let file = resolver.resolve(&coordinate, &context.remotes, &context.local)?;
                Ok(ArtifactHandle::new(coordinate).with_file(file))
            })
            .collect()
    }

    /// `inner`, with this project's descriptor served from disk
    pub fn resolver(&self, inner: Arc<dyn ArtifactResolver>) -> PinnedFilesResolver {
        PinnedFilesResolver::new(inner).pin(self.coordinate.descriptor(), &self.descriptor_file)
    }

    pub fn deploy_project(
        &self,
        context: ResolutionContext,
        attachments: Vec<ArtifactHandle>,
    ) -> DeployProject {
        let project = DeployProject::new(context).with_attachments(attachments);
        match self.effective.distribution_target() {
            Some(target) => project.with_distribution(target),
            None => project,
        }
    }
}
