//! Artifact handle entity
//!
//! A coordinate plus everything resolution and deployment learn about it:
//! the local file, the effective version assigned by a repository, the
//! release flag and attached metadata documents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Coordinate;

/// Kinds of metadata that can travel with an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetadataKind {
    /// Links the artifact to the descriptor that describes it
    ProjectDescriptor,
}

/// A metadata document attached to an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactMetadata {
    pub kind: MetadataKind,
    pub descriptor: Coordinate,
    pub file: PathBuf,
}

impl ArtifactMetadata {
    /// Build-metadata record linking `artifact` to its descriptor file
    pub fn project_descriptor(artifact: &Coordinate, file: impl Into<PathBuf>) -> Self {
        Self {
            kind: MetadataKind::ProjectDescriptor,
            descriptor: artifact.descriptor(),
            file: file.into(),
        }
    }
}

/// A resolved (or to-be-resolved) artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHandle {
    coordinate: Coordinate,
    file: Option<PathBuf>,
    base_version: String,
    effective_version: String,
    release: bool,
    metadata: BTreeMap<MetadataKind, ArtifactMetadata>,
}

impl ArtifactHandle {
    pub fn new(coordinate: Coordinate) -> Self {
        let version = coordinate.version.clone();
        Self {
            coordinate,
            file: None,
            base_version: version.clone(),
            effective_version: version,
            release: false,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn set_file(&mut self, file: impl Into<PathBuf>) {
        self.file = Some(file.into());
    }

    /// The local file, only if it exists and is a regular file
    pub fn publishable_file(&self) -> Option<&Path> {
        self.file().filter(|path| path.is_file())
    }

    /// Version the handle was requested under
    pub fn base_version(&self) -> &str {
        &self.base_version
    }

    /// Version actually assigned by the repository
    pub fn effective_version(&self) -> &str {
        &self.effective_version
    }

    pub fn set_effective_version(&mut self, version: impl Into<String>) {
        self.effective_version = version.into();
    }

    pub fn is_release(&self) -> bool {
        self.release
    }

    pub fn set_release(&mut self, release: bool) {
        self.release = release;
    }

    pub fn add_metadata(&mut self, metadata: ArtifactMetadata) {
        self.metadata.insert(metadata.kind, metadata);
    }

    pub fn metadata(&self, kind: MetadataKind) -> Option<&ArtifactMetadata> {
        self.metadata.get(&kind)
    }

    pub fn metadata_entries(&self) -> impl Iterator<Item = &ArtifactMetadata> {
        self.metadata.values()
    }

    pub fn is_descriptor(&self) -> bool {
        self.coordinate.is_descriptor()
    }

    /// True when `other` is a secondary output of the same project build
    pub fn shares_build_with(&self, other: &ArtifactHandle) -> bool {
        self.coordinate.group == other.coordinate.group
            && self.coordinate.name == other.coordinate.name
            && self.base_version == other.base_version
    }
}
