//! Mock ports shared by the application-layer tests.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempPath;

use crate::domain::entities::{ArtifactHandle, DescriptorDocument};
use crate::domain::ports::{
    ArtifactPublisher, ArtifactResolver, CoordinatePrompter, DeployEvent, DeployEventSink,
    DescriptorStore, LayoutRegistry, LayoutStrategy,
};
use crate::domain::value_objects::{
    Coordinate, CoordinateField, LocalCache, ManagedVersions, RemoteRepository,
    RepositoryTarget, ScopeFilter, DEFAULT_LAYOUT,
};
use crate::error::{DescriptorError, PromptError, PublishError, ResolutionError};

/// Resolver backed by fixed coordinate -> file tables
#[derive(Default)]
pub struct MockResolver {
    files: Mutex<HashMap<Coordinate, PathBuf>>,
    closures: Mutex<HashMap<Coordinate, Vec<ArtifactHandle>>>,
    resolved: Mutex<Vec<Coordinate>>,
    transitive_calls: Mutex<Vec<(Coordinate, ManagedVersions, ScopeFilter)>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, coordinate: Coordinate, file: impl Into<PathBuf>) {
        self.files.lock().unwrap().insert(coordinate, file.into());
    }

    pub fn add_closure(&self, root: Coordinate, closure: Vec<ArtifactHandle>) {
        self.closures.lock().unwrap().insert(root, closure);
    }

    /// Coordinates passed to `resolve`, in call order
    pub fn resolved(&self) -> Vec<Coordinate> {
        self.resolved.lock().unwrap().clone()
    }

    pub fn transitive_calls(&self) -> Vec<(Coordinate, ManagedVersions, ScopeFilter)> {
        self.transitive_calls.lock().unwrap().clone()
    }
}

impl ArtifactResolver for MockResolver {
    fn resolve(
        &self,
        coordinate: &Coordinate,
        _remotes: &[RemoteRepository],
        _local: &LocalCache,
    ) -> Result<PathBuf, ResolutionError> {
        self.resolved.lock().unwrap().push(coordinate.clone());
        self.files
            .lock()
            .unwrap()
            .get(coordinate)
            .cloned()
            .ok_or_else(|| ResolutionError::new(coordinate.clone(), "not found"))
    }

    fn resolve_transitive(
        &self,
        root: &Coordinate,
        managed: &ManagedVersions,
        _local: &LocalCache,
        _remotes: &[RemoteRepository],
        filter: ScopeFilter,
    ) -> Result<Vec<ArtifactHandle>, ResolutionError> {
        self.transitive_calls
            .lock()
            .unwrap()
            .push((root.clone(), managed.clone(), filter));
        self.closures
            .lock()
            .unwrap()
            .get(root)
            .cloned()
            .ok_or_else(|| ResolutionError::new(root.clone(), "not found"))
    }
}

/// Descriptor store holding documents in memory.
///
/// Temporary files are real (so they can be deleted) but their content is
/// looked up from the in-memory table.
#[derive(Default)]
pub struct MemoryDescriptorStore {
    documents: Mutex<HashMap<PathBuf, DescriptorDocument>>,
}

impl MemoryDescriptorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, document: DescriptorDocument) {
        self.documents.lock().unwrap().insert(path.into(), document);
    }
}

impl DescriptorStore for MemoryDescriptorStore {
    fn load(&self, path: &Path) -> Result<DescriptorDocument, DescriptorError> {
        self.documents
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| DescriptorError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such descriptor"),
            })
    }

    fn write_temporary(&self, descriptor: &DescriptorDocument) -> std::io::Result<TempPath> {
        let path = tempfile::NamedTempFile::new()?.into_temp_path();
        self.insert(path.to_path_buf(), descriptor.clone());
        Ok(path)
    }

    fn render(&self, descriptor: &DescriptorDocument) -> std::io::Result<String> {
        toml::to_string(descriptor)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// One call to the publisher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishCall {
    pub file: PathBuf,
    pub coordinate: Coordinate,
    pub effective_version: String,
    pub release: bool,
    pub repository: String,
    pub has_descriptor_metadata: bool,
}

/// Publisher that records calls and can be told to assign versions or fail
#[derive(Default)]
pub struct RecordingPublisher {
    calls: Mutex<Vec<PublishCall>>,
    assigned_version: Mutex<Option<String>>,
    fail_on: Mutex<Option<Coordinate>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every publish returns `version` as the effective version
    pub fn assigning(version: &str) -> Self {
        let publisher = Self::default();
        *publisher.assigned_version.lock().unwrap() = Some(version.to_string());
        publisher
    }

    pub fn failing_on(coordinate: Coordinate) -> Self {
        let publisher = Self::default();
        *publisher.fail_on.lock().unwrap() = Some(coordinate);
        publisher
    }

    pub fn calls(&self) -> Vec<PublishCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ArtifactPublisher for RecordingPublisher {
    fn publish(
        &self,
        file: &Path,
        artifact: &ArtifactHandle,
        repository: &RepositoryTarget,
        _local: &LocalCache,
    ) -> Result<String, PublishError> {
        if self.fail_on.lock().unwrap().as_ref() == Some(artifact.coordinate()) {
            return Err(PublishError::new(
                artifact.coordinate().clone(),
                repository.id.clone(),
                "connection reset",
            ));
        }

        let effective = self
            .assigned_version
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| artifact.effective_version().to_string());

        self.calls.lock().unwrap().push(PublishCall {
            file: file.to_path_buf(),
            coordinate: artifact.coordinate().clone(),
            effective_version: artifact.effective_version().to_string(),
            release: artifact.is_release(),
            repository: repository.id.clone(),
            has_descriptor_metadata: artifact
                .metadata(crate::domain::entities::MetadataKind::ProjectDescriptor)
                .is_some(),
        });
        Ok(effective)
    }
}

/// Prompter answering from a script, recording what it was asked
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<(CoordinateField, Option<String>)>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<(CoordinateField, Option<String>)> {
        self.asked.lock().unwrap().clone()
    }
}

impl CoordinatePrompter for ScriptedPrompter {
    fn prompt(&self, field: CoordinateField, current: Option<&str>) -> Result<String, PromptError> {
        self.asked
            .lock()
            .unwrap()
            .push((field, current.map(str::to_string)));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PromptError {
                field,
                message: "input closed".to_string(),
            })
    }
}

/// Sink collecting every event
#[derive(Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<DeployEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DeployEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DeployEventSink for RecordingSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Layout naming files after the coordinate's display form
pub struct FlatLayout;

impl LayoutStrategy for FlatLayout {
    fn name(&self) -> &str {
        DEFAULT_LAYOUT
    }

    fn path_of(&self, coordinate: &Coordinate) -> PathBuf {
        PathBuf::from(coordinate.to_string())
    }
}

/// Registry knowing only the default layout
pub struct DefaultLayoutRegistry;

impl LayoutRegistry for DefaultLayoutRegistry {
    fn lookup(&self, name: &str) -> Option<Arc<dyn LayoutStrategy>> {
        (name == DEFAULT_LAYOUT).then(|| Arc::new(FlatLayout) as Arc<dyn LayoutStrategy>)
    }
}
