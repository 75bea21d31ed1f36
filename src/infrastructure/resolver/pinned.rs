//! Pinned-file resolver
//!
//! Serves a handful of coordinates from explicit files (the project being
//! deployed) and delegates everything else.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::ArtifactHandle;
use crate::domain::ports::ArtifactResolver;
use crate::domain::value_objects::{
    Coordinate, LocalCache, ManagedVersions, RemoteRepository, ScopeFilter,
};
use crate::error::ResolutionError;

pub struct PinnedFilesResolver {
    pinned: HashMap<Coordinate, PathBuf>,
    inner: Arc<dyn ArtifactResolver>,
}

impl PinnedFilesResolver {
    pub fn new(inner: Arc<dyn ArtifactResolver>) -> Self {
        Self {
            pinned: HashMap::new(),
            inner,
        }
    }

    pub fn pin(mut self, coordinate: Coordinate, file: impl Into<PathBuf>) -> Self {
        self.pinned.insert(coordinate, file.into());
        self
    }
}

impl ArtifactResolver for PinnedFilesResolver {
    fn resolve(
        &self,
        coordinate: &Coordinate,
        remotes: &[RemoteRepository],
        local: &LocalCache,
    ) -> Result<PathBuf, ResolutionError> {
        if let Some(file) = self.pinned.get(coordinate) {
            debug!(coordinate = %coordinate, path = %file.display(), "resolved pinned file");
            return Ok(file.clone());
        }
        self.inner.resolve(coordinate, remotes, local)
    }

    fn resolve_transitive(
        &self,
        root: &Coordinate,
        managed: &ManagedVersions,
        local: &LocalCache,
        remotes: &[RemoteRepository],
        filter: ScopeFilter,
    ) -> Result<Vec<ArtifactHandle>, ResolutionError> {
        self.inner
            .resolve_transitive(root, managed, local, remotes, filter)
    }
}
