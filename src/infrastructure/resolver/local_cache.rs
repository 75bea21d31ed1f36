//! Local Cache Resolver
//!
//! Resolves coordinates against the local cache only. Remote repositories
//! are reported but never contacted.
//!
//! Transitive resolution walks cached descriptors breadth-first. The first
//! occurrence of a `group:name:type[:classifier]` wins, so nearer
//! declarations beat deeper ones.

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{ArtifactHandle, DescriptorDocument, Exclusion};
use crate::domain::ports::{ArtifactResolver, DescriptorStore, LayoutStrategy};
use crate::domain::value_objects::{
    Coordinate, LocalCache, ManagedVersions, RemoteRepository, ScopeFilter,
};
use crate::error::{DescriptorError, ResolutionError};

pub struct LocalCacheResolver {
    layout: Arc<dyn LayoutStrategy>,
    store: Arc<dyn DescriptorStore>,
}

/// One node waiting to be expanded
struct Pending {
    coordinate: Coordinate,
    depth: usize,
    exclusions: Vec<Exclusion>,
}

impl LocalCacheResolver {
    pub fn new(layout: Arc<dyn LayoutStrategy>, store: Arc<dyn DescriptorStore>) -> Self {
        Self { layout, store }
    }

    fn cached_path(&self, coordinate: &Coordinate, local: &LocalCache) -> PathBuf {
        local.root().join(self.layout.path_of(coordinate))
    }

    /// Cached descriptor of `coordinate`; absent descriptors mean "no dependencies"
    fn dependencies_of(
        &self,
        coordinate: &Coordinate,
        local: &LocalCache,
    ) -> Result<Option<DescriptorDocument>, ResolutionError> {
        let path = self.cached_path(&coordinate.descriptor(), local);
        match self.store.load(&path) {
            Ok(document) => Ok(Some(document)),
            Err(DescriptorError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                warn!(coordinate = %coordinate, "no cached descriptor; assuming no dependencies");
                Ok(None)
            }
            Err(e) => Err(ResolutionError::new(coordinate.clone(), e.to_string())),
        }
    }
}

impl ArtifactResolver for LocalCacheResolver {
    fn resolve(
        &self,
        coordinate: &Coordinate,
        remotes: &[RemoteRepository],
        local: &LocalCache,
    ) -> Result<PathBuf, ResolutionError> {
        let path = self.cached_path(coordinate, local);
        if path.is_file() {
            debug!(coordinate = %coordinate, path = %path.display(), "resolved from local cache");
            return Ok(path);
        }

        let message = if remotes.is_empty() {
            format!("not found in local cache {}", local.root().display())
        } else {
            let ids: Vec<&str> = remotes.iter().map(|r| r.id.as_str()).collect();
            format!(
                "not found in local cache {} (remote repositories [{}] are not contacted)",
                local.root().display(),
                ids.join(", ")
            )
        };
        Err(ResolutionError::new(coordinate.clone(), message))
    }

    fn resolve_transitive(
        &self,
        root: &Coordinate,
        managed: &ManagedVersions,
        local: &LocalCache,
        remotes: &[RemoteRepository],
        filter: ScopeFilter,
    ) -> Result<Vec<ArtifactHandle>, ResolutionError> {
        let root_file = self.resolve(root, remotes, local)?;
        let mut closure = vec![ArtifactHandle::new(root.clone()).with_file(root_file)];
        let mut seen: HashSet<String> = HashSet::from([root.management_key()]);
        let mut queue = VecDeque::from([Pending {
            coordinate: root.clone(),
            depth: 0,
            exclusions: Vec::new(),
        }]);
        // Caller's management plus the root descriptor's, applied to the whole tree
        let mut inherited = managed.clone();

        while let Some(node) = queue.pop_front() {
            let Some(document) = self.dependencies_of(&node.coordinate, local)? else {
                continue;
            };

            let mut versions = inherited.clone();
            versions.extend_missing(&document.managed_versions());
            if node.depth == 0 {
                inherited = versions.clone();
            }

            for dependency in &document.dependencies {
                if !filter.includes(dependency.scope.as_deref()) {
                    continue;
                }
                if dependency.optional && node.depth > 0 {
                    continue;
                }
                if node
                    .exclusions
                    .iter()
                    .any(|e| e.group == dependency.group && e.name == dependency.name)
                {
                    debug!(dependency = %dependency.name, "excluded");
                    continue;
                }

                // Below the root, managed versions override declared ones
                let version = versions
                    .get(&dependency.group, &dependency.name)
                    .filter(|_| node.depth > 0 || dependency.version.is_none())
                    .or(dependency.version.as_deref())
                    .ok_or_else(|| {
                        ResolutionError::unversioned(
                            dependency.coordinate(""),
                            format!("no version declared or managed (required by {})", node.coordinate),
                        )
                    })?
                    .to_string();
                let coordinate = dependency.coordinate(version);

                if !seen.insert(coordinate.management_key()) {
                    continue;
                }

                let file = self.resolve(&coordinate, remotes, local)?;
                closure.push(ArtifactHandle::new(coordinate.clone()).with_file(file));

                let mut exclusions = node.exclusions.clone();
                exclusions.extend(dependency.exclusions.iter().cloned());
                queue.push_back(Pending {
                    coordinate,
                    depth: node.depth + 1,
                    exclusions,
                });
            }
        }

        debug!(root = %root, count = closure.len(), "transitive closure resolved");
        Ok(closure)
    }
}
