//! Artifact Resolver Port
//!
//! Fetches described artifacts into the local cache. The dependency-graph
//! algorithm behind `resolve_transitive` belongs to the implementation.

use std::path::PathBuf;

use crate::domain::entities::ArtifactHandle;
use crate::domain::value_objects::{
    Coordinate, LocalCache, ManagedVersions, RemoteRepository, ScopeFilter,
};
use crate::error::ResolutionError;

/// Trait for artifact resolution
///
/// Implementations must be safe to share between concurrent runs; the local
/// cache is the only state they touch.
pub trait ArtifactResolver: Send + Sync {
    /// Resolve a single artifact, returning its file in the local cache
    fn resolve(
        &self,
        coordinate: &Coordinate,
        remotes: &[RemoteRepository],
        local: &LocalCache,
    ) -> Result<PathBuf, ResolutionError>;

    /// Resolve `root` and everything it transitively depends on.
    ///
    /// The returned handles include `root` itself and carry resolved files.
    fn resolve_transitive(
        &self,
        root: &Coordinate,
        managed: &ManagedVersions,
        local: &LocalCache,
        remotes: &[RemoteRepository],
        filter: ScopeFilter,
    ) -> Result<Vec<ArtifactHandle>, ResolutionError>;
}
