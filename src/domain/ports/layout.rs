//! Repository Layout Port
//!
//! Maps a layout name to a path-naming strategy.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::value_objects::Coordinate;

/// Path-naming strategy of a repository
pub trait LayoutStrategy: Send + Sync {
    fn name(&self) -> &str;

    /// Path of the artifact relative to the repository root
    fn path_of(&self, coordinate: &Coordinate) -> PathBuf;
}

/// Registry of known layouts
pub trait LayoutRegistry: Send + Sync {
    fn lookup(&self, name: &str) -> Option<Arc<dyn LayoutStrategy>>;
}
