//! Dependency scope handling
//!
//! Scopes are kept as declared strings on dependencies; a missing scope is
//! distinct from every named one. These helpers decide which scopes survive
//! transitive resolution and publication.

use std::collections::BTreeMap;

/// The one scope never carried into a published descriptor.
pub const TEST_SCOPE: &str = "test";

/// Filter applied to the closure of a transitive resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeFilter {
    /// compile + runtime (and undeclared) scopes
    #[default]
    Runtime,
    /// compile + provided + system (and undeclared) scopes
    Compile,
}

impl ScopeFilter {
    pub fn includes(&self, scope: Option<&str>) -> bool {
        match (self, scope) {
            (_, None) | (_, Some("compile")) => true,
            (ScopeFilter::Runtime, Some("runtime")) => true,
            (ScopeFilter::Compile, Some("provided")) | (ScopeFilter::Compile, Some("system")) => {
                true
            }
            _ => false,
        }
    }
}

/// Versions pinned by a dependency-management block, keyed by `group:name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedVersions {
    versions: BTreeMap<String, String>,
}

impl ManagedVersions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, group: &str, name: &str, version: impl Into<String>) {
        self.versions
            .insert(format!("{}:{}", group, name), version.into());
    }

    pub fn get(&self, group: &str, name: &str) -> Option<&str> {
        self.versions
            .get(&format!("{}:{}", group, name))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Entries already present win over `other`.
    pub fn extend_missing(&mut self, other: &ManagedVersions) {
        for (key, version) in &other.versions {
            self.versions
                .entry(key.clone())
                .or_insert_with(|| version.clone());
        }
    }
}
