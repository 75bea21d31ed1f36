//! Repository value objects - deployment destination, remote sources and
//! the local resolution cache.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Separator between the fields of an `ID::LAYOUT::URL` override.
const OVERRIDE_SEPARATOR: &str = "::";

/// Layout used when a repository does not declare one.
pub const DEFAULT_LAYOUT: &str = "default";

/// URL schemes that go through a secure-shell transport.
const SECURE_SHELL_SCHEMES: &[&str] = &["scp", "sftp", "ssh"];

/// Destination repository of a deployment run. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryTarget {
    pub id: String,
    #[serde(default = "default_layout")]
    pub layout: String,
    pub url: String,
}

fn default_layout() -> String {
    DEFAULT_LAYOUT.to_string()
}

impl RepositoryTarget {
    pub fn new(id: impl Into<String>, layout: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layout: layout.into(),
            url: url.into(),
        }
    }

    /// Parse an `ID::LAYOUT::URL` override.
    ///
    /// Exactly two `::` separators are accepted and every field must be
    /// non-empty after trimming. The layout name is not validated here.
    pub fn parse_override(spec: &str) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidRepositorySyntax {
            spec: spec.to_string(),
        };

        let fields: Vec<&str> = spec.split(OVERRIDE_SEPARATOR).map(str::trim).collect();
        match fields.as_slice() {
            [id, layout, url] if !id.is_empty() && !layout.is_empty() && !url.is_empty() => {
                Ok(Self::new(*id, *layout, *url))
            }
            _ => Err(invalid()),
        }
    }

    /// URL scheme, lowercased (`https`, `scp`, `file`, ...)
    pub fn scheme(&self) -> Option<String> {
        self.url
            .split_once(':')
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .filter(|scheme| !scheme.is_empty())
    }

    pub fn uses_secure_shell(&self) -> bool {
        self.scheme()
            .is_some_and(|scheme| SECURE_SHELL_SCHEMES.contains(&scheme.as_str()))
    }
}

impl std::fmt::Display for RepositoryTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.id, self.url, self.layout)
    }
}

/// Remote repository consulted during resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub id: String,
    pub url: String,
    #[serde(default = "default_layout")]
    pub layout: String,
}

impl RemoteRepository {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            layout: default_layout(),
        }
    }
}

/// Local resolution cache shared by concurrent runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalCache {
    root: PathBuf,
}

impl LocalCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
