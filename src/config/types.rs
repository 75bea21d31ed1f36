//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{DeployOptions, ResolutionContext};
use crate::domain::value_objects::{LocalCache, RemoteRepository, DEFAULT_LAYOUT};
use crate::infrastructure::fs::default_local_cache;

use super::loader::{self, ConfigError, ConfigWarning};

/// Deploy switches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub skip: bool,

    /// Mark published artifacts as the latest release
    #[serde(default)]
    pub update_release_info: bool,

    #[serde(default)]
    pub flatten_descriptors: bool,

    #[serde(default)]
    pub include_dependencies: bool,

    /// `ID::LAYOUT::URL` override of the destination repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_repository: Option<String>,

    #[serde(default)]
    pub offline: bool,
}

/// A remote repository artifacts are resolved from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub id: String,
    pub url: String,
    #[serde(default = "default_layout")]
    pub layout: String,
}

fn default_layout() -> String {
    DEFAULT_LAYOUT.to_string()
}

/// Local cache and remote repositories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoriesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remote: Vec<RemoteConfig>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub repositories: RepositoriesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (ARTIFACT_DEPLOY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Run switches as deploy options
    pub fn deploy_options(&self) -> DeployOptions {
        let options = DeployOptions::new()
            .with_include_dependencies(self.deploy.include_dependencies)
            .with_flatten_descriptors(self.deploy.flatten_descriptors)
            .with_skip(self.deploy.skip)
            .with_update_release_info(self.deploy.update_release_info)
            .with_offline(self.deploy.offline);
        DeployOptions {
            alt_repository: self.deploy.alt_repository.clone(),
            ..options
        }
    }

    /// Configured local cache, else `~/.artifact-deploy/repository`
    pub fn local_cache(&self) -> LocalCache {
        let root = self
            .repositories
            .local
            .clone()
            .or_else(default_local_cache)
            .unwrap_or_else(|| PathBuf::from(".artifact-deploy").join("repository"));
        LocalCache::new(root)
    }

    pub fn resolution_context(&self) -> ResolutionContext {
        ResolutionContext::new(self.local_cache()).with_remotes(self.remote_repositories())
    }

    pub fn remote_repositories(&self) -> Vec<RemoteRepository> {
        self.repositories
            .remote
            .iter()
            .map(|remote| RemoteRepository::new(remote.id.clone(), remote.url.clone()))
            .collect()
    }
}
