//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ARTIFACT_DEPLOY_*)
//! 3. Project config (deploy.toml)
//! 4. User config (~/.config/artifact-deploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigError, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, DeployConfig, RemoteConfig, RepositoriesConfig};
