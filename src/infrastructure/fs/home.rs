//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` ignores `HOME`/`USERPROFILE`, so tests set
//! `ARTIFACT_DEPLOY_TEST_HOME` instead. Every functional path (user config,
//! default local cache, credentials directory) goes through `home_dir()`.

use std::path::PathBuf;

/// Environment variable overriding the home directory in tests.
pub const TEST_HOME_VAR: &str = "ARTIFACT_DEPLOY_TEST_HOME";

/// Home directory, honouring `ARTIFACT_DEPLOY_TEST_HOME` first.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var(TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// `~/.ssh`, created for secure-shell destinations
pub fn ssh_dir() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".ssh"))
}

/// `~/.artifact-deploy/repository`, the default local cache
pub fn default_local_cache() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".artifact-deploy").join("repository"))
}

/// `~/.config/artifact-deploy/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|home| {
        home.join(".config")
            .join("artifact-deploy")
            .join("config.toml")
    })
}
