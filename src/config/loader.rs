//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::infrastructure::fs::user_config_path;

use super::types::Config;

/// Project configuration file, relative to the project root
pub const PROJECT_CONFIG_FILE: &str = "deploy.toml";

const ENV_SKIP: &str = "ARTIFACT_DEPLOY_SKIP";
const ENV_ALT_REPOSITORY: &str = "ARTIFACT_DEPLOY_ALT_REPOSITORY";
const ENV_LOCAL_CACHE: &str = "ARTIFACT_DEPLOY_LOCAL_CACHE";
const ENV_FLATTEN: &str = "ARTIFACT_DEPLOY_FLATTEN";
const ENV_OFFLINE: &str = "ARTIFACT_DEPLOY_OFFLINE";

/// A configuration file could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply the
/// environment on top
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let (config, warnings) = load_first(&[project_config, user_config_path()]);
    (with_env_overrides(config), warnings)
}

/// First existing, parseable file wins
pub(crate) fn load_first(candidates: &[Option<PathBuf>]) -> (Config, Vec<ConfigWarning>) {
    for path in candidates.iter().flatten() {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(path) {
            Ok(loaded) => {
                debug!(path = %path.display(), "loaded configuration");
                return loaded;
            }
            Err(e) => warn!(error = %e, "ignoring unusable configuration file"),
        }
    }
    (Config::default(), Vec::new())
}

/// Apply environment variable overrides (ARTIFACT_DEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(val) = var(ENV_SKIP) {
        config.deploy.skip = is_truthy(&val);
    }

    if let Some(spec) = var(ENV_ALT_REPOSITORY) {
        let spec = spec.trim();
        if !spec.is_empty() {
            config.deploy.alt_repository = Some(spec.to_string());
        }
    }

    if let Some(path) = var(ENV_LOCAL_CACHE) {
        if !path.trim().is_empty() {
            config.repositories.local = Some(PathBuf::from(path));
        }
    }

    if let Some(val) = var(ENV_FLATTEN) {
        config.deploy.flatten_descriptors = is_truthy(&val);
    }

    if let Some(val) = var(ENV_OFFLINE) {
        config.deploy.offline = is_truthy(&val);
    }

    config
}

fn is_truthy(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    !val.is_empty() && val != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "skip",
        "update_release_info",
        "flatten_descriptors",
        "include_dependencies",
        "alt_repository",
        "offline",
        "repositories",
        "local",
        "remote",
        "id",
        "url",
        "layout",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
