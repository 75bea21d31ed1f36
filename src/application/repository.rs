//! Repository Target Resolver
//!
//! Decides the destination repository of a run:
//! 1. An `ID::LAYOUT::URL` override, when given, with its layout checked
//!    against the layout registry
//! 2. Otherwise the project's distribution target
//!
//! Secure-shell destinations additionally get a local credentials directory
//! created up front. Failing to create it is only logged.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ports::LayoutRegistry;
use crate::domain::value_objects::RepositoryTarget;
use crate::error::ConfigurationError;

pub struct RepositoryResolver {
    layouts: Arc<dyn LayoutRegistry>,
    credentials_dir: Option<PathBuf>,
}

impl RepositoryResolver {
    pub fn new(layouts: Arc<dyn LayoutRegistry>) -> Self {
        Self {
            layouts,
            credentials_dir: None,
        }
    }

    /// Directory ensured to exist for secure-shell destinations (`~/.ssh`)
    pub fn with_credentials_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.credentials_dir = Some(dir.into());
        self
    }

    pub fn resolve(
        &self,
        override_spec: Option<&str>,
        project_target: Option<&RepositoryTarget>,
    ) -> Result<RepositoryTarget, ConfigurationError> {
        let target = match override_spec {
            Some(spec) => {
                info!(repository = %spec, "Using alternate deployment repository");
                let target = RepositoryTarget::parse_override(spec)?;
                if self.layouts.lookup(&target.layout).is_none() {
                    return Err(ConfigurationError::UnknownLayout {
                        layout: target.layout,
                    });
                }
                target
            }
            None => project_target
                .cloned()
                .ok_or(ConfigurationError::NoRepository)?,
        };

        if target.uses_secure_shell() {
            self.ensure_credentials_dir();
        }

        Ok(target)
    }

    fn ensure_credentials_dir(&self) {
        let Some(dir) = &self.credentials_dir else {
            return;
        };
        if dir.exists() {
            return;
        }
        match std::fs::create_dir_all(dir) {
            Ok(()) => debug!(path = %dir.display(), "created credentials directory"),
            Err(e) => warn!(
                path = %dir.display(),
                error = %e,
                "failed to create credentials directory"
            ),
        }
    }
}
