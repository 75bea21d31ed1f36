//! Dry-run publisher
//!
//! Records every publish instead of transferring it. Snapshot versions get
//! a `yyyyMMdd.HHmmss-N` timestamp the way a remote repository would assign
//! one; every artifact of the same build shares it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::domain::entities::ArtifactHandle;
use crate::domain::ports::{ArtifactPublisher, LayoutRegistry};
use crate::domain::value_objects::{Checksum, Coordinate, LocalCache, RepositoryTarget};
use crate::error::PublishError;

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// One recorded publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishRecord {
    pub repository: String,
    pub coordinate: Coordinate,
    pub file: PathBuf,
    /// Location inside the repository under its layout
    pub remote_path: PathBuf,
    pub effective_version: String,
    pub checksum: Option<Checksum>,
}

pub struct DryRunPublisher {
    layouts: Arc<dyn LayoutRegistry>,
    records: Mutex<Vec<PublishRecord>>,
    /// `group:name:base` -> assigned timestamped version
    stamps: Mutex<HashMap<String, String>>,
}

impl DryRunPublisher {
    pub fn new(layouts: Arc<dyn LayoutRegistry>) -> Self {
        Self {
            layouts,
            records: Mutex::new(Vec::new()),
            stamps: Mutex::new(HashMap::new()),
        }
    }

    pub fn records(&self) -> Vec<PublishRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn effective_version(&self, artifact: &ArtifactHandle) -> String {
        // Already pinned to another build's version
        if artifact.effective_version() != artifact.base_version() {
            return artifact.effective_version().to_string();
        }
        let base = artifact.base_version();
        let Some(release) = base.strip_suffix(SNAPSHOT_SUFFIX) else {
            return base.to_string();
        };

        let coordinate = artifact.coordinate();
        let key = format!("{}:{}:{}", coordinate.group, coordinate.name, base);
        let stamp = || {
            format!(
                "{}-{}-1",
                release,
                Utc::now().format("%Y%m%d.%H%M%S")
            )
        };
        self.stamps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert_with(stamp)
            .clone()
    }
}

impl ArtifactPublisher for DryRunPublisher {
    fn publish(
        &self,
        file: &Path,
        artifact: &ArtifactHandle,
        repository: &RepositoryTarget,
        _local: &LocalCache,
    ) -> Result<String, PublishError> {
        let layout = self.layouts.lookup(&repository.layout).ok_or_else(|| {
            PublishError::new(
                artifact.coordinate().clone(),
                repository.id.clone(),
                format!("unknown repository layout '{}'", repository.layout),
            )
        })?;
        let checksum = Checksum::of_file(file).map_err(|e| {
            PublishError::new(artifact.coordinate().clone(), repository.id.clone(), e)
        })?;

        let effective_version = self.effective_version(artifact);
        let remote_coordinate = artifact
            .coordinate()
            .clone()
            .with_version(effective_version.clone());
        let remote_path = layout.path_of(&remote_coordinate);

        info!(
            repository = %repository.id,
            url = %repository.url,
            path = %remote_path.display(),
            checksum = %checksum,
            release = artifact.is_release(),
            "dry run: would upload {}",
            file.display()
        );
        for metadata in artifact.metadata_entries() {
            info!(
                descriptor = %metadata.descriptor,
                file = %metadata.file.display(),
                "dry run: would upload attached metadata"
            );
        }

        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(PublishRecord {
                repository: repository.id.clone(),
                coordinate: artifact.coordinate().clone(),
                file: file.to_path_buf(),
                remote_path,
                effective_version: effective_version.clone(),
                checksum: Some(checksum),
            });
        Ok(effective_version)
    }
}
