//! Shared fixtures for the scenario tests: a throwaway local cache laid
//! out like a real repository, and a deploy use case wired to a dry-run
//! publisher.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use artifact_deploy::application::{
    DeployUseCase, DescriptorFlattener, RepositoryResolver, ResolutionContext,
};
use artifact_deploy::domain::ports::{ArtifactResolver, LayoutStrategy};
use artifact_deploy::domain::services::ChildWinsAssembler;
use artifact_deploy::domain::value_objects::{Coordinate, LocalCache};
use artifact_deploy::infrastructure::{
    DefaultLayout, DryRunPublisher, LocalCacheResolver, StaticLayoutRegistry, TomlDescriptorStore,
};

pub const RELEASES: &str = "releases::default::file:///srv/releases";

/// A local cache in a temporary directory
pub struct LocalRepo {
    dir: TempDir,
}

impl LocalRepo {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn context(&self) -> ResolutionContext {
        ResolutionContext::new(LocalCache::new(self.root()))
    }

    /// Place `content` where the default layout expects `coordinate`
    pub fn install(&self, coordinate: &Coordinate, content: &str) -> PathBuf {
        let path = self.root().join(DefaultLayout.path_of(coordinate));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Install a descriptor plus a binary for the `jar` coordinate
    pub fn install_jar(&self, coordinate: &Coordinate, descriptor: &str) -> PathBuf {
        self.install(&coordinate.descriptor(), descriptor);
        self.install(coordinate, &format!("binary of {}", coordinate))
    }

    /// A file outside the cache, as a build would produce it
    pub fn build_output(&self, name: &str, content: &str) -> PathBuf {
        let dir = self.root().join("build");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn resolver(&self) -> Arc<dyn ArtifactResolver> {
        Arc::new(LocalCacheResolver::new(
            Arc::new(DefaultLayout),
            Arc::new(TomlDescriptorStore::new()),
        ))
    }
}

pub fn jar(group: &str, name: &str, version: &str) -> Coordinate {
    Coordinate::new(group, name, version, "jar")
}

pub fn descriptor(group: &str, name: &str, version: &str) -> String {
    format!("group = \"{group}\"\nname = \"{name}\"\nversion = \"{version}\"\n")
}

pub fn publisher() -> Arc<DryRunPublisher> {
    Arc::new(DryRunPublisher::new(Arc::new(StaticLayoutRegistry::new())))
}

pub fn use_case(resolver: Arc<dyn ArtifactResolver>, publisher: Arc<DryRunPublisher>) -> DeployUseCase {
    let flattener = DescriptorFlattener::new(
        Arc::clone(&resolver),
        Arc::new(TomlDescriptorStore::new()),
        Arc::new(ChildWinsAssembler),
    );
    DeployUseCase::new(
        RepositoryResolver::new(Arc::new(StaticLayoutRegistry::new())),
        flattener,
        resolver,
        publisher,
    )
}
