//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use is_terminal::IsTerminal;

use crate::application::{DeployUseCase, DescriptorFlattener, RepositoryResolver};
use crate::domain::ports::{
    ArtifactPublisher, ArtifactResolver, CoordinatePrompter, DescriptorStore,
};
use crate::domain::services::ChildWinsAssembler;
use crate::infrastructure::fs::ssh_dir;
use crate::infrastructure::{
    DefaultLayout, DialoguerPrompter, DryRunPublisher, LocalCacheResolver, StaticLayoutRegistry,
    TomlDescriptorStore,
};

pub fn create_descriptor_store() -> Arc<dyn DescriptorStore> {
    Arc::new(TomlDescriptorStore::new())
}

/// Resolver reading the local cache under the default layout
pub fn create_resolver() -> Arc<dyn ArtifactResolver> {
    Arc::new(LocalCacheResolver::new(
        Arc::new(DefaultLayout),
        create_descriptor_store(),
    ))
}

pub fn create_publisher() -> Arc<DryRunPublisher> {
    Arc::new(DryRunPublisher::new(Arc::new(StaticLayoutRegistry::new())))
}

pub fn create_flattener(resolver: Arc<dyn ArtifactResolver>) -> DescriptorFlattener {
    DescriptorFlattener::new(
        resolver,
        create_descriptor_store(),
        Arc::new(ChildWinsAssembler),
    )
}

/// Repository resolver knowing the built-in layouts; secure-shell
/// destinations get `~/.ssh` ensured
pub fn create_repository_resolver() -> RepositoryResolver {
    let resolver = RepositoryResolver::new(Arc::new(StaticLayoutRegistry::new()));
    match ssh_dir() {
        Some(dir) => resolver.with_credentials_dir(dir),
        None => resolver,
    }
}

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case(
    resolver: Arc<dyn ArtifactResolver>,
    publisher: Arc<dyn ArtifactPublisher>,
) -> DeployUseCase {
    DeployUseCase::new(
        create_repository_resolver(),
        create_flattener(Arc::clone(&resolver)),
        resolver,
        publisher,
    )
}

/// Terminal prompter, only when stdin is a terminal and output is not JSON
pub fn create_prompter(json: bool) -> Option<Arc<dyn CoordinatePrompter>> {
    if json || !std::io::stdin().is_terminal() {
        return None;
    }
    Some(Arc::new(DialoguerPrompter::new()))
}
