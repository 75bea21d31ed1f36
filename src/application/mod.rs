//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RepositoryResolver` - Picks the destination repository of a run
//! - `ArtifactSetBuilder` strategies - Decide what a run publishes
//! - `DescriptorFlattener` - Merges a descriptor with its ancestors for standalone publication
//! - `DeployUseCase` - Sequences descriptor, binary and attachment publication

pub mod artifact_set;
mod context;
pub mod deploy;
pub mod flatten;
pub mod repository;

#[cfg(test)]
pub(crate) mod test_support;

pub use artifact_set::{
    ArtifactSetBuilder, DescriptorLookup, InteractiveLookup, LookupMode, PartialCoordinate,
    ProjectArtifacts, TransitiveLookup,
};
pub use context::ResolutionContext;
pub use deploy::{DeployOptions, DeployProject, DeployReport, DeployUseCase, PublishedArtifact};
pub use flatten::{DescriptorFlattener, FlattenedDescriptor};
pub use repository::RepositoryResolver;
