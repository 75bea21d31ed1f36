//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `ArtifactHandle` - A coordinate with its resolved file and versions
//! - `ArtifactSet` - Deduplicated candidate artifacts of a run
//! - `DescriptorDocument` - Project descriptor with ancestry and sections
//! - `DeploymentRun` - Artifacts and destination owned by one run

mod artifact;
mod artifact_set;
mod deployment_run;
mod descriptor;

pub use artifact::{ArtifactHandle, ArtifactMetadata, MetadataKind};
pub use artifact_set::ArtifactSet;
pub use deployment_run::{DeploymentRun, RunState};
pub use descriptor::{
    Dependency, DependencyManagement, DescriptorDocument, DistributionManagement, Exclusion,
    License, MailingList, ParentRef, Person, Profile, RepositoryEntry, Scm, SystemLink,
};
