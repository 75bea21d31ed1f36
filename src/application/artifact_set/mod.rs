//! Artifact Set Builder
//!
//! Decides which artifacts a run publishes. One strategy per entry mode:
//!
//! - `ProjectArtifacts` - the project's primary artifact, optionally with its
//!   already-resolved dependencies
//! - `TransitiveLookup` - an externally located coordinate plus its
//!   runtime-scoped transitive closure
//! - `DescriptorLookup` - an externally located project read from its
//!   descriptor, plus the non-test dependencies it declares
//! - `InteractiveLookup` - either lookup, with unset coordinate fields
//!   solicited from the operator
//!
//! Builders only materialize the candidate set; they never publish. Any
//! resolution failure aborts the build.

mod descriptor_lookup;
mod interactive;
mod plain;
mod transitive;

pub use descriptor_lookup::DescriptorLookup;
pub use interactive::{InteractiveLookup, LookupMode, PartialCoordinate};
pub use plain::ProjectArtifacts;
pub use transitive::TransitiveLookup;

use crate::domain::entities::ArtifactSet;
use crate::error::DeployResult;

/// Strategy producing the artifacts of one run
pub trait ArtifactSetBuilder: Send + Sync {
    fn build(&self) -> DeployResult<ArtifactSet>;
}
