//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod checksum;
mod coordinate;
mod repository;
mod scope;

pub use checksum::Checksum;
pub use coordinate::{
    Coordinate, CoordinateField, CoordinateParseError, DEFAULT_TYPE, DESCRIPTOR_TYPE,
};
pub use repository::{LocalCache, RemoteRepository, RepositoryTarget, DEFAULT_LAYOUT};
pub use scope::{ManagedVersions, ScopeFilter, TEST_SCOPE};
