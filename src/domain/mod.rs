//! Domain Layer
//!
//! Pure types and rules of artifact deployment, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Artifact handles, artifact sets, descriptors, runs
//! - `value_objects/` - Coordinates, repository targets, scopes
//! - `services/` - Inheritance merge and publication sanitation
//! - `ports/` - Interfaces implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
