//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod inheritance;
mod publication;

pub use inheritance::{merge_inheritance, ChildWinsAssembler};
pub use publication::{prepare_for_publication, publishable_dependencies, strip_hierarchy_sections};
