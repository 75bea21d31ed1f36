//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_resolver;
pub mod deploy_events;
pub mod descriptor_store;
pub mod inheritance;
pub mod layout;
pub mod prompter;
pub mod publisher;

pub use artifact_resolver::ArtifactResolver;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use descriptor_store::DescriptorStore;
pub use inheritance::InheritanceAssembler;
pub use layout::{LayoutRegistry, LayoutStrategy};
pub use prompter::CoordinatePrompter;
pub use publisher::ArtifactPublisher;
