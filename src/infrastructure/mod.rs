//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `descriptor/` - TOML descriptor store
//! - `resolver/` - Local-cache artifact resolver
//! - `publisher/` - Dry-run publisher
//! - `prompt/` - Terminal coordinate prompter
//! - `events/` - NDJSON event sink
//! - `fs/` - Home and credentials directories

pub mod descriptor;
pub mod events;
pub mod fs;
pub mod layout;
pub mod prompt;
pub mod publisher;
pub mod resolver;

// Re-export for convenience
pub use descriptor::TomlDescriptorStore;
pub use events::JsonEventSink;
pub use layout::{DefaultLayout, LegacyLayout, StaticLayoutRegistry, LEGACY_LAYOUT};
pub use prompt::DialoguerPrompter;
pub use publisher::{DryRunPublisher, PublishRecord};
pub use resolver::{LocalCacheResolver, PinnedFilesResolver};
