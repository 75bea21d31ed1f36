//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Loading the local project being deployed
//! - Tracing setup for the CLI
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `project` - Descriptor on disk to primary artifact, attachments and dependencies
//! - `telemetry` - Global tracing subscriber

pub mod factory;
pub mod project;
pub mod telemetry;

pub use factory::create_deploy_use_case;
pub use project::{AttachmentSpec, LocalProject};
