//! artifact-deploy - publishes build artifacts to remote repositories
//!
//! A deployment run picks a destination repository, decides which artifacts
//! to publish, optionally flattens each artifact's descriptor against its
//! ancestors, and publishes descriptor, binary and attachments in order.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployProject, DeployReport, DeployUseCase};
pub use config::Config;
pub use error::{DeployError, DeployResult};
