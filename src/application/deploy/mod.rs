//! Deploy Module
//!
//! Orchestrates a deployment run.
//!
//! ## Structure
//!
//! - `options` - Run parameters (`DeployOptions`) and project context (`DeployProject`)
//! - `result` - What a run published (`DeployReport`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use artifact_deploy::application::deploy::{DeployOptions, DeployProject, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(repositories, flattener, resolver, publisher);
//! let report = use_case.execute(&DeployOptions::new(), &project, &builder)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, DeployProject};
pub use result::{DeployReport, PublishedArtifact};
pub use use_case::DeployUseCase;
