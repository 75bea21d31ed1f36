//! Artifact publishers

mod dry_run;

pub use dry_run::{DryRunPublisher, PublishRecord};
