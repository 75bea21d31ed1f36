//! Resolution context shared by the use cases of one run.

use crate::domain::value_objects::{LocalCache, RemoteRepository};

/// Where artifacts are resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    pub remotes: Vec<RemoteRepository>,
    pub local: LocalCache,
}

impl ResolutionContext {
    pub fn new(local: LocalCache) -> Self {
        Self {
            remotes: Vec::new(),
            local,
        }
    }

    pub fn with_remotes(mut self, remotes: Vec<RemoteRepository>) -> Self {
        self.remotes = remotes;
        self
    }
}
