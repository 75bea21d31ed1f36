use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ResolutionContext;
use crate::domain::entities::{ArtifactHandle, ArtifactSet};
use crate::domain::ports::ArtifactResolver;
use crate::domain::value_objects::{Coordinate, ManagedVersions, ScopeFilter};
use crate::error::DeployResult;

use super::ArtifactSetBuilder;

/// A coordinate located by the caller plus its runtime-scoped closure
pub struct TransitiveLookup {
    target: Coordinate,
    resolver: Arc<dyn ArtifactResolver>,
    context: ResolutionContext,
}

impl TransitiveLookup {
    pub fn new(
        target: Coordinate,
        resolver: Arc<dyn ArtifactResolver>,
        context: ResolutionContext,
    ) -> Self {
        Self {
            target,
            resolver,
            context,
        }
    }

    pub fn target(&self) -> &Coordinate {
        &self.target
    }
}

impl ArtifactSetBuilder for TransitiveLookup {
    fn build(&self) -> DeployResult<ArtifactSet> {
        info!(target = %self.target, "resolving transitive closure");

        let closure = self.resolver.resolve_transitive(
            &self.target,
            &ManagedVersions::new(),
            &self.context.local,
            &self.context.remotes,
            ScopeFilter::Runtime,
        )?;

        let mut set: ArtifactSet = closure.into_iter().collect();
        if !set.contains(&self.target) {
            debug!(target = %self.target, "closure omitted its root; resolving it directly");
            let file = self.resolver.resolve(
                &self.target,
                &self.context.remotes,
                &self.context.local,
            )?;
            set.insert(ArtifactHandle::new(self.target.clone()).with_file(file));
        }

        debug!(count = set.len(), "transitive closure resolved");
        Ok(set)
    }
}
