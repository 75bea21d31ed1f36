use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ResolutionContext;
use crate::domain::entities::{ArtifactHandle, ArtifactSet, Dependency};
use crate::domain::ports::{ArtifactResolver, DescriptorStore};
use crate::domain::services::publishable_dependencies;
use crate::domain::value_objects::{Coordinate, ManagedVersions, DESCRIPTOR_TYPE};
use crate::error::{DeployResult, ResolutionError};

use super::ArtifactSetBuilder;

/// A project located by (group, name, version) and read from its descriptor.
///
/// The set is the project's packaged artifact followed by every non-test
/// dependency its descriptor declares.
pub struct DescriptorLookup {
    descriptor: Coordinate,
    resolver: Arc<dyn ArtifactResolver>,
    store: Arc<dyn DescriptorStore>,
    context: ResolutionContext,
}

impl DescriptorLookup {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        resolver: Arc<dyn ArtifactResolver>,
        store: Arc<dyn DescriptorStore>,
        context: ResolutionContext,
    ) -> Self {
        Self {
            descriptor: Coordinate::new(group, name, version, DESCRIPTOR_TYPE),
            resolver,
            store,
            context,
        }
    }

    fn resolve(&self, coordinate: &Coordinate) -> Result<ArtifactHandle, ResolutionError> {
        let file = self
            .resolver
            .resolve(coordinate, &self.context.remotes, &self.context.local)?;
        Ok(ArtifactHandle::new(coordinate.clone()).with_file(file))
    }

    fn dependency_coordinate(
        &self,
        dependency: &Dependency,
        managed: &ManagedVersions,
    ) -> Result<Coordinate, ResolutionError> {
        let version = dependency
            .version
            .as_deref()
            .or_else(|| managed.get(&dependency.group, &dependency.name))
            .ok_or_else(|| {
                ResolutionError::unversioned(
                    dependency.coordinate(""),
                    "no version declared or managed",
                )
            })?;
        Ok(dependency.coordinate(version))
    }
}

impl ArtifactSetBuilder for DescriptorLookup {
    fn build(&self) -> DeployResult<ArtifactSet> {
        info!(descriptor = %self.descriptor, "looking up project descriptor");

        let descriptor_file = self.resolver.resolve(
            &self.descriptor,
            &self.context.remotes,
            &self.context.local,
        )?;
        let document = self.store.load(&descriptor_file)?;

        let mut set = ArtifactSet::new();
        if document.packaging() == DESCRIPTOR_TYPE {
            set.insert(ArtifactHandle::new(self.descriptor.clone()).with_file(descriptor_file));
        } else {
            let target = Coordinate::new(
                self.descriptor.group.clone(),
                self.descriptor.name.clone(),
                self.descriptor.version.clone(),
                document.packaging(),
            );
            set.insert(self.resolve(&target)?);
        }

        let managed = document.managed_versions();
        for dependency in publishable_dependencies(&document.dependencies) {
            let coordinate = self.dependency_coordinate(&dependency, &managed)?;
            debug!(dependency = %coordinate, "resolving declared dependency");
            set.insert(self.resolve(&coordinate)?);
        }

        Ok(set)
    }
}
