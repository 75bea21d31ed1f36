//! Descriptor Flattening Engine
//!
//! Produces one inheritance-free descriptor suitable for standalone
//! publication:
//! 1. Load the artifact's own (bare) descriptor
//! 2. Walk the parent chain, resolving and loading each ancestor onto a stack
//! 3. Pop from the root downward, overlaying each child onto its merged parent
//! 4. Clear hierarchy-only sections
//! 5. Replace dependencies with the bare, non-test ones
//! 6. Write the result to a temporary file
//!
//! An ancestor that cannot be resolved ends the chain instead of failing the
//! flatten. A descriptor that cannot be read or parsed fails it.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempPath;
use tracing::{debug, error, warn};

use crate::domain::entities::DescriptorDocument;
use crate::domain::ports::{ArtifactResolver, DescriptorStore, InheritanceAssembler};
use crate::domain::services::prepare_for_publication;
use crate::error::DeployResult;

use super::ResolutionContext;

/// A flattened descriptor and the temporary file holding it.
///
/// The file is deleted when this value is dropped.
#[derive(Debug)]
pub struct FlattenedDescriptor {
    document: DescriptorDocument,
    path: TempPath,
}

impl FlattenedDescriptor {
    pub fn document(&self) -> &DescriptorDocument {
        &self.document
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub struct DescriptorFlattener {
    resolver: Arc<dyn ArtifactResolver>,
    store: Arc<dyn DescriptorStore>,
    assembler: Arc<dyn InheritanceAssembler>,
}

impl DescriptorFlattener {
    pub fn new(
        resolver: Arc<dyn ArtifactResolver>,
        store: Arc<dyn DescriptorStore>,
        assembler: Arc<dyn InheritanceAssembler>,
    ) -> Self {
        Self {
            resolver,
            store,
            assembler,
        }
    }

    /// Flatten the descriptor at `descriptor_file` into a new temporary file
    pub fn flatten(
        &self,
        descriptor_file: &Path,
        context: &ResolutionContext,
    ) -> DeployResult<FlattenedDescriptor> {
        let document = self.flatten_document(descriptor_file, context)?;
        let path = self.store.write_temporary(&document)?;
        debug!(
            source = %descriptor_file.display(),
            flattened = %path.display(),
            "wrote flattened descriptor"
        );
        Ok(FlattenedDescriptor { document, path })
    }

    /// Flatten without writing anything
    pub fn flatten_document(
        &self,
        descriptor_file: &Path,
        context: &ResolutionContext,
    ) -> DeployResult<DescriptorDocument> {
        let bare = self.store.load(descriptor_file)?;
        let merged = self.merge_document(&bare, context)?;
        Ok(prepare_for_publication(merged, &bare))
    }

    /// Effective model of `bare`: every reachable ancestor merged in, no
    /// section cleared
    pub fn merge_document(
        &self,
        bare: &DescriptorDocument,
        context: &ResolutionContext,
    ) -> DeployResult<DescriptorDocument> {
        let hierarchy = self.collect_hierarchy(bare, context)?;
        Ok(self.merge_hierarchy(hierarchy))
    }

    /// Stack of descriptors, the artifact's own at the bottom and the
    /// furthest reachable ancestor on top.
    fn collect_hierarchy(
        &self,
        bare: &DescriptorDocument,
        context: &ResolutionContext,
    ) -> DeployResult<Vec<DescriptorDocument>> {
        let mut hierarchy = vec![bare.clone()];
        let mut visited = HashSet::new();
        let mut next = bare.parent_coordinate();

        while let Some(parent) = next {
            if !visited.insert(parent.clone()) {
                warn!(parent = %parent, "descriptor inheritance cycle; chain ends here");
                break;
            }

            let parent_file = match self.resolver.resolve(&parent, &context.remotes, &context.local)
            {
                Ok(file) => file,
                Err(e) => {
                    error!(parent = %parent, error = %e, "can't resolve parent descriptor");
                    break;
                }
            };

            let document = self.store.load(&parent_file)?;
            next = document.parent_coordinate();
            hierarchy.push(document);
        }

        Ok(hierarchy)
    }

    /// Merge starting with the oldest ancestor
    fn merge_hierarchy(&self, mut hierarchy: Vec<DescriptorDocument>) -> DescriptorDocument {
        let mut merged = hierarchy.pop().unwrap_or_default();
        while let Some(child) = hierarchy.pop() {
            merged = self.assembler.assemble(&child, &merged);
        }
        merged
    }
}
