//! Publication sanitation
//!
//! A merged descriptor still carries sections that only mean something
//! inside the originating multi-module build. These are cleared before the
//! descriptor is published on its own.

use crate::domain::entities::{Dependency, DescriptorDocument};

/// Clear every project-hierarchy-only section.
pub fn strip_hierarchy_sections(descriptor: &mut DescriptorDocument) {
    descriptor.parent = None;
    descriptor.build = None;
    descriptor.ci_management = None;
    descriptor.contributors.clear();
    descriptor.developers.clear();
    descriptor.issue_management = None;
    descriptor.mailing_lists.clear();
    descriptor.profiles.clear();
    descriptor.modules.clear();
    descriptor.distribution = None;
    descriptor.plugin_repositories.clear();
    descriptor.reporting = None;
    descriptor.reports.clear();
    descriptor.repositories.clear();
    descriptor.scm = None;
    descriptor.url = None;
    descriptor.dependency_management = None;
    descriptor.properties.clear();
}

/// Directly declared dependencies minus those scoped exactly `test`.
pub fn publishable_dependencies(declared: &[Dependency]) -> Vec<Dependency> {
    declared
        .iter()
        .filter(|dep| !dep.is_test_scoped())
        .cloned()
        .collect()
}

/// Turn a fully merged descriptor into a standalone one.
///
/// `bare` is the artifact's own descriptor before any merge; its declared
/// dependencies replace the merged list.
pub fn prepare_for_publication(
    mut merged: DescriptorDocument,
    bare: &DescriptorDocument,
) -> DescriptorDocument {
    strip_hierarchy_sections(&mut merged);
    merged.dependencies = publishable_dependencies(&bare.dependencies);
    merged
}
