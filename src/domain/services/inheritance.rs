//! Descriptor inheritance
//!
//! Overlays a child descriptor onto its already-merged parent:
//! - Child value wins when both define a field
//! - Otherwise the parent value is inherited
//! - Keyed collections (properties, dependencies, repositories) are unioned,
//!   child entries winning per key
//! - Identity and aggregation fields (`name`, `packaging`, `display_name`,
//!   `description`, `modules`, `profiles`) are never inherited

use std::collections::{BTreeMap, HashSet};

use crate::domain::entities::{
    Dependency, DependencyManagement, DescriptorDocument, DistributionManagement,
    RepositoryEntry, Scm,
};
use crate::domain::ports::InheritanceAssembler;

/// Default assembler applying the child-wins rules of this module
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildWinsAssembler;

impl InheritanceAssembler for ChildWinsAssembler {
    fn assemble(&self, child: &DescriptorDocument, parent: &DescriptorDocument) -> DescriptorDocument {
        merge_inheritance(child, parent)
    }
}

pub fn merge_inheritance(child: &DescriptorDocument, parent: &DescriptorDocument) -> DescriptorDocument {
    DescriptorDocument {
        group: child.group.clone().or_else(|| parent.group.clone()),
        name: child.name.clone(),
        version: child.version.clone().or_else(|| parent.version.clone()),
        packaging: child.packaging.clone(),
        display_name: child.display_name.clone(),
        description: child.description.clone(),
        url: child
            .url
            .clone()
            .or_else(|| inherited_url(parent.url.as_deref(), child.name.as_deref())),
        modules: child.modules.clone(),
        reports: first_non_empty(&child.reports, &parent.reports),

        parent: child.parent.clone(),
        properties: merge_properties(&child.properties, &parent.properties),
        scm: merge_scm(child.scm.as_ref(), parent.scm.as_ref()),
        issue_management: child
            .issue_management
            .clone()
            .or_else(|| parent.issue_management.clone()),
        ci_management: child
            .ci_management
            .clone()
            .or_else(|| parent.ci_management.clone()),
        distribution: merge_distribution(child.distribution.as_ref(), parent.distribution.as_ref()),
        dependency_management: merge_dependency_management(
            child.dependency_management.as_ref(),
            parent.dependency_management.as_ref(),
        ),
        build: merge_tables(child.build.as_ref(), parent.build.as_ref()),
        reporting: merge_tables(child.reporting.as_ref(), parent.reporting.as_ref()),

        licenses: first_non_empty(&child.licenses, &parent.licenses),
        developers: first_non_empty(&child.developers, &parent.developers),
        contributors: first_non_empty(&child.contributors, &parent.contributors),
        mailing_lists: first_non_empty(&child.mailing_lists, &parent.mailing_lists),
        dependencies: merge_dependencies(&child.dependencies, &parent.dependencies),
        repositories: merge_repositories(&child.repositories, &parent.repositories),
        plugin_repositories: merge_repositories(
            &child.plugin_repositories,
            &parent.plugin_repositories,
        ),
        profiles: child.profiles.clone(),
    }
}

fn first_non_empty<T: Clone>(child: &[T], parent: &[T]) -> Vec<T> {
    if child.is_empty() {
        parent.to_vec()
    } else {
        child.to_vec()
    }
}

/// Parent URLs are inherited with the child's name appended.
fn inherited_url(parent_url: Option<&str>, child_name: Option<&str>) -> Option<String> {
    let parent_url = parent_url?;
    match child_name {
        Some(name) => Some(format!("{}/{}", parent_url.trim_end_matches('/'), name)),
        None => Some(parent_url.to_string()),
    }
}

fn merge_properties(
    child: &BTreeMap<String, String>,
    parent: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = parent.clone();
    merged.extend(child.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

fn merge_scm(child: Option<&Scm>, parent: Option<&Scm>) -> Option<Scm> {
    match (child, parent) {
        (Some(child), Some(parent)) => Some(Scm {
            connection: child.connection.clone().or_else(|| parent.connection.clone()),
            developer_connection: child
                .developer_connection
                .clone()
                .or_else(|| parent.developer_connection.clone()),
            url: child.url.clone().or_else(|| parent.url.clone()),
            tag: child.tag.clone().or_else(|| parent.tag.clone()),
        }),
        (child, parent) => child.or(parent).cloned(),
    }
}

fn merge_distribution(
    child: Option<&DistributionManagement>,
    parent: Option<&DistributionManagement>,
) -> Option<DistributionManagement> {
    match (child, parent) {
        (Some(child), Some(parent)) => Some(DistributionManagement {
            site_url: child.site_url.clone().or_else(|| parent.site_url.clone()),
            repository: child.repository.clone().or_else(|| parent.repository.clone()),
            snapshot_repository: child
                .snapshot_repository
                .clone()
                .or_else(|| parent.snapshot_repository.clone()),
        }),
        (child, parent) => child.or(parent).cloned(),
    }
}

/// Child dependencies first, then parent dependencies the child does not redeclare.
fn merge_dependencies(child: &[Dependency], parent: &[Dependency]) -> Vec<Dependency> {
    let declared: HashSet<String> = child.iter().map(Dependency::management_key).collect();
    child
        .iter()
        .cloned()
        .chain(
            parent
                .iter()
                .filter(|dep| !declared.contains(&dep.management_key()))
                .cloned(),
        )
        .collect()
}

fn merge_dependency_management(
    child: Option<&DependencyManagement>,
    parent: Option<&DependencyManagement>,
) -> Option<DependencyManagement> {
    match (child, parent) {
        (Some(child), Some(parent)) => Some(DependencyManagement {
            dependencies: merge_dependencies(&child.dependencies, &parent.dependencies),
        }),
        (child, parent) => child.or(parent).cloned(),
    }
}

fn merge_repositories(child: &[RepositoryEntry], parent: &[RepositoryEntry]) -> Vec<RepositoryEntry> {
    let declared: HashSet<&str> = child.iter().map(|repo| repo.id.as_str()).collect();
    child
        .iter()
        .cloned()
        .chain(
            parent
                .iter()
                .filter(|repo| !declared.contains(repo.id.as_str()))
                .cloned(),
        )
        .collect()
}

/// Per-key overlay of opaque sections; nested tables are merged recursively.
fn merge_tables(child: Option<&toml::Table>, parent: Option<&toml::Table>) -> Option<toml::Table> {
    match (child, parent) {
        (Some(child), Some(parent)) => {
            let mut merged = parent.clone();
            for (key, value) in child {
                let value = match (value, parent.get(key)) {
                    (toml::Value::Table(child_table), Some(toml::Value::Table(parent_table))) => {
                        toml::Value::Table(
                            merge_tables(Some(child_table), Some(parent_table)).unwrap_or_default(),
                        )
                    }
                    _ => value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            Some(merged)
        }
        (child, parent) => child.or(parent).cloned(),
    }
}
