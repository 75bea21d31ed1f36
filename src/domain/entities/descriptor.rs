//! Descriptor document entity
//!
//! The structured metadata document describing a project: identity,
//! ancestry, dependencies and a set of named sections. Sections that only
//! matter to the originating build (`build`, `reporting`, `profiles`) are
//! carried as opaque tables.
//!
//! Field order matters for TOML output: scalar values are declared before
//! tables and arrays of tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Coordinate, ManagedVersions, RepositoryTarget, DEFAULT_TYPE, DESCRIPTOR_TYPE, TEST_SCOPE,
};

fn is_false(b: &bool) -> bool {
    !*b
}

/// Reference to the parent descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
}

impl ParentRef {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            relative_path: None,
        }
    }

    /// Coordinate of the parent's descriptor artifact
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(
            self.group.clone(),
            self.name.clone(),
            self.version.clone(),
            DESCRIPTOR_TYPE,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub group: String,
    pub name: String,
}

/// A declared dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub group: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none"
    )]
    pub artifact_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<Exclusion>,
}

impl Dependency {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: None,
            artifact_type: None,
            classifier: None,
            scope: None,
            optional: false,
            exclusions: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = Some(artifact_type.into());
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Scope is exactly `test`
    pub fn is_test_scoped(&self) -> bool {
        self.scope.as_deref() == Some(TEST_SCOPE)
    }

    pub fn artifact_type(&self) -> &str {
        self.artifact_type.as_deref().unwrap_or(DEFAULT_TYPE)
    }

    /// Version-independent identity used when merging dependency lists
    pub fn management_key(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{}",
                self.group,
                self.name,
                self.artifact_type(),
                classifier
            ),
            None => format!("{}:{}:{}", self.group, self.name, self.artifact_type()),
        }
    }

    /// Coordinate of the dependency under the given version
    pub fn coordinate(&self, version: impl Into<String>) -> Coordinate {
        let coordinate = Coordinate::new(
            self.group.clone(),
            self.name.clone(),
            version,
            self.artifact_type(),
        );
        match &self.classifier {
            Some(classifier) => coordinate.with_classifier(classifier.clone()),
            None => coordinate,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyManagement {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Developer or contributor entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingList {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<String>,
}

/// Issue tracker or CI system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Repository declared inside a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

impl RepositoryEntry {
    pub fn to_target(&self) -> RepositoryTarget {
        match &self.layout {
            Some(layout) => RepositoryTarget::new(self.id.clone(), layout.clone(), self.url.clone()),
            None => RepositoryTarget::new(
                self.id.clone(),
                crate::domain::value_objects::DEFAULT_LAYOUT,
                self.url.clone(),
            ),
        }
    }
}

/// Distribution targets of the project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionManagement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_repository: Option<RepositoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(flatten)]
    pub settings: toml::Table,
}

/// A project descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<Scm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_management: Option<SystemLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_management: Option<SystemLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<DistributionManagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_management: Option<DependencyManagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<toml::Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting: Option<toml::Table>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<License>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub developers: Vec<Person>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Person>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mailing_lists: Vec<MailingList>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<RepositoryEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugin_repositories: Vec<RepositoryEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<Profile>,
}

impl DescriptorDocument {
    /// Group, falling back to the parent's
    pub fn effective_group(&self) -> Option<&str> {
        self.group
            .as_deref()
            .or_else(|| self.parent.as_ref().map(|p| p.group.as_str()))
    }

    /// Version, falling back to the parent's
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref().map(|p| p.version.as_str()))
    }

    pub fn packaging(&self) -> &str {
        self.packaging.as_deref().unwrap_or(DEFAULT_TYPE)
    }

    /// Coordinate of the artifact this descriptor builds
    pub fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.effective_group()?,
            self.name.as_deref()?,
            self.effective_version()?,
            self.packaging(),
        ))
    }

    pub fn parent_coordinate(&self) -> Option<Coordinate> {
        self.parent.as_ref().map(ParentRef::coordinate)
    }

    /// Versions pinned by this descriptor's own dependency-management block
    pub fn managed_versions(&self) -> ManagedVersions {
        let mut managed = ManagedVersions::new();
        if let Some(management) = &self.dependency_management {
            for dependency in &management.dependencies {
                if let Some(version) = &dependency.version {
                    managed.insert(&dependency.group, &dependency.name, version.clone());
                }
            }
        }
        managed
    }

    /// Distribution repository, picking the snapshot repository for
    /// snapshot versions when one is declared
    pub fn distribution_target(&self) -> Option<RepositoryTarget> {
        let distribution = self.distribution.as_ref()?;
        let is_snapshot = self
            .effective_version()
            .is_some_and(|v| v.ends_with("-SNAPSHOT"));

        let entry = if is_snapshot {
            distribution
                .snapshot_repository
                .as_ref()
                .or(distribution.repository.as_ref())
        } else {
            distribution.repository.as_ref()
        };
        entry.map(RepositoryEntry::to_target)
    }
}
