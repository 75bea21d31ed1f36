//! Coordinate value object - the identity key of an artifact.
//!
//! Two coordinates are equal iff group, name, version, classifier and type
//! all match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Artifact type of a project descriptor.
pub const DESCRIPTOR_TYPE: &str = "pom";

/// Default artifact type when none is declared.
pub const DEFAULT_TYPE: &str = "jar";

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Identity tuple of an artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(rename = "type")]
    pub artifact_type: String,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        artifact_type: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            classifier: None,
            artifact_type: artifact_type.into(),
        }
    }

    /// Set the classifier; an empty classifier means "none".
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = if classifier.trim().is_empty() {
            None
        } else {
            Some(classifier)
        };
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Coordinate of the descriptor that describes this artifact.
    pub fn descriptor(&self) -> Coordinate {
        Coordinate::new(
            self.group.clone(),
            self.name.clone(),
            self.version.clone(),
            DESCRIPTOR_TYPE,
        )
    }

    pub fn is_descriptor(&self) -> bool {
        self.artifact_type == DESCRIPTOR_TYPE
    }

    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with(SNAPSHOT_SUFFIX)
    }

    /// File extension used when the artifact is stored in a repository
    pub fn extension(&self) -> &str {
        match self.artifact_type.as_str() {
            "test-jar" | "maven-plugin" | "ejb" | "ejb-client" | "java-source" | "javadoc" => {
                "jar"
            }
            other => other,
        }
    }

    /// Key used for dependency deduplication (version-independent)
    pub fn management_key(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{}",
                self.group, self.name, self.artifact_type, classifier
            ),
            None => format!("{}:{}:{}", self.group, self.name, self.artifact_type),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.classifier {
            Some(classifier) => write!(
                f,
                "{}:{}:{}:{}:{}",
                self.group, self.name, self.artifact_type, classifier, self.version
            ),
            None => write!(
                f,
                "{}:{}:{}:{}",
                self.group, self.name, self.artifact_type, self.version
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate '{input}', expected group:name[:type[:classifier]]:version")]
pub struct CoordinateParseError {
    pub input: String,
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    /// Accepts `group:name:version`, `group:name:type:version` and
    /// `group:name:type:classifier:version`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(CoordinateParseError {
                input: s.to_string(),
            });
        }

        match parts.as_slice() {
            [group, name, version] => Ok(Coordinate::new(*group, *name, *version, DEFAULT_TYPE)),
            [group, name, artifact_type, version] => {
                Ok(Coordinate::new(*group, *name, *version, *artifact_type))
            }
            [group, name, artifact_type, classifier, version] => {
                Ok(Coordinate::new(*group, *name, *version, *artifact_type)
                    .with_classifier(*classifier))
            }
            _ => Err(CoordinateParseError {
                input: s.to_string(),
            }),
        }
    }
}

/// Individual coordinate fields that can be supplied by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateField {
    Group,
    Name,
    Version,
    Type,
    Classifier,
}

impl CoordinateField {
    pub const ALL: [CoordinateField; 5] = [
        CoordinateField::Group,
        CoordinateField::Name,
        CoordinateField::Version,
        CoordinateField::Type,
        CoordinateField::Classifier,
    ];

    /// Classifier is the only field that may legitimately stay empty.
    pub fn is_required(&self) -> bool {
        !matches!(self, CoordinateField::Classifier)
    }
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordinateField::Group => "group",
            CoordinateField::Name => "name",
            CoordinateField::Version => "version",
            CoordinateField::Type => "type",
            CoordinateField::Classifier => "classifier",
        };
        f.write_str(name)
    }
}
