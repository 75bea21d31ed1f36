//! Error types for artifact deployment
//!
//! Uses `thiserror` for library errors. Every deployment failure reaches the
//! caller as a single `DeployError` with the originating cause preserved in
//! its `source()` chain.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::{Coordinate, CoordinateField};

/// Result type alias for deployment operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for a deployment run
#[derive(Error, Debug)]
pub enum DeployError {
    /// Bad or missing repository configuration
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A coordinate could not be located or downloaded
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// A descriptor could not be read or parsed
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// The project produced nothing that can be published
    #[error("the packaging for {coordinate} did not assign a file to the build artifact")]
    NoPublishableContent { coordinate: Coordinate },

    /// Transport-level failure while publishing
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// The operator prompt failed
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// IO error (writing temporary descriptors, credentials directory, ...)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Corrective guidance for the operator, when there is any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DeployError::Configuration(err) => Some(err.hint()),
            DeployError::NoPublishableContent { .. } => Some(
                "Make sure the build produces a primary file or attaches at least one artifact.",
            ),
            DeployError::Publish(_) => Some(
                "The remote repository may now be partially updated; inspect it before retrying.",
            ),
            _ => None,
        }
    }
}

/// Configuration problems; always fatal and never retried
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("invalid syntax for alternative repository '{spec}'")]
    InvalidRepositorySyntax { spec: String },

    #[error("unknown repository layout '{layout}'")]
    UnknownLayout { layout: String },

    #[error("no destination repository configured")]
    NoRepository,

    #[error("missing required coordinate field '{field}'")]
    MissingCoordinate { field: CoordinateField },

    #[error("cannot deploy artifacts while offline")]
    Offline,
}

impl ConfigurationError {
    pub fn hint(&self) -> &'static str {
        match self {
            ConfigurationError::InvalidRepositorySyntax { .. } => {
                "Use \"id::layout::url\" for the alternative repository."
            }
            ConfigurationError::UnknownLayout { .. } => {
                "Known layouts are \"default\" and \"legacy\"."
            }
            ConfigurationError::NoRepository => {
                "Declare a repository in the descriptor's distribution section or pass \
                 --alt-repository id::layout::url."
            }
            ConfigurationError::MissingCoordinate { .. } => {
                "Pass the field on the command line or run from an interactive terminal."
            }
            ConfigurationError::Offline => "Disable offline mode to deploy.",
        }
    }
}

/// A coordinate could not be located or downloaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to resolve {target}: {message}")]
pub struct ResolutionError {
    pub coordinate: Coordinate,
    pub message: String,
    /// What the message names; `group:name` when no version is known
    target: String,
}

impl ResolutionError {
    pub fn new(coordinate: Coordinate, message: impl Into<String>) -> Self {
        Self {
            target: coordinate.to_string(),
            coordinate,
            message: message.into(),
        }
    }

    /// A dependency that has neither a declared nor a managed version
    pub fn unversioned(coordinate: Coordinate, message: impl Into<String>) -> Self {
        Self {
            target: format!("{}:{}", coordinate.group, coordinate.name),
            coordinate,
            message: message.into(),
        }
    }
}

/// Descriptor read/parse failures
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("failed to read descriptor {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid descriptor {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Transport-level publish failure
#[derive(Error, Debug)]
#[error("failed to publish {coordinate} to repository '{repository}'")]
pub struct PublishError {
    pub coordinate: Coordinate,
    pub repository: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl PublishError {
    pub fn new(
        coordinate: Coordinate,
        repository: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            coordinate,
            repository: repository.into(),
            source: source.into(),
        }
    }
}

/// The interactive prompt could not be completed
#[derive(Error, Debug)]
#[error("failed to read '{field}' from the terminal: {message}")]
pub struct PromptError {
    pub field: CoordinateField,
    pub message: String,
}
