use std::sync::Arc;

use tracing::debug;

use crate::application::ResolutionContext;
use crate::domain::entities::ArtifactSet;
use crate::domain::ports::{ArtifactResolver, CoordinatePrompter, DescriptorStore};
use crate::domain::value_objects::{Coordinate, CoordinateField, DEFAULT_TYPE};
use crate::error::{ConfigurationError, DeployResult};

use super::{ArtifactSetBuilder, DescriptorLookup, TransitiveLookup};

/// Coordinate fields as supplied by the caller, any of which may be unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialCoordinate {
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub artifact_type: Option<String>,
    pub classifier: Option<String>,
}

impl PartialCoordinate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
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

    fn get(&self, field: CoordinateField) -> Option<&str> {
        let value = match field {
            CoordinateField::Group => &self.group,
            CoordinateField::Name => &self.name,
            CoordinateField::Version => &self.version,
            CoordinateField::Type => &self.artifact_type,
            CoordinateField::Classifier => &self.classifier,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    fn set(&mut self, field: CoordinateField, value: String) {
        let slot = match field {
            CoordinateField::Group => &mut self.group,
            CoordinateField::Name => &mut self.name,
            CoordinateField::Version => &mut self.version,
            CoordinateField::Type => &mut self.artifact_type,
            CoordinateField::Classifier => &mut self.classifier,
        };
        *slot = Some(value);
    }

    /// Fill unset `fields` from `prompter` and build the coordinate.
    ///
    /// Each unset field is asked for once, offering its current value (or
    /// the conventional default for the type) as the default. An empty
    /// answer keeps that default. Required fields still unset afterwards,
    /// or unset with nobody to ask, are a configuration error.
    pub fn complete(
        &self,
        prompter: Option<&dyn CoordinatePrompter>,
        fields: &[CoordinateField],
    ) -> DeployResult<Coordinate> {
        let mut filled = self.clone();

        for &field in fields {
            if filled.get(field).is_some() {
                continue;
            }
            let Some(prompter) = prompter else {
                continue;
            };

            let offered = match field {
                CoordinateField::Type => Some(DEFAULT_TYPE),
                _ => None,
            };
            let answer = prompter.prompt(field, offered)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                filled.set(field, answer.to_string());
            } else if let Some(default) = offered {
                filled.set(field, default.to_string());
            }
            debug!(field = %field, "coordinate field supplied interactively");
        }

        let required = |field: CoordinateField| -> Result<String, ConfigurationError> {
            filled
                .get(field)
                .map(|v| v.trim().to_string())
                .ok_or(ConfigurationError::MissingCoordinate { field })
        };

        let group = required(CoordinateField::Group)?;
        let name = required(CoordinateField::Name)?;
        let version = required(CoordinateField::Version)?;
        let artifact_type = if fields.contains(&CoordinateField::Type) {
            required(CoordinateField::Type)?
        } else {
            filled
                .get(CoordinateField::Type)
                .unwrap_or(DEFAULT_TYPE)
                .to_string()
        };

        let coordinate = Coordinate::new(group, name, version, artifact_type);
        Ok(match filled.get(CoordinateField::Classifier) {
            Some(classifier) => coordinate.with_classifier(classifier.trim()),
            None => coordinate,
        })
    }
}

/// Which lookup an interactive run performs once its coordinate is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Coordinate plus its runtime-scoped transitive closure
    #[default]
    Transitive,
    /// Project read from its descriptor
    Descriptor,
}

impl LookupMode {
    /// Fields the mode needs from the operator
    pub fn fields(&self) -> &'static [CoordinateField] {
        match self {
            LookupMode::Transitive => &CoordinateField::ALL,
            LookupMode::Descriptor => &[
                CoordinateField::Group,
                CoordinateField::Name,
                CoordinateField::Version,
            ],
        }
    }
}

/// An external lookup whose unset coordinate fields come from the operator
pub struct InteractiveLookup {
    partial: PartialCoordinate,
    prompter: Option<Arc<dyn CoordinatePrompter>>,
    mode: LookupMode,
    resolver: Arc<dyn ArtifactResolver>,
    store: Arc<dyn DescriptorStore>,
    context: ResolutionContext,
}

impl InteractiveLookup {
    pub fn new(
        partial: PartialCoordinate,
        mode: LookupMode,
        resolver: Arc<dyn ArtifactResolver>,
        store: Arc<dyn DescriptorStore>,
        context: ResolutionContext,
    ) -> Self {
        Self {
            partial,
            prompter: None,
            mode,
            resolver,
            store,
            context,
        }
    }

    pub fn with_prompter(mut self, prompter: Arc<dyn CoordinatePrompter>) -> Self {
        self.prompter = Some(prompter);
        self
    }
}

impl ArtifactSetBuilder for InteractiveLookup {
    fn build(&self) -> DeployResult<ArtifactSet> {
        let coordinate = self
            .partial
            .complete(self.prompter.as_deref(), self.mode.fields())?;

        match self.mode {
            LookupMode::Transitive => TransitiveLookup::new(
                coordinate,
                Arc::clone(&self.resolver),
                self.context.clone(),
            )
            .build(),
            LookupMode::Descriptor => DescriptorLookup::new(
                coordinate.group,
                coordinate.name,
                coordinate.version,
                Arc::clone(&self.resolver),
                Arc::clone(&self.store),
                self.context.clone(),
            )
            .build(),
        }
    }
}
