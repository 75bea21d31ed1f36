//! TOML Descriptor Store
//!
//! Implements the DescriptorStore port with descriptors stored as TOML
//! documents. Unknown keys are tolerated and logged.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::TempPath;
use tracing::warn;

use crate::domain::entities::DescriptorDocument;
use crate::domain::ports::DescriptorStore;
use crate::error::DescriptorError;

/// Prefix and suffix of flattened descriptor files
const TEMP_PREFIX: &str = "flattened";
const TEMP_SUFFIX: &str = ".pom.toml";

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlDescriptorStore;

impl TomlDescriptorStore {
    pub fn new() -> Self {
        Self
    }

    /// Parse descriptor text; `path` is only used for diagnostics
    pub fn parse(&self, content: &str, path: &Path) -> Result<DescriptorDocument, DescriptorError> {
        let mut unknown_keys: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(content);

        let document: DescriptorDocument = serde_ignored::deserialize(deserializer, |p| {
            unknown_keys.push(p.to_string());
        })
        .map_err(|e| DescriptorError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        for key in unknown_keys {
            warn!(path = %path.display(), key = %key, "unknown descriptor key ignored");
        }

        Ok(document)
    }
}

impl DescriptorStore for TomlDescriptorStore {
    fn load(&self, path: &Path) -> Result<DescriptorDocument, DescriptorError> {
        let content = fs::read_to_string(path).map_err(|source| DescriptorError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&content, path)
    }

    fn write_temporary(&self, descriptor: &DescriptorDocument) -> io::Result<TempPath> {
        let rendered = self.render(descriptor)?;
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile()?;
        file.write_all(rendered.as_bytes())?;
        file.flush()?;
        Ok(file.into_temp_path())
    }

    fn render(&self, descriptor: &DescriptorDocument) -> io::Result<String> {
        toml::to_string_pretty(descriptor).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
