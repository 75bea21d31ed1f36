//! Descriptor Store Port
//!
//! Reads descriptor documents and writes standalone copies of them. The
//! serialization format belongs to the implementation.

use std::path::Path;

use tempfile::TempPath;

use crate::domain::entities::DescriptorDocument;
use crate::error::DescriptorError;

pub trait DescriptorStore: Send + Sync {
    /// Load a bare descriptor (no inheritance applied)
    fn load(&self, path: &Path) -> Result<DescriptorDocument, DescriptorError>;

    /// Serialize to a new temporary file, removed when the returned path is dropped
    fn write_temporary(&self, descriptor: &DescriptorDocument) -> std::io::Result<TempPath>;

    /// Render the descriptor as text
    fn render(&self, descriptor: &DescriptorDocument) -> std::io::Result<String>;
}
