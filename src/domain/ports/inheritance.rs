//! Inheritance Assembler Port

use crate::domain::entities::DescriptorDocument;

/// Overlays a child descriptor onto its merged parent (child wins).
pub trait InheritanceAssembler: Send + Sync {
    fn assemble(&self, child: &DescriptorDocument, parent: &DescriptorDocument)
        -> DescriptorDocument;
}
