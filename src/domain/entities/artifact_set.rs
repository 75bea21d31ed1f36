//! Artifact set - the candidate artifacts of one deployment run.
//!
//! Deduplicated by coordinate. Insertion order is preserved and the first
//! handle inserted for a coordinate wins.

use std::collections::HashSet;

use crate::domain::value_objects::Coordinate;

use super::ArtifactHandle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    handles: Vec<ArtifactHandle>,
    seen: HashSet<Coordinate>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a handle; returns false when the coordinate is already present
    pub fn insert(&mut self, handle: ArtifactHandle) -> bool {
        if !self.seen.insert(handle.coordinate().clone()) {
            return false;
        }
        self.handles.push(handle);
        true
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.seen.contains(coordinate)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactHandle> {
        self.handles.iter()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = &Coordinate> {
        self.handles.iter().map(ArtifactHandle::coordinate)
    }

    pub fn into_handles(self) -> Vec<ArtifactHandle> {
        self.handles
    }
}

impl FromIterator<ArtifactHandle> for ArtifactSet {
    fn from_iter<T: IntoIterator<Item = ArtifactHandle>>(iter: T) -> Self {
        let mut set = ArtifactSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<ArtifactHandle> for ArtifactSet {
    fn extend<T: IntoIterator<Item = ArtifactHandle>>(&mut self, iter: T) {
        for handle in iter {
            self.insert(handle);
        }
    }
}
