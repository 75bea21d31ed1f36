//! Repository Layouts
//!
//! - `default`: `group/as/path/name/version/name-version[-classifier].ext`
//! - `legacy`: `group/types/name-version[-classifier].ext`
//!
//! Timestamped snapshot versions (`1.0-20240101.120000-3`) keep their
//! `-SNAPSHOT` directory in the default layout.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::ports::{LayoutRegistry, LayoutStrategy};
use crate::domain::value_objects::{Coordinate, DEFAULT_LAYOUT};

pub const LEGACY_LAYOUT: &str = "legacy";

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

fn file_name(coordinate: &Coordinate) -> String {
    match &coordinate.classifier {
        Some(classifier) => format!(
            "{}-{}-{}.{}",
            coordinate.name,
            coordinate.version,
            classifier,
            coordinate.extension()
        ),
        None => format!(
            "{}-{}.{}",
            coordinate.name,
            coordinate.version,
            coordinate.extension()
        ),
    }
}

/// `1.0-20240101.120000-3` -> `1.0-SNAPSHOT`; other versions unchanged
pub fn snapshot_base_version(version: &str) -> String {
    let Some((rest, build)) = version.rsplit_once('-') else {
        return version.to_string();
    };
    let Some((base, stamp)) = rest.rsplit_once('-') else {
        return version.to_string();
    };
    let is_stamp = stamp.len() == 15
        && stamp.as_bytes()[8] == b'.'
        && stamp
            .chars()
            .enumerate()
            .all(|(i, c)| i == 8 || c.is_ascii_digit());
    let is_build = !build.is_empty() && build.chars().all(|c| c.is_ascii_digit());

    if is_stamp && is_build {
        format!("{base}{SNAPSHOT_SUFFIX}")
    } else {
        version.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLayout;

impl LayoutStrategy for DefaultLayout {
    fn name(&self) -> &str {
        DEFAULT_LAYOUT
    }

    fn path_of(&self, coordinate: &Coordinate) -> PathBuf {
        let mut path: PathBuf = coordinate.group.split('.').collect();
        path.push(&coordinate.name);
        path.push(snapshot_base_version(&coordinate.version));
        path.push(file_name(coordinate));
        path
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyLayout;

impl LayoutStrategy for LegacyLayout {
    fn name(&self) -> &str {
        LEGACY_LAYOUT
    }

    fn path_of(&self, coordinate: &Coordinate) -> PathBuf {
        let mut path = PathBuf::from(&coordinate.group);
        path.push(format!("{}s", coordinate.artifact_type));
        path.push(file_name(coordinate));
        path
    }
}

/// Registry over a fixed set of layouts
pub struct StaticLayoutRegistry {
    layouts: BTreeMap<String, Arc<dyn LayoutStrategy>>,
}

impl StaticLayoutRegistry {
    /// Registry with the `default` and `legacy` layouts
    pub fn new() -> Self {
        Self::empty()
            .with_layout(Arc::new(DefaultLayout))
            .with_layout(Arc::new(LegacyLayout))
    }

    pub fn empty() -> Self {
        Self {
            layouts: BTreeMap::new(),
        }
    }

    pub fn with_layout(mut self, layout: Arc<dyn LayoutStrategy>) -> Self {
        self.layouts.insert(layout.name().to_string(), layout);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layouts.keys().map(String::as_str)
    }
}

impl Default for StaticLayoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutRegistry for StaticLayoutRegistry {
    fn lookup(&self, name: &str) -> Option<Arc<dyn LayoutStrategy>> {
        self.layouts.get(name).cloned()
    }
}
