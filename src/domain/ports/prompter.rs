//! Coordinate Prompter Port
//!
//! Supplies coordinate fields the operator left unset. Injected so that
//! automated runs never block on a console.

use crate::domain::value_objects::CoordinateField;
use crate::error::PromptError;

pub trait CoordinatePrompter: Send + Sync {
    /// Ask for `field`, offering `current` as the default.
    ///
    /// An empty answer means "keep the current value".
    fn prompt(&self, field: CoordinateField, current: Option<&str>) -> Result<String, PromptError>;
}
