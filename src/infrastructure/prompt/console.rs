//! Terminal prompter built on dialoguer

use dialoguer::Input;
use tracing::debug;

use crate::domain::ports::CoordinatePrompter;
use crate::domain::value_objects::CoordinateField;
use crate::error::PromptError;

/// Asks the operator for missing coordinate fields on the terminal.
///
/// Only wire this in when stdin is a terminal; `interact_text` fails
/// otherwise.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn label(field: CoordinateField) -> String {
    if field.is_required() {
        format!("Define value for {field}")
    } else {
        format!("Define value for {field} (optional)")
    }
}

impl CoordinatePrompter for DialoguerPrompter {
    fn prompt(&self, field: CoordinateField, current: Option<&str>) -> Result<String, PromptError> {
        let mut input = Input::<String>::new()
            .with_prompt(label(field))
            .allow_empty(true);
        if let Some(current) = current {
            input = input.default(current.to_string());
        }

        let answer = input.interact_text().map_err(|e| PromptError {
            field,
            message: e.to_string(),
        })?;
        debug!(field = %field, "coordinate field supplied interactively");
        Ok(answer.trim().to_string())
    }
}
