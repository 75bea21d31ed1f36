//! Console prompting

mod console;

pub use console::DialoguerPrompter;
