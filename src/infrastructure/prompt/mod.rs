//! Prompter implementations

mod interactive;
mod scripted;

pub use interactive::DialoguerPrompter;
pub use scripted::ScriptedPrompter;
