//! Prompter Port
//!
//! The editing core never collects free text or choices itself. When it
//! needs a value from the user it publishes a `PromptRequest` and suspends;
//! an implementation of this trait (a blocking dialog, a scripted answer
//! list, a web modal) produces the answer or a cancellation.

use std::collections::BTreeSet;

/// Choice key that stands for "no parent" (the root level).
///
/// Empty names are rejected by the store, so the key cannot collide with a
/// category.
pub const ROOT_CHOICE_KEY: &str = "";

/// One selectable entry of a choice prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value returned when this option is picked
    pub key: String,
    /// Text shown to the user
    pub label: String,
}

impl ChoiceOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A value the editor is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    /// Free text with a pre-filled default
    Text { title: String, default: String },
    /// One key out of `options`; keys in `excluding` must not be offered
    Choice {
        title: String,
        options: Vec<ChoiceOption>,
        excluding: BTreeSet<String>,
    },
}

impl PromptRequest {
    pub fn title(&self) -> &str {
        match self {
            PromptRequest::Text { title, .. } | PromptRequest::Choice { title, .. } => title,
        }
    }

    /// Ask `prompter` for the answer to this request
    pub fn ask(&self, prompter: &mut dyn Prompter) -> Option<String> {
        match self {
            PromptRequest::Text { title, default } => prompter.prompt_for_string(title, default),
            PromptRequest::Choice {
                title,
                options,
                excluding,
            } => prompter.prompt_for_choice(title, options, excluding),
        }
    }
}

/// Source of user-supplied values.
///
/// Implementations:
/// - `DialoguerPrompter`: terminal dialogs
/// - `ScriptedPrompter`: canned answers, for tests and automation
pub trait Prompter {
    /// Ask for a string. `None` means the user cancelled.
    fn prompt_for_string(&mut self, title: &str, default: &str) -> Option<String>;

    /// Ask for one of `options`, never offering a key in `excluding`.
    /// Returns the chosen key, or `None` when the user cancelled.
    fn prompt_for_choice(
        &mut self,
        title: &str,
        options: &[ChoiceOption],
        excluding: &BTreeSet<String>,
    ) -> Option<String>;
}
