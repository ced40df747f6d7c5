//! Interactive Prompter
//!
//! Asks the user through `dialoguer` dialogs on stderr. The caller is
//! responsible for leaving raw mode before a prompt is answered.
//!
//! `dialoguer` text input has no cancel key, so an empty answer stands in
//! for one.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Input};
use log::warn;
use std::collections::BTreeSet;

use crate::domain::ports::{ChoiceOption, Prompter};

/// Prompter backed by terminal dialogs
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn prompt_for_string(&mut self, title: &str, default: &str) -> Option<String> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(title)
            .with_initial_text(default)
            .allow_empty(true)
            .interact_text();
        match result {
            Ok(text) => non_blank(text),
            Err(err) => {
                warn!("event=prompt_failed title={:?} error={}", title, err);
                None
            }
        }
    }

    fn prompt_for_choice(
        &mut self,
        title: &str,
        options: &[ChoiceOption],
        excluding: &BTreeSet<String>,
    ) -> Option<String> {
        let offered: Vec<&ChoiceOption> = options
            .iter()
            .filter(|option| !excluding.contains(&option.key))
            .collect();
        if offered.is_empty() {
            return None;
        }
        let labels: Vec<&str> = offered.iter().map(|option| option.label.as_str()).collect();

        let result = FuzzySelect::with_theme(&self.theme)
            .with_prompt(title)
            .items(&labels)
            .default(0)
            .interact_opt();
        match result {
            Ok(Some(index)) => offered.get(index).map(|option| option.key.clone()),
            Ok(None) => None,
            Err(err) => {
                warn!("event=prompt_failed title={:?} error={}", title, err);
                None
            }
        }
    }
}

/// Blank text input is the user backing out of the dialog
fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
