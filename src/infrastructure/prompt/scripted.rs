//! Scripted Prompter
//!
//! Replays a fixed list of answers. Used by tests and by automation that
//! drives the editor without a terminal.

use std::collections::{BTreeSet, VecDeque};

use log::debug;

use crate::domain::ports::{ChoiceOption, Prompter};

/// Prompter answering from a queue; `None` entries (or an empty queue) cancel
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    asked: Vec<String>,
    offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
            ..Self::default()
        }
    }

    /// Prompter that never cancels
    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(answers.into_iter().map(Some))
    }

    /// Titles of every prompt shown so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Keys offered by each choice prompt, after exclusions
    pub fn offered(&self) -> &[Vec<String>] {
        &self.offered
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_for_string(&mut self, title: &str, _default: &str) -> Option<String> {
        self.asked.push(title.to_string());
        self.answers.pop_front().flatten()
    }

    fn prompt_for_choice(
        &mut self,
        title: &str,
        options: &[ChoiceOption],
        excluding: &BTreeSet<String>,
    ) -> Option<String> {
        self.asked.push(title.to_string());
        let keys: Vec<String> = options
            .iter()
            .filter(|option| !excluding.contains(&option.key))
            .map(|option| option.key.clone())
            .collect();
        let answer = self.answers.pop_front().flatten();
        let picked = answer.filter(|key| keys.contains(key));
        if picked.is_none() {
            debug!("event=scripted_choice_unavailable title={:?}", title);
        }
        self.offered.push(keys);
        picked
    }
}
