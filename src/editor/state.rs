//! Editor modes and the transient status line.

use crate::editor::content_form::ContentForm;
use crate::error::{ErrorKind, TreeError};

/// Value the editor is suspended on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingPrompt {
    /// Waiting for the new parent of `target`
    Reparent { target: String },
    /// Waiting for the name of a new category under `parent`
    AddCategory { parent: Option<String> },
}

/// Current interaction mode, with the data that mode owns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Browsing,
    RenamingNode {
        target: String,
        buffer: String,
    },
    EditingContentField(ContentForm),
    /// Context menu anchored under a row
    MenuOpen {
        row: usize,
    },
    Dragging {
        source: usize,
    },
    Prompting(PendingPrompt),
}

impl EditMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            EditMode::Browsing => ModeKind::Browsing,
            EditMode::RenamingNode { .. } => ModeKind::RenamingNode,
            EditMode::EditingContentField(_) => ModeKind::EditingContentField,
            EditMode::MenuOpen { .. } => ModeKind::MenuOpen,
            EditMode::Dragging { .. } => ModeKind::Dragging,
            EditMode::Prompting(_) => ModeKind::Prompting,
        }
    }

    /// True while a text buffer has keyboard focus
    pub fn is_text_entry(&self) -> bool {
        matches!(
            self,
            EditMode::RenamingNode { .. } | EditMode::EditingContentField(_)
        )
    }
}

/// Data-free mirror of [`EditMode`] for adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Browsing,
    RenamingNode,
    EditingContentField,
    MenuOpen,
    Dragging,
    Prompting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One-event status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub level: StatusLevel,
    pub message: String,
    /// Set for rejected operations
    pub error: Option<ErrorKind>,
}

impl StatusLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            message: message.into(),
            error: None,
        }
    }

    pub fn error(err: &TreeError) -> Self {
        Self {
            level: StatusLevel::Error,
            message: err.to_string(),
            error: Some(err.kind()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}
