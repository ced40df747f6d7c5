//! Error types for taxon
//!
//! Uses `thiserror` for library errors. `TreeError` carries the recoverable
//! editing failures the state machine reports back to the user; `TaxonError`
//! wraps everything the outer adapters can hit (files, JSON, config).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tree mutations
pub type TreeResult<T> = Result<T, TreeError>;

/// Result type alias for adapter operations
pub type TaxonResult<T> = Result<T, TaxonError>;

/// Coarse classification of a [`TreeError`], stable for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateName,
    NotFound,
    WouldCreateCycle,
    SelfParent,
    UnknownCategory,
    EmptyName,
    ParentMismatch,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::DuplicateName => "duplicate name",
            ErrorKind::NotFound => "not found",
            ErrorKind::WouldCreateCycle => "would create cycle",
            ErrorKind::SelfParent => "self parent",
            ErrorKind::UnknownCategory => "unknown category",
            ErrorKind::EmptyName => "empty name",
            ErrorKind::ParentMismatch => "parent mismatch",
        };
        f.write_str(label)
    }
}

/// A rejected mutation of the category store or content index.
///
/// Every variant is recoverable; none leaves the store partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A category or content item with this name already exists
    #[error("'{name}' already exists")]
    DuplicateName { name: String },

    /// Referenced category or content item does not exist
    #[error("'{name}' not found")]
    NotFound { name: String },

    /// Reparenting would make a category its own ancestor
    #[error("cannot move '{name}' under '{parent}': '{parent}' is inside '{name}'")]
    WouldCreateCycle { name: String, parent: String },

    /// A category was asked to become its own parent
    #[error("'{name}' cannot be its own parent")]
    SelfParent { name: String },

    /// A content item lists a category the store does not know
    #[error("unknown category '{category}' for '{item}'")]
    UnknownCategory { item: String, category: String },

    /// Name is blank after trimming
    #[error("name must not be empty")]
    EmptyName,

    /// Reorder was requested among siblings the category does not belong to
    #[error("'{name}' is not a child of {expected}")]
    ParentMismatch { name: String, expected: String },
}

impl TreeError {
    /// The coarse kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TreeError::DuplicateName { .. } => ErrorKind::DuplicateName,
            TreeError::NotFound { .. } => ErrorKind::NotFound,
            TreeError::WouldCreateCycle { .. } => ErrorKind::WouldCreateCycle,
            TreeError::SelfParent { .. } => ErrorKind::SelfParent,
            TreeError::UnknownCategory { .. } => ErrorKind::UnknownCategory,
            TreeError::EmptyName => ErrorKind::EmptyName,
            TreeError::ParentMismatch { .. } => ErrorKind::ParentMismatch,
        }
    }

    pub(crate) fn not_found(name: &str) -> Self {
        TreeError::NotFound {
            name: name.to_string(),
        }
    }

    pub(crate) fn duplicate(name: &str) -> Self {
        TreeError::DuplicateName {
            name: name.to_string(),
        }
    }
}

/// Errors raised by the adapters around the editing core
#[derive(Error, Debug)]
pub enum TaxonError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot JSON could not be parsed or serialized
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot content violates a tree invariant
    #[error("invalid snapshot {file}: {source}")]
    InvalidSnapshot {
        file: PathBuf,
        #[source]
        source: TreeError,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Logger could not be started
    #[error("logging setup failed: {0}")]
    Logging(String),

    /// A tree mutation was rejected
    #[error(transparent)]
    Tree(#[from] TreeError),
}
