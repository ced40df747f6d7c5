//! Category entity - one named node of the taxonomy
//!
//! Categories are stored flat and keyed by name. The parent link and the
//! sibling order are plain data here; the invariants over them (parent
//! exists, no cycles, unique sibling order) are owned by `CategoryStore`.

use std::cmp::Ordering;

use crate::error::{TreeError, TreeResult};

/// A category in the taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    /// Unique key
    pub name: String,
    /// Parent category name, `None` for roots
    pub parent: Option<String>,
    /// Position among siblings sharing the same parent
    pub order: i64,
}

impl Category {
    /// Create a root category with order 0
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            order: 0,
        }
    }

    /// Set the parent (builder style)
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the sibling order (builder style)
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Total display ordering among siblings: `order`, then `name`.
    pub fn sibling_cmp(&self, other: &Category) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Trim a user-supplied name and reject blanks.
pub fn normalize_name(raw: &str) -> TreeResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TreeError::EmptyName);
    }
    Ok(trimmed.to_string())
}
