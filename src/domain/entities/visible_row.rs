//! VisibleRow - one line of the flattened tree
//!
//! Rows are derived on every structural change or expand/collapse toggle and
//! never persisted. A row's index in the flattened sequence is how the editor
//! and the projector address the current selection.

/// A visible row of the flattened category tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisibleRow {
    /// Category name
    pub key: String,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Whether this category has children
    pub has_children: bool,
    /// Whether this category's children are currently shown
    pub is_expanded: bool,
}
