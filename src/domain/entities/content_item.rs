//! ContentItem entity - an article attached to categories by name
//!
//! Content items are leaves: they are never part of the category hierarchy
//! and only hold weak, name-based references to the categories they are
//! filed under.

use std::collections::BTreeSet;

/// A content item linked to zero or more categories
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentItem {
    /// Unique key
    pub name: String,
    /// Names of the categories this item is filed under
    pub categories: BTreeSet<String>,
    /// Archived items stay linked but are shown as archived
    pub archived: bool,
}

impl ContentItem {
    pub fn new<I, S>(name: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            archived: false,
        }
    }

    /// Mark archived (builder style)
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn is_linked_to(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Categories as a comma separated list, in name order
    pub fn categories_label(&self) -> String {
        self.categories
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
