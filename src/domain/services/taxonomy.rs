//! Taxonomy - the category store and the content index mutated together
//!
//! Renaming or deleting a category has to touch both collections. Doing both
//! halves inside one call keeps the pair consistent: either the store call
//! fails and nothing changes, or both sides are updated before returning.

use crate::domain::entities::ContentItem;
use crate::domain::services::{CategoryStore, ContentIndex};
use crate::error::TreeResult;

/// Categories plus the content filed under them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    pub categories: CategoryStore,
    pub contents: ContentIndex,
}

impl Taxonomy {
    pub fn new(categories: CategoryStore, contents: ContentIndex) -> Self {
        Self {
            categories,
            contents,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.contents.is_empty()
    }

    /// Add a category appended after its siblings. Returns the stored name.
    pub fn add_category(&mut self, name: &str, parent: Option<&str>) -> TreeResult<String> {
        self.categories.add(name, parent, None)
    }

    /// Move a category under `parent`, or to the top level
    pub fn reparent_category(&mut self, name: &str, parent: Option<&str>) -> TreeResult<()> {
        self.categories.reparent(name, parent)
    }

    /// Move a category to `position` among its current siblings
    pub fn reorder_category(
        &mut self,
        name: &str,
        position: usize,
        among: Option<&str>,
    ) -> TreeResult<()> {
        self.categories.reorder(name, position, among)
    }

    /// Rename a category and rewrite every content reference to it
    pub fn rename_category(&mut self, old: &str, new: &str) -> TreeResult<String> {
        let stored = self.categories.rename(old, new)?;
        if stored != old {
            self.contents.on_category_renamed(old, &stored);
        }
        Ok(stored)
    }

    /// Delete a category, promote its children and scrub content references
    pub fn remove_category(&mut self, name: &str) -> TreeResult<()> {
        self.categories.remove(name)?;
        self.contents.on_category_removed(name);
        Ok(())
    }

    /// Insert or overwrite a content item, validated against the store
    pub fn upsert_content(&mut self, item: ContentItem) -> TreeResult<()> {
        self.contents.upsert(item, &self.categories)
    }

    /// Replace the content item stored as `previous`, validated against the store
    pub fn replace_content(&mut self, previous: &str, item: ContentItem) -> TreeResult<()> {
        self.contents.replace(previous, item, &self.categories)
    }

    /// Content items filed under `category`, in name order
    pub fn content_for(&self, category: &str) -> Vec<&ContentItem> {
        self.contents
            .iter()
            .filter(|item| item.is_linked_to(category))
            .collect()
    }
}
