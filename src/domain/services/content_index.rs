//! Content index - content items and the categories they are filed under
//!
//! The index has no hierarchy and no back-reference to the category store.
//! Operations that need to know which categories exist take the store as an
//! argument and validate against it at call time.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::domain::entities::{normalize_name, ContentItem};
use crate::domain::services::CategoryStore;
use crate::error::{TreeError, TreeResult};

/// Name-keyed storage of content items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentIndex {
    items: BTreeMap<String, ContentItem>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ContentItem> {
        self.items.get(name)
    }

    /// All items in name order
    pub fn iter(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.values()
    }

    /// Names of the items filed under `category`
    pub fn linked_to(&self, category: &str) -> BTreeSet<String> {
        self.items
            .values()
            .filter(|item| item.is_linked_to(category))
            .map(|item| item.name.clone())
            .collect()
    }

    /// Insert or overwrite an item keyed by its own name.
    ///
    /// Every listed category must exist in `store`; otherwise nothing is
    /// written.
    pub fn upsert(&mut self, item: ContentItem, store: &CategoryStore) -> TreeResult<()> {
        let item = validate(item, store)?;
        debug!(
            "event=content_upserted name={} categories={}",
            item.name,
            item.categories.len()
        );
        self.items.insert(item.name.clone(), item);
        Ok(())
    }

    /// Replace the item currently stored as `previous` with `item`, which may
    /// carry a new name.
    ///
    /// Fails with `DuplicateName` when the new name belongs to another item.
    /// Validation happens before any write.
    pub fn replace(
        &mut self,
        previous: &str,
        item: ContentItem,
        store: &CategoryStore,
    ) -> TreeResult<()> {
        if !self.items.contains_key(previous) {
            return Err(TreeError::not_found(previous));
        }
        let item = validate(item, store)?;
        if item.name != previous && self.items.contains_key(&item.name) {
            return Err(TreeError::duplicate(&item.name));
        }

        self.items.remove(previous);
        debug!(
            "event=content_replaced previous={} name={}",
            previous, item.name
        );
        self.items.insert(item.name.clone(), item);
        Ok(())
    }

    /// Remove an item, returning it
    pub fn remove(&mut self, name: &str) -> TreeResult<ContentItem> {
        self.items
            .remove(name)
            .ok_or_else(|| TreeError::not_found(name))
    }

    /// Rewrite references to a renamed category. No-op when nothing points at `old`.
    pub fn on_category_renamed(&mut self, old: &str, new: &str) {
        let mut rewritten = 0usize;
        for item in self.items.values_mut() {
            if item.categories.remove(old) {
                item.categories.insert(new.to_string());
                rewritten += 1;
            }
        }
        if rewritten > 0 {
            debug!(
                "event=content_refs_renamed from={} to={} items={}",
                old, new, rewritten
            );
        }
    }

    /// Drop references to a deleted category. Items left with no categories stay.
    pub fn on_category_removed(&mut self, category: &str) {
        let mut dropped = 0usize;
        for item in self.items.values_mut() {
            if item.categories.remove(category) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(
                "event=content_refs_dropped category={} items={}",
                category, dropped
            );
        }
    }
}

fn validate(item: ContentItem, store: &CategoryStore) -> TreeResult<ContentItem> {
    let name = normalize_name(&item.name)?;
    let categories = item
        .categories
        .iter()
        .map(|c| normalize_name(c))
        .collect::<TreeResult<BTreeSet<String>>>()?;
    if let Some(unknown) = categories.iter().find(|c| !store.contains(c)) {
        return Err(TreeError::UnknownCategory {
            item: name,
            category: unknown.clone(),
        });
    }
    Ok(ContentItem {
        name,
        categories,
        ..item
    })
}
