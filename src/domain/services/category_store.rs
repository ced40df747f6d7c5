//! Category store - the authoritative map of category name to parent and order
//!
//! # Invariants
//! - Names are unique; every mutation validates before it touches the map,
//!   so a rejected call leaves the store unchanged.
//! - A set `parent` always names an existing category.
//! - The parent relation is acyclic; `reparent` checks before committing.
//! - Sibling order is unique within a parent group. Display order is
//!   `order`, then `name`.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::debug;

use crate::domain::entities::{normalize_name, Category};
use crate::error::{TreeError, TreeResult};

/// Flat, name-keyed storage of categories.
///
/// Parent and child traversal is derived on demand; there is no live object
/// graph to keep in sync after a rename or delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStore {
    categories: BTreeMap<String, Category>,
}

impl CategoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded records.
    ///
    /// Names and parent references are trimmed alike. Rejects duplicate or
    /// blank names, unknown parents and cycles, then renumbers every sibling
    /// group contiguously (ties resolved by name).
    pub fn from_categories(records: impl IntoIterator<Item = Category>) -> TreeResult<Self> {
        let mut categories = BTreeMap::new();
        for record in records {
            let name = normalize_name(&record.name)?;
            if categories.contains_key(&name) {
                return Err(TreeError::duplicate(&name));
            }
            let parent = record.parent.as_deref().map(normalize_name).transpose()?;
            categories.insert(
                name.clone(),
                Category {
                    name,
                    parent,
                    order: record.order,
                },
            );
        }

        let mut store = Self { categories };
        for category in store.categories.values() {
            let Some(parent) = category.parent.as_deref() else {
                continue;
            };
            if parent == category.name {
                return Err(TreeError::SelfParent {
                    name: category.name.clone(),
                });
            }
            if !store.contains(parent) {
                return Err(TreeError::not_found(parent));
            }
        }
        for category in store.categories.values() {
            if let Some(parent) = category.parent.as_deref() {
                if store.is_ancestor_or_self(&category.name, parent) {
                    return Err(TreeError::WouldCreateCycle {
                        name: category.name.clone(),
                        parent: parent.to_string(),
                    });
                }
            }
        }
        store.normalize_orders();
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// All categories in name order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// All category names in name order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Parent of `name`, `None` for roots and unknown names
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.categories.get(name)?.parent.as_deref()
    }

    /// Children of `parent` (or the roots for `None`) in display order
    pub fn children_of(&self, parent: Option<&str>) -> Vec<String> {
        let mut children: Vec<&Category> = self
            .categories
            .values()
            .filter(|c| c.parent.as_deref() == parent)
            .collect();
        children.sort_by(|a, b| a.sibling_cmp(b));
        children.into_iter().map(|c| c.name.clone()).collect()
    }

    /// Every parent group with its children in display order.
    ///
    /// Lets a full traversal avoid rescanning the map once per node.
    pub fn children_index(&self) -> HashMap<Option<&str>, Vec<&Category>> {
        let mut index: HashMap<Option<&str>, Vec<&Category>> = HashMap::new();
        for category in self.categories.values() {
            index
                .entry(category.parent.as_deref())
                .or_default()
                .push(category);
        }
        for children in index.values_mut() {
            children.sort_by(|a, b| a.sibling_cmp(b));
        }
        index
    }

    pub fn has_children(&self, name: &str) -> bool {
        self.categories
            .values()
            .any(|c| c.parent.as_deref() == Some(name))
    }

    /// Ancestors of `name`, nearest first
    pub fn ancestors_of(&self, name: &str) -> Vec<String> {
        let mut ancestors = Vec::new();
        let mut cursor = self.parent_of(name);
        while let Some(current) = cursor {
            // A well-formed store never loops; the bound keeps a corrupted one finite.
            if ancestors.len() > self.categories.len() {
                break;
            }
            ancestors.push(current.to_string());
            cursor = self.parent_of(current);
        }
        ancestors
    }

    /// Every category below `name`
    pub fn descendants_of(&self, name: &str) -> BTreeSet<String> {
        let index = self.children_index();
        let mut found = BTreeSet::new();
        let mut pending = vec![name];
        while let Some(current) = pending.pop() {
            for child in index.get(&Some(current)).into_iter().flatten() {
                if found.insert(child.name.clone()) {
                    pending.push(child.name.as_str());
                }
            }
        }
        found
    }

    /// Add a category.
    ///
    /// Without an explicit `order` the category is appended after its
    /// siblings. An explicit order that collides shifts the later siblings
    /// down by one. Returns the stored (trimmed) name.
    pub fn add(
        &mut self,
        name: &str,
        parent: Option<&str>,
        order: Option<i64>,
    ) -> TreeResult<String> {
        let name = normalize_name(name)?;
        if self.contains(&name) {
            return Err(TreeError::duplicate(&name));
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(TreeError::not_found(parent));
            }
        }

        let order = match order {
            Some(order) => {
                self.make_room(parent, order);
                order
            }
            None => self.next_order(parent),
        };
        debug!(
            "event=category_added name={} parent={:?} order={}",
            name, parent, order
        );
        self.categories.insert(
            name.clone(),
            Category {
                name: name.clone(),
                parent: parent.map(str::to_string),
                order,
            },
        );
        Ok(name)
    }

    /// Re-key `old` as `new` and repoint its children.
    ///
    /// Content references are not touched here; `Taxonomy::rename_category`
    /// pairs this with the content index rewrite. Returns the stored name.
    pub fn rename(&mut self, old: &str, new: &str) -> TreeResult<String> {
        if !self.contains(old) {
            return Err(TreeError::not_found(old));
        }
        let new = normalize_name(new)?;
        if new == old {
            return Ok(new);
        }
        if self.contains(&new) {
            return Err(TreeError::duplicate(&new));
        }

        let Some(mut category) = self.categories.remove(old) else {
            return Err(TreeError::not_found(old));
        };
        category.name = new.clone();
        self.categories.insert(new.clone(), category);
        for category in self.categories.values_mut() {
            if category.parent.as_deref() == Some(old) {
                category.parent = Some(new.clone());
            }
        }
        debug!("event=category_renamed from={} to={}", old, new);
        Ok(new)
    }

    /// Move `name` under `new_parent` (or to the root level), appended after
    /// the new siblings.
    pub fn reparent(&mut self, name: &str, new_parent: Option<&str>) -> TreeResult<()> {
        if !self.contains(name) {
            return Err(TreeError::not_found(name));
        }
        if let Some(parent) = new_parent {
            if parent == name {
                return Err(TreeError::SelfParent {
                    name: name.to_string(),
                });
            }
            if !self.contains(parent) {
                return Err(TreeError::not_found(parent));
            }
            if self.is_ancestor_or_self(name, parent) {
                return Err(TreeError::WouldCreateCycle {
                    name: name.to_string(),
                    parent: parent.to_string(),
                });
            }
        }
        if self.parent_of(name) == new_parent {
            return Ok(());
        }

        let order = self.next_order(new_parent);
        if let Some(category) = self.categories.get_mut(name) {
            category.parent = new_parent.map(str::to_string);
            category.order = order;
        }
        debug!(
            "event=category_reparented name={} parent={:?} order={}",
            name, new_parent, order
        );
        Ok(())
    }

    /// Move `name` to `position` among the children of `among`.
    ///
    /// `among` must be the category's current parent; moving between parents
    /// is a reparent. The sibling group is renumbered `0..n`.
    pub fn reorder(&mut self, name: &str, position: usize, among: Option<&str>) -> TreeResult<()> {
        let Some(category) = self.categories.get(name) else {
            return Err(TreeError::not_found(name));
        };
        if category.parent.as_deref() != among {
            return Err(TreeError::ParentMismatch {
                name: name.to_string(),
                expected: describe_parent(among),
            });
        }

        let mut siblings = self.children_of(among);
        siblings.retain(|s| s != name);
        let position = position.min(siblings.len());
        siblings.insert(position, name.to_string());
        self.assign_orders(&siblings);
        debug!(
            "event=category_reordered name={} parent={:?} position={}",
            name, among, position
        );
        Ok(())
    }

    /// Delete `name`, promoting its children to the root level.
    ///
    /// Promoted children keep their relative order and are placed after the
    /// existing roots. Returns the removed category.
    pub fn remove(&mut self, name: &str) -> TreeResult<Category> {
        let children = self.children_of(Some(name));
        let Some(removed) = self.categories.remove(name) else {
            return Err(TreeError::not_found(name));
        };

        let mut next = self.next_order(None);
        for child in &children {
            if let Some(category) = self.categories.get_mut(child) {
                category.parent = None;
                category.order = next;
                next += 1;
            }
        }
        debug!(
            "event=category_removed name={} promoted={}",
            name,
            children.len()
        );
        Ok(removed)
    }

    /// True when `candidate` is `name` or lies below it
    fn is_ancestor_or_self(&self, name: &str, candidate: &str) -> bool {
        if candidate == name {
            return true;
        }
        self.ancestors_of(candidate).iter().any(|a| a == name)
    }

    fn next_order(&self, parent: Option<&str>) -> i64 {
        self.categories
            .values()
            .filter(|c| c.parent.as_deref() == parent)
            .map(|c| c.order)
            .max()
            .map_or(0, |max| max + 1)
    }

    fn make_room(&mut self, parent: Option<&str>, order: i64) {
        let collides = self
            .categories
            .values()
            .any(|c| c.parent.as_deref() == parent && c.order == order);
        if !collides {
            return;
        }
        for category in self.categories.values_mut() {
            if category.parent.as_deref() == parent && category.order >= order {
                category.order += 1;
            }
        }
    }

    fn assign_orders(&mut self, ordered: &[String]) {
        for (position, name) in ordered.iter().enumerate() {
            if let Some(category) = self.categories.get_mut(name) {
                category.order = position as i64;
            }
        }
    }

    fn normalize_orders(&mut self) {
        let groups: Vec<Vec<String>> = self
            .children_index()
            .into_values()
            .map(|children| children.into_iter().map(|c| c.name.clone()).collect())
            .collect();
        for group in groups {
            self.assign_orders(&group);
        }
    }
}

fn describe_parent(parent: Option<&str>) -> String {
    match parent {
        Some(parent) => format!("'{}'", parent),
        None => "the root level".to_string(),
    }
}
