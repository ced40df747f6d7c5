//! Tree flattener
//!
//! Turns the category store plus the set of expanded names into the ordered
//! list of visible rows. Depth-first, pre-order, roots first, each level in
//! `children_of` order. The output depends only on its inputs, so repeated
//! calls over an unchanged store yield identical rows and a row index stays
//! a meaningful selection across re-renders.

use std::collections::{BTreeSet, HashMap};

use crate::domain::entities::{Category, VisibleRow};
use crate::domain::services::CategoryStore;

/// Flatten the visible part of the tree
pub fn flatten(store: &CategoryStore, expanded: &BTreeSet<String>) -> Vec<VisibleRow> {
    let index = store.children_index();
    let mut rows = Vec::with_capacity(store.len());

    // Explicit stack so depth is bounded by memory, not the call stack.
    // Children go on in reverse so they pop in sibling order.
    let mut pending: Vec<(&Category, usize)> = Vec::new();
    push_children(&index, None, 0, &mut pending);

    while let Some((category, depth)) = pending.pop() {
        let key = Some(category.name.as_str());
        let has_children = index.get(&key).is_some_and(|c| !c.is_empty());
        let is_expanded = has_children && expanded.contains(&category.name);

        rows.push(VisibleRow {
            key: category.name.clone(),
            depth,
            has_children,
            is_expanded,
        });

        if is_expanded {
            push_children(&index, key, depth + 1, &mut pending);
        }
    }
    rows
}

fn push_children<'a>(
    index: &HashMap<Option<&str>, Vec<&'a Category>>,
    parent: Option<&str>,
    depth: usize,
    pending: &mut Vec<(&'a Category, usize)>,
) {
    if let Some(children) = index.get(&parent) {
        pending.extend(children.iter().rev().map(|child| (*child, depth)));
    }
}

/// Index of the row showing `name`, if it is visible
pub fn position_of(rows: &[VisibleRow], name: &str) -> Option<usize> {
    rows.iter().position(|row| row.key == name)
}

/// Nearest visible ancestor of the row at `index`: the first earlier row with
/// a strictly smaller depth.
pub fn visible_ancestor(rows: &[VisibleRow], index: usize) -> Option<usize> {
    let depth = rows.get(index)?.depth;
    rows[..index].iter().rposition(|row| row.depth < depth)
}
