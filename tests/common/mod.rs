//! Common test utilities for taxon integration tests.
//!
//! - Fixtures: small stores and taxonomies used across suites
//! - Helpers: driving an editor and reading its rows

#![allow(dead_code)]

use taxon::domain::entities::ContentItem;
use taxon::domain::services::{CategoryStore, Taxonomy};
use taxon::editor::{EditorEvent, RenderOutput, TreeEditor};

/// Store from `(name, parent)` pairs, added in order
pub fn store_of(entries: &[(&str, Option<&str>)]) -> CategoryStore {
    let mut store = CategoryStore::new();
    for (name, parent) in entries {
        store.add(name, *parent, None).unwrap();
    }
    store
}

/// `A` (root), `B` (under `A`), `C` (under `B`)
pub fn abc_store() -> CategoryStore {
    store_of(&[("A", None), ("B", Some("A")), ("C", Some("B"))])
}

/// Taxonomy from categories plus `(item, categories)` pairs
pub fn taxonomy_of(
    categories: &[(&str, Option<&str>)],
    contents: &[(&str, &[&str])],
) -> Taxonomy {
    let mut taxonomy = Taxonomy::new(store_of(categories), Default::default());
    for (name, links) in contents {
        taxonomy
            .upsert_content(ContentItem::new(*name, links.iter().copied()))
            .unwrap();
    }
    taxonomy
}

/// Feed `events` in order, returning the last frame
pub fn drive(editor: &mut TreeEditor, events: impl IntoIterator<Item = EditorEvent>) -> RenderOutput {
    let mut frame = editor.render();
    for event in events {
        frame = editor.handle_event(event);
    }
    frame
}

/// Index of the visible row showing `name`
pub fn row_of(editor: &TreeEditor, name: &str) -> usize {
    editor
        .rows()
        .iter()
        .position(|row| row.key == name)
        .unwrap_or_else(|| panic!("row {name} is not visible"))
}

pub fn keys(editor: &TreeEditor) -> Vec<String> {
    editor.rows().iter().map(|row| row.key.clone()).collect()
}

/// One event per character of `text`
pub fn typed(text: &str) -> Vec<EditorEvent> {
    text.chars().map(EditorEvent::InsertChar).collect()
}
