//! Property tests for category store mutations.

use std::collections::HashSet;

use proptest::prelude::*;

use taxon::domain::entities::ContentItem;
use taxon::domain::services::{CategoryStore, ContentIndex, Taxonomy};
use taxon::error::TreeResult;

const NAMES: &[&str] = &["A", "B", "C", "D", "E", "F"];

#[derive(Debug, Clone)]
pub enum StoreOp {
    Add(&'static str, Option<&'static str>),
    Rename(&'static str, &'static str),
    Reparent(&'static str, Option<&'static str>),
    Reorder(&'static str, usize),
    Remove(&'static str),
}

fn name() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(NAMES)
}

pub fn store_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        3 => (name(), proptest::option::of(name())).prop_map(|(n, p)| StoreOp::Add(n, p)),
        1 => (name(), name()).prop_map(|(a, b)| StoreOp::Rename(a, b)),
        2 => (name(), proptest::option::of(name())).prop_map(|(n, p)| StoreOp::Reparent(n, p)),
        1 => (name(), 0usize..6).prop_map(|(n, pos)| StoreOp::Reorder(n, pos)),
        1 => name().prop_map(StoreOp::Remove),
    ]
}

pub fn apply(store: &mut CategoryStore, op: &StoreOp) -> TreeResult<()> {
    match op {
        StoreOp::Add(name, parent) => store.add(name, *parent, None).map(|_| ()),
        StoreOp::Rename(old, new) => store.rename(old, new).map(|_| ()),
        StoreOp::Reparent(name, parent) => store.reparent(name, *parent),
        StoreOp::Reorder(name, position) => {
            let parent = store.parent_of(name).map(str::to_string);
            store.reorder(name, *position, parent.as_deref())
        }
        StoreOp::Remove(name) => store.remove(name).map(|_| ()),
    }
}

/// Panics with a description when the store breaks an invariant
pub fn check_invariants(store: &CategoryStore) {
    let mut seen = HashSet::new();
    let mut groups = HashSet::new();
    for category in store.iter() {
        if let Some(parent) = category.parent.as_deref() {
            assert!(store.contains(parent), "{} has unknown parent {}", category.name, parent);
        }
        let ancestors = store.ancestors_of(&category.name);
        assert!(ancestors.len() < store.len(), "{} sits on a cycle", category.name);
        assert!(!ancestors.contains(&category.name));
        assert!(
            groups.insert((category.parent.clone(), category.order)),
            "order {} used twice under {:?}",
            category.order,
            category.parent
        );
    }

    let mut parents: Vec<Option<&str>> = vec![None];
    parents.extend(store.names().map(Some));
    for parent in parents {
        for child in store.children_of(parent) {
            assert!(seen.insert(child.clone()), "{child} listed under two parents");
        }
    }
    assert_eq!(seen.len(), store.len());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any sequence of mutations keeps the store a well-ordered forest,
    /// and a rejected mutation leaves it untouched.
    #[test]
    fn property_mutations_keep_forest_invariants(
        ops in proptest::collection::vec(store_op(), 0..40)
    ) {
        let mut store = CategoryStore::new();
        for op in &ops {
            let before = store.clone();
            if apply(&mut store, op).is_err() {
                prop_assert_eq!(&store, &before, "rejected {:?} modified the store", op);
            }
            check_invariants(&store);
        }
    }

    /// PROPERTY: renaming there and back restores the store and the content
    /// links exactly.
    #[test]
    fn property_rename_round_trips(
        ops in proptest::collection::vec(store_op(), 1..30),
        pick in any::<prop::sample::Index>()
    ) {
        let mut store = CategoryStore::new();
        for op in &ops {
            let _ = apply(&mut store, op);
        }
        let names: Vec<String> = store.names().map(str::to_string).collect();
        prop_assume!(!names.is_empty());
        let name = pick.get(&names);

        let mut taxonomy = Taxonomy::new(store, ContentIndex::new());
        taxonomy
            .upsert_content(ContentItem::new("linked", [name.as_str()]))
            .unwrap();
        taxonomy
            .upsert_content(ContentItem::new("all", names.iter().map(String::as_str)))
            .unwrap();

        let original = taxonomy.clone();
        taxonomy.rename_category(name, "Renamed").unwrap();
        prop_assert!(!taxonomy.categories.contains(name));
        prop_assert!(taxonomy.contents.linked_to(name).is_empty());
        taxonomy.rename_category("Renamed", name).unwrap();
        prop_assert_eq!(taxonomy, original);
    }

    /// PROPERTY: a node can never be moved under itself or its subtree.
    #[test]
    fn property_reparent_into_subtree_fails(
        ops in proptest::collection::vec(store_op(), 1..30),
        pick in any::<prop::sample::Index>()
    ) {
        let mut store = CategoryStore::new();
        for op in &ops {
            let _ = apply(&mut store, op);
        }
        let names: Vec<String> = store.names().map(str::to_string).collect();
        prop_assume!(!names.is_empty());
        let name = pick.get(&names);

        let before = store.clone();
        for target in store.descendants_of(name).iter().chain(std::iter::once(name)) {
            let mut attempt = store.clone();
            prop_assert!(attempt.reparent(name, Some(target.as_str())).is_err());
            prop_assert_eq!(&attempt, &before);
        }
    }
}
