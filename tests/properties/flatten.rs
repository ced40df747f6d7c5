//! Property tests for the tree flattener.

use std::collections::BTreeSet;

use proptest::prelude::*;

use taxon::domain::services::flatten::{flatten, visible_ancestor};
use taxon::domain::services::CategoryStore;

use crate::category_store::{apply, store_op};

fn arbitrary_store() -> impl Strategy<Value = CategoryStore> {
    proptest::collection::vec(store_op(), 0..40).prop_map(|ops| {
        let mut store = CategoryStore::new();
        for op in &ops {
            let _ = apply(&mut store, op);
        }
        store
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: each visible row sits right under its parent's subtree, one
    /// level deeper, and appears once.
    #[test]
    fn property_rows_follow_parent_links(
        store in arbitrary_store(),
        mask in proptest::collection::vec(any::<bool>(), 6)
    ) {
        let expanded: BTreeSet<String> = store
            .names()
            .zip(mask.iter().cycle())
            .filter(|(_, open)| **open)
            .map(|(name, _)| name.to_string())
            .collect();
        let rows = flatten(&store, &expanded);

        let mut keys = BTreeSet::new();
        for (index, row) in rows.iter().enumerate() {
            prop_assert!(keys.insert(row.key.clone()));
            prop_assert_eq!(row.has_children, store.has_children(&row.key));
            prop_assert_eq!(row.is_expanded, row.has_children && expanded.contains(&row.key));
            match store.parent_of(&row.key) {
                None => prop_assert_eq!(row.depth, 0),
                Some(parent) => {
                    let above = visible_ancestor(&rows, index).map(|i| &rows[i]);
                    prop_assert_eq!(above.map(|r| r.key.as_str()), Some(parent));
                    prop_assert_eq!(above.map(|r| r.depth + 1), Some(row.depth));
                    prop_assert!(expanded.contains(parent));
                }
            }
        }
    }

    /// PROPERTY: with everything expanded every category is visible, and
    /// flattening twice gives the same rows.
    #[test]
    fn property_full_expansion_shows_all(store in arbitrary_store()) {
        let expanded: BTreeSet<String> = store.names().map(str::to_string).collect();
        let rows = flatten(&store, &expanded);
        prop_assert_eq!(rows.len(), store.len());
        prop_assert_eq!(&rows, &flatten(&store, &expanded));

        let roots = rows.iter().filter(|r| r.depth == 0).count();
        prop_assert_eq!(roots, store.children_of(None).len());
    }
}
