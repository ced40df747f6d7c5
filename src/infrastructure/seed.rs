//! Sample parish website taxonomy, used by `--seed` and in tests.

use crate::domain::services::Taxonomy;
use crate::error::TreeResult;
use crate::infrastructure::repositories::{CategoryRecord, ContentRecord, Snapshot};

const CATEGORIES: &[(&str, Option<&str>, i64)] = &[
    ("Home", None, 0),
    ("About", None, 1),
    ("Mass Times", None, 2),
    ("Sacraments", None, 3),
    ("Ministries", None, 4),
    ("Downloads", None, 5),
    ("Staff", Some("About"), 0),
    ("History", Some("About"), 1),
    ("Contact", Some("About"), 2),
    ("Baptism", Some("Sacraments"), 0),
    ("Confirmation", Some("Sacraments"), 1),
    ("Marriage", Some("Sacraments"), 2),
    ("Youth Ministry", Some("Ministries"), 0),
    ("Choir", Some("Ministries"), 1),
    ("High School", Some("Youth Ministry"), 0),
];

const CONTENTS: &[(&str, &str, bool)] = &[
    ("office_hours", "Home", false),
    ("welcome", "Home", false),
    ("bulletin", "Downloads", false),
    ("youth_banner", "Youth Ministry", false),
    ("old_news", "Home", true),
];

pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        categories: CATEGORIES
            .iter()
            .map(|(name, parent, order)| CategoryRecord {
                name: name.to_string(),
                parent: parent.map(str::to_string),
                sort_order_index: *order,
            })
            .collect(),
        contents: CONTENTS
            .iter()
            .map(|(name, category, archived)| ContentRecord {
                name: name.to_string(),
                categories: vec![category.to_string()],
                archived: *archived,
            })
            .collect(),
    }
}

pub fn sample_taxonomy() -> TreeResult<Taxonomy> {
    sample_snapshot().into_taxonomy()
}
