//! JSON Taxonomy Repository
//!
//! Implements the TaxonomyRepository port on top of the snapshot format:
//!
//! ```json
//! {
//!   "categories": [{"name": "Home", "parent": null, "sort_order_index": 0}],
//!   "contents": [{"name": "welcome", "categories": ["Home"], "archived": false}]
//! }
//! ```

use std::io::Write;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{normalize_name, Category, ContentItem};
use crate::domain::ports::TaxonomyRepository;
use crate::domain::services::{CategoryStore, ContentIndex, Taxonomy};
use crate::error::{TaxonError, TaxonResult, TreeError, TreeResult};

/// Serialized category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub sort_order_index: i64,
}

/// Serialized content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub archived: bool,
}

/// Whole taxonomy as written to disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub contents: Vec<ContentRecord>,
}

impl Snapshot {
    /// Records in a stable order: categories by parent then sibling order,
    /// contents by name.
    pub fn capture(taxonomy: &Taxonomy) -> Self {
        let mut categories: Vec<&Category> = taxonomy.categories.iter().collect();
        categories.sort_by(|a, b| {
            a.parent
                .cmp(&b.parent)
                .then_with(|| a.sibling_cmp(b))
        });

        Self {
            categories: categories
                .into_iter()
                .map(|c| CategoryRecord {
                    name: c.name.clone(),
                    parent: c.parent.clone(),
                    sort_order_index: c.order,
                })
                .collect(),
            contents: taxonomy
                .contents
                .iter()
                .map(|item| ContentRecord {
                    name: item.name.clone(),
                    categories: item.categories.iter().cloned().collect(),
                    archived: item.archived,
                })
                .collect(),
        }
    }

    /// Rebuild a validated taxonomy.
    ///
    /// Rejects duplicate names, unknown parents, cycles and content linked to
    /// unknown categories. Sibling orders are renumbered from zero.
    pub fn into_taxonomy(self) -> TreeResult<Taxonomy> {
        let categories = CategoryStore::from_categories(self.categories.into_iter().map(|r| {
            Category {
                name: r.name,
                parent: r.parent,
                order: r.sort_order_index,
            }
        }))?;

        let mut taxonomy = Taxonomy::new(categories, ContentIndex::new());
        for record in self.contents {
            let name = normalize_name(&record.name)?;
            if taxonomy.contents.get(&name).is_some() {
                return Err(TreeError::duplicate(&name));
            }
            let item = ContentItem::new(name, record.categories).archived(record.archived);
            taxonomy.upsert_content(item)?;
        }
        Ok(taxonomy)
    }

    pub fn to_json(&self) -> TaxonResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> TaxonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Snapshot repository writing pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTaxonomyRepository;

impl JsonTaxonomyRepository {
    pub fn new() -> Self {
        Self
    }
}

impl TaxonomyRepository for JsonTaxonomyRepository {
    fn load(&self, path: &Path) -> TaxonResult<Taxonomy> {
        if !path.exists() {
            debug!("event=snapshot_missing path={}", path.display());
            return Ok(Taxonomy::default());
        }

        let content = std::fs::read_to_string(path)?;
        let taxonomy = Snapshot::from_json(&content)?
            .into_taxonomy()
            .map_err(|source| TaxonError::InvalidSnapshot {
                file: path.to_path_buf(),
                source,
            })?;
        info!(
            "event=snapshot_loaded path={} categories={} contents={}",
            path.display(),
            taxonomy.categories.len(),
            taxonomy.contents.len()
        );
        Ok(taxonomy)
    }

    fn save(&self, taxonomy: &Taxonomy, path: &Path) -> TaxonResult<()> {
        let json = Snapshot::capture(taxonomy).to_json()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        // Same directory so the final rename stays on one file system
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;

        info!(
            "event=snapshot_saved path={} categories={} contents={}",
            path.display(),
            taxonomy.categories.len(),
            taxonomy.contents.len()
        );
        Ok(())
    }
}
