//! TaxonomyRepository port - abstraction for taxonomy persistence
//!
//! The editor works on an in-memory [`Taxonomy`]; loading it before a
//! session and writing it back afterwards is an outer concern.

use std::path::Path;

use crate::domain::services::Taxonomy;
use crate::error::TaxonResult;

/// Abstract repository for taxonomy snapshots
pub trait TaxonomyRepository {
    /// Load a taxonomy. A missing file yields an empty taxonomy.
    fn load(&self, path: &Path) -> TaxonResult<Taxonomy>;

    /// Write a taxonomy, replacing the file in one step
    fn save(&self, taxonomy: &Taxonomy, path: &Path) -> TaxonResult<()>;
}
