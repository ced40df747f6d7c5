//! Repository implementations

mod taxonomy;

pub use taxonomy::{CategoryRecord, ContentRecord, JsonTaxonomyRepository, Snapshot};
