//! Taxon - interactive category tree editor
//!
//! Taxon edits the category hierarchy of a small content site: categories
//! form a forest with explicit sibling order, and content items are filed
//! under any number of categories. The editing core is an event-driven state
//! machine that projects each state onto plain line descriptors, so the
//! terminal front end in `ui` is only one of the ways to drive it.

pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Category, ContentItem, VisibleRow};
pub use domain::services::{flatten, CategoryStore, ContentIndex, Taxonomy};
pub use editor::{EditorEvent, RenderOutput, TreeEditor};
pub use error::{ErrorKind, TaxonError, TaxonResult, TreeError, TreeResult};
pub use infrastructure::{JsonTaxonomyRepository, Snapshot};
