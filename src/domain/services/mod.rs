//! Domain Services
//!
//! Stateful stores and pure algorithms over the domain entities.
//! - `CategoryStore` - category map and hierarchy invariants
//! - `ContentIndex` - content items and their category links
//! - `Taxonomy` - the two mutated together
//! - `flatten` - visible rows of the tree

mod category_store;
mod content_index;
pub mod flatten;
mod taxonomy;

pub use category_store::CategoryStore;
pub use content_index::ContentIndex;
pub use flatten::flatten;
pub use taxonomy::Taxonomy;
