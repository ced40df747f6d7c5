//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Category` - A named node of the taxonomy
//! - `ContentItem` - An article filed under categories
//! - `VisibleRow` - A derived, renderable row of the flattened tree

mod category;
mod content_item;
mod visible_row;

pub use category::{normalize_name, Category};
pub use content_item::ContentItem;
pub use visible_row::VisibleRow;
