//! Domain Layer
//!
//! This is the core of taxon - the category tree and its content links,
//! without terminal, file or dialog dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Category, ContentItem, VisibleRow
//! - `services/` - CategoryStore, ContentIndex, Taxonomy, flatten
//! - `ports/` - Interfaces for the prompt collaborator and snapshot storage
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the terminal or the file system
//! 2. **Recompute, don't patch** - hierarchy views are derived from the flat store
//! 3. **Ports & Adapters** - user dialogs go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
