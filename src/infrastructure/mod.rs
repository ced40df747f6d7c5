//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `prompt/` - Prompter implementations (terminal dialogs, scripted answers)
//! - `repositories/` - TaxonomyRepository implementation (JSON snapshots)
//! - `seed` - sample taxonomy

pub mod prompt;
pub mod repositories;
pub mod seed;

// Re-export for convenience
pub use prompt::{DialoguerPrompter, ScriptedPrompter};
pub use repositories::{JsonTaxonomyRepository, Snapshot};
pub use seed::sample_taxonomy;
