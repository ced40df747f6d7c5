//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod prompter;
pub mod taxonomy_repository;

pub use prompter::{ChoiceOption, PromptRequest, Prompter, ROOT_CHOICE_KEY};
pub use taxonomy_repository::TaxonomyRepository;
