pub mod tree_editor;

pub use tree_editor::run_interactive;
