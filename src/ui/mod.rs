//! Terminal UI
//!
//! - `theme` - colors and icons
//! - `terminal` - capability detection
//! - `widgets` - the interactive tree editor

pub mod terminal;
pub mod theme;
pub mod widgets;

pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::IconSet;
