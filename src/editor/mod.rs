//! Tree Editor
//!
//! Display-agnostic editing core: events in, frames out.
//!
//! # Module Structure
//!
//! - `event` - input events and activation tokens
//! - `state` - modes, pending prompts and the status line
//! - `content_form` - field buffers of the content form
//! - `machine` - `TreeEditor`, the state machine
//! - `glyphs` - tree markers, unicode or ascii
//! - `render` - pure projection of the state onto line descriptors

pub mod content_form;
pub mod event;
pub mod glyphs;
mod machine;
pub mod render;
pub mod state;

pub use content_form::ContentForm;
pub use glyphs::Glyphs;
pub use event::{ActivationToken, EditorEvent, MenuOption, ParentChoice};
pub use machine::TreeEditor;
pub use render::{project, EditorView, LineDescriptor, LineStyle, RenderOptions, RenderOutput};
pub use state::{EditMode, ModeKind, PendingPrompt, StatusLevel, StatusLine};
