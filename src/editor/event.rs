//! Input events accepted by the tree editor.
//!
//! Events are display agnostic: a terminal adapter, a GUI toolkit or a test
//! translates its native input into these before calling
//! `TreeEditor::handle_event`.

use crate::domain::ports::ROOT_CHOICE_KEY;

/// Entry of the row context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Rename,
    Delete,
}

impl MenuOption {
    pub const ALL: [MenuOption; 2] = [MenuOption::Rename, MenuOption::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Rename => "Rename",
            MenuOption::Delete => "Delete",
        }
    }
}

/// Opaque click target attached to a projected line.
///
/// The renderer maps screen coordinates back to the token of the line under
/// the pointer and hands it back through [`EditorEvent::Activate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActivationToken {
    /// A tree row, by index in the flattened rows
    Row(usize),
    /// A context menu entry shown under `row`
    MenuItem { row: usize, option: MenuOption },
    /// The edit button of a content item
    ContentEdit(String),
    /// One field of the content form
    ContentField(usize),
}

/// Target of a reparent: the root level or a named category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParentChoice {
    Root,
    Category(String),
}

impl ParentChoice {
    /// Decode a choice prompt key
    pub fn from_key(key: &str) -> Self {
        if key == ROOT_CHOICE_KEY {
            ParentChoice::Root
        } else {
            ParentChoice::Category(key.to_string())
        }
    }

    pub fn as_parent(&self) -> Option<&str> {
        match self {
            ParentChoice::Root => None,
            ParentChoice::Category(name) => Some(name),
        }
    }
}

/// Tree editor input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Move selection up one row
    NavigateUp,
    /// Move selection down one row
    NavigateDown,
    /// Expand the selected row
    Expand,
    /// Collapse the selected row, or jump to its visible parent
    Collapse,
    /// Start inline rename of the selected row
    StartRename,
    /// Type one character into the active buffer
    InsertChar(char),
    /// Remove the last character of the active buffer
    Backspace,
    /// Commit the active buffer (Enter)
    Submit,
    /// Replace the active buffer with this text and commit it
    CommitText(String),
    /// Discard the edit, close the menu or cancel the pending prompt (Escape)
    CancelEdit,
    /// Ask for a new parent of the selected row
    StartReparentDialog,
    /// Answer to the reparent prompt; `None` cancels
    ReparentChosen(Option<ParentChoice>),
    /// Ask for the name of a new child of the selected row
    StartAddCategory,
    /// Open the content form for an item
    StartContentEdit(String),
    /// Set one field of the content form
    CommitContentField(usize, String),
    /// Focus one field of the content form
    FocusField(usize),
    /// Move to the next content form field (Tab)
    AdvanceField,
    /// Delete the selected category
    Delete,
    /// Primary button click on a row
    PrimaryClick(usize),
    /// Secondary button click on a row
    SecondaryClick(usize),
    /// Pick an entry of the open context menu
    MenuSelect(MenuOption),
    /// Click on a projected line carrying this token
    Activate(ActivationToken),
    /// Pointer pressed on a row and moved
    DragStart(usize),
    /// Pointer released on a row while dragging
    DragEnd(usize),
    /// Leave the editor
    Quit,
}
