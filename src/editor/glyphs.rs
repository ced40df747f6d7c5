//! Glyphs drawn inside projected lines
//!
//! Terminal adapters pick their own status icons and colours; the tree
//! markers live here so the projector stays free of any display crate.

pub mod unicode {
    // Same display width for all three.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
    pub const LEAF: &str = " ";

    pub const MENU_ITEM: &str = "❏";
    pub const DRAG: &str = "↕";
    pub const CURSOR: &str = "|";
}

pub mod ascii {
    pub const EXPAND: &str = "[-]";
    pub const COLLAPSE: &str = "[+]";
    pub const LEAF: &str = "   ";

    pub const MENU_ITEM: &str = "*";
    pub const DRAG: &str = "<>";
    pub const CURSOR: &str = "|";
}

/// Tree and form markers for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub expand: &'static str,
    pub collapse: &'static str,
    pub leaf: &'static str,
    pub menu_item: &'static str,
    pub drag: &'static str,
    pub cursor: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                expand: unicode::EXPAND,
                collapse: unicode::COLLAPSE,
                leaf: unicode::LEAF,
                menu_item: unicode::MENU_ITEM,
                drag: unicode::DRAG,
                cursor: unicode::CURSOR,
            }
        } else {
            Self {
                expand: ascii::EXPAND,
                collapse: ascii::COLLAPSE,
                leaf: ascii::LEAF,
                menu_item: ascii::MENU_ITEM,
                drag: ascii::DRAG,
                cursor: ascii::CURSOR,
            }
        }
    }

    /// Marker in front of a row label
    pub fn branch(&self, has_children: bool, is_expanded: bool) -> &'static str {
        match (has_children, is_expanded) {
            (true, true) => self.expand,
            (true, false) => self.collapse,
            (false, _) => self.leaf,
        }
    }
}
