use crossterm::style::Color;

use crate::editor::Glyphs;

/// Design tokens for the taxon terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All status icons must be sourced from this module; tree markers
///   come from `editor::Glyphs`
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const POINTER: &str = ">";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const POINTER: &str = ">";
}

/// Icon set picked once from the terminal capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub success: &'static str,
    pub error: &'static str,
    pub pointer: &'static str,
    /// Tree markers shared with the projector
    pub glyphs: Glyphs,
}

impl IconSet {
    pub fn new(supports_unicode: bool) -> Self {
        let glyphs = Glyphs::new(supports_unicode);
        if supports_unicode {
            Self {
                success: icons::SUCCESS,
                error: icons::ERROR,
                pointer: icons::POINTER,
                glyphs,
            }
        } else {
            Self {
                success: icons_ascii::SUCCESS,
                error: icons_ascii::ERROR,
                pointer: icons_ascii::POINTER,
                glyphs,
            }
        }
    }
}
