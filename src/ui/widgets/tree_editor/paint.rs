//! Frame painting.
//!
//! Draws a `RenderOutput` onto the terminal and records which screen row
//! carries which activation token.

use std::io::{self, Write};

use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use unicode_width::UnicodeWidthChar;

use crate::editor::{ActivationToken, LineDescriptor, LineStyle, RenderOutput, StatusLevel};
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::{colors, IconSet};

const HEADER: &str = "taxon";

/// Screen row to activation token map of the last painted frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    rows: Vec<Option<ActivationToken>>,
}

impl HitMap {
    pub fn from_rows(rows: Vec<Option<ActivationToken>>) -> Self {
        Self { rows }
    }

    pub fn token_at(&self, row: u16) -> Option<&ActivationToken> {
        self.rows.get(row as usize).and_then(Option::as_ref)
    }
}

/// Cut `text` to at most `width` terminal columns
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// First tree line to show so the highlighted line stays in view
pub fn scroll_offset(lines: &[LineDescriptor], viewport: usize) -> usize {
    if viewport == 0 || lines.len() <= viewport {
        return 0;
    }
    let focus = lines.iter().position(|l| l.highlighted).unwrap_or(0);
    focus.saturating_sub(viewport - 1)
}

/// Paint one frame and return its hit map
pub fn paint(
    out: &mut impl Write,
    frame: &RenderOutput,
    caps: &TerminalCapabilities,
) -> io::Result<HitMap> {
    let icons = IconSet::new(caps.supports_unicode);
    let width = caps.width as usize;
    let height = caps.height as usize;
    let mut painter = Painter {
        out,
        color: caps.supports_color,
        icons,
        width,
        row: 0,
        hits: Vec::with_capacity(height),
    };

    queue!(
        painter.out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    painter.text(HEADER, Some(Attribute::Bold), None)?;
    painter.blank()?;

    // header (2), content block, status and hint (3)
    let reserved = 5 + if frame.content.is_empty() {
        0
    } else {
        frame.content.len() + 1
    };
    let viewport = height.saturating_sub(reserved).max(1);
    let offset = scroll_offset(&frame.lines, viewport);
    for line in frame.lines.iter().skip(offset).take(viewport) {
        painter.line(line)?;
    }

    if !frame.content.is_empty() {
        painter.blank()?;
        for line in &frame.content {
            painter.line(line)?;
        }
    }

    painter.blank()?;
    if let Some(status) = &frame.status {
        let (icon, color) = match status.level {
            StatusLevel::Error => (icons.error, colors::ERROR),
            StatusLevel::Info => (icons.success, colors::SUCCESS),
        };
        painter.text(&format!("{} {}", icon, status.message), None, Some(color))?;
    } else {
        painter.blank()?;
    }
    painter.text(&frame.hint, None, Some(colors::DIM))?;

    painter.out.flush()?;
    Ok(HitMap::from_rows(painter.hits))
}

struct Painter<'a, W: Write> {
    out: &'a mut W,
    color: bool,
    icons: IconSet,
    width: usize,
    row: u16,
    hits: Vec<Option<ActivationToken>>,
}

impl<W: Write> Painter<'_, W> {
    fn blank(&mut self) -> io::Result<()> {
        self.emit("", None, None, None)
    }

    fn text(
        &mut self,
        text: &str,
        attribute: Option<Attribute>,
        color: Option<crossterm::style::Color>,
    ) -> io::Result<()> {
        self.emit(text, attribute, color, None)
    }

    fn line(&mut self, line: &LineDescriptor) -> io::Result<()> {
        let pointer = if line.highlighted {
            self.icons.pointer
        } else {
            " "
        };
        let text = format!("{} {}", pointer, line.text);
        let color = match line.style {
            LineStyle::DragSource => Some(colors::WARNING),
            LineStyle::MenuItem | LineStyle::Field => Some(colors::INFO),
            LineStyle::Muted => Some(colors::DIM),
            LineStyle::Row | LineStyle::Header | LineStyle::Content => None,
        };
        let attribute = match (line.highlighted, line.style) {
            (true, _) => Some(Attribute::Reverse),
            (false, LineStyle::Header) => Some(Attribute::Bold),
            _ => None,
        };
        self.emit(&text, attribute, color, line.token.clone())
    }

    fn emit(
        &mut self,
        text: &str,
        attribute: Option<Attribute>,
        color: Option<crossterm::style::Color>,
        token: Option<ActivationToken>,
    ) -> io::Result<()> {
        let text = truncate_to_width(text, self.width);
        queue!(self.out, cursor::MoveTo(0, self.row))?;
        if self.color {
            if let Some(attribute) = attribute {
                queue!(self.out, SetAttribute(attribute))?;
            }
            if let Some(color) = color {
                queue!(self.out, SetForegroundColor(color))?;
            }
        }
        queue!(self.out, Print(text))?;
        if self.color {
            queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        self.hits.push(token);
        self.row = self.row.saturating_add(1);
        Ok(())
    }
}
