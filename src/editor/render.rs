//! Render projector
//!
//! Pure projection of the editor state onto line descriptors. Nothing here
//! mutates; adapters paint the descriptors and map clicks back through the
//! activation tokens.

use crate::domain::entities::VisibleRow;
use crate::domain::ports::PromptRequest;
use crate::domain::services::Taxonomy;
use crate::editor::content_form::{ContentForm, FIELD_LABELS};
use crate::editor::event::{ActivationToken, MenuOption};
use crate::editor::state::{EditMode, ModeKind, StatusLine};
use crate::editor::glyphs::Glyphs;

const HINT_BROWSING: &str =
    "↑↓ move  ←→ collapse/expand  r rename  p move  a add  d delete  e edit content  q quit";
const HINT_BROWSING_ASCII: &str =
    "Up/Down move  Left/Right collapse/expand  r rename  p move  a add  d delete  e edit content  q quit";
const HINT_RENAMING: &str = "Type the new name, Enter to save, Esc to cancel";
const HINT_CONTENT: &str = "Tab to switch, Enter to save, Esc to cancel";
const HINT_MENU: &str = "Click an entry, Esc to close";
const HINT_DRAGGING: &str = "Release on a sibling to reorder, Esc to cancel";
const HINT_PROMPTING: &str = "Waiting for input";

/// Widest indent step honoured by the projector
pub const MAX_INDENT: usize = 16;

/// Presentation settings that do not change with the editor state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    /// Spaces per depth level, capped at [`MAX_INDENT`]
    pub indent: usize,
    /// Project the content pane of the selected category
    pub show_content: bool,
}

impl RenderOptions {
    fn padding(&self, depth: usize) -> String {
        " ".repeat(self.indent.min(MAX_INDENT).saturating_mul(depth))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            indent: 4,
            show_content: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Row,
    /// Row being dragged
    DragSource,
    MenuItem,
    Header,
    Content,
    Field,
    Muted,
}

/// One projected line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDescriptor {
    pub text: String,
    pub style: LineStyle,
    pub highlighted: bool,
    /// Click target, if the line reacts to clicks
    pub token: Option<ActivationToken>,
}

impl LineDescriptor {
    fn plain(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
            highlighted: false,
            token: None,
        }
    }
}

/// Everything an adapter needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Tree rows plus menu sub-lines
    pub lines: Vec<LineDescriptor>,
    /// Content pane of the selected category or the open form
    pub content: Vec<LineDescriptor>,
    pub status: Option<StatusLine>,
    pub hint: String,
    /// Set while the editor is suspended on an outside value
    pub prompt: Option<PromptRequest>,
    pub mode: ModeKind,
    pub done: bool,
}

impl RenderOutput {
    /// Frame as plain text, `>` marking highlighted lines
    pub fn to_plain_text(&self) -> String {
        let mut out = Vec::new();
        out.extend(self.lines.iter().map(plain_line));
        if !self.content.is_empty() {
            out.push(String::new());
            out.extend(self.content.iter().map(plain_line));
        }
        if let Some(status) = &self.status {
            out.push(String::new());
            match status.error {
                Some(kind) => out.push(format!("error ({}): {}", kind, status.message)),
                None => out.push(status.message.clone()),
            }
        }
        out.join("\n")
    }
}

fn plain_line(line: &LineDescriptor) -> String {
    let marker = if line.highlighted { "> " } else { "  " };
    format!("{}{}", marker, line.text).trim_end().to_string()
}

/// Borrowed editor state handed to [`project`]
#[derive(Debug, Clone, Copy)]
pub struct EditorView<'a> {
    pub taxonomy: &'a Taxonomy,
    pub rows: &'a [VisibleRow],
    pub selected: Option<usize>,
    pub mode: &'a EditMode,
    pub status: Option<&'a StatusLine>,
    pub done: bool,
}

/// Project one frame
pub fn project(
    view: EditorView<'_>,
    prompt: Option<PromptRequest>,
    options: &RenderOptions,
) -> RenderOutput {
    let glyphs = Glyphs::new(options.unicode);
    RenderOutput {
        lines: tree_lines(&view, options, &glyphs),
        content: content_lines(&view, options, &glyphs),
        status: view.status.cloned(),
        hint: hint_for(view.mode, options.unicode).to_string(),
        prompt,
        mode: view.mode.kind(),
        done: view.done,
    }
}

fn tree_lines(view: &EditorView<'_>, options: &RenderOptions, glyphs: &Glyphs) -> Vec<LineDescriptor> {
    if view.rows.is_empty() {
        return vec![LineDescriptor::plain("(no categories)", LineStyle::Muted)];
    }

    let mut lines = Vec::with_capacity(view.rows.len() + MenuOption::ALL.len());
    for (index, row) in view.rows.iter().enumerate() {
        let label = match view.mode {
            EditMode::RenamingNode { target, buffer } if *target == row.key => {
                format!("{}{}", buffer, glyphs.cursor)
            }
            _ => row.key.clone(),
        };
        let mut text = format!(
            "{}{} {}",
            options.padding(row.depth),
            glyphs.branch(row.has_children, row.is_expanded),
            label
        );
        let style = match view.mode {
            EditMode::Dragging { source } if *source == index => {
                text.push(' ');
                text.push_str(glyphs.drag);
                LineStyle::DragSource
            }
            _ => LineStyle::Row,
        };
        lines.push(LineDescriptor {
            text,
            style,
            highlighted: view.selected == Some(index),
            token: Some(ActivationToken::Row(index)),
        });

        if let EditMode::MenuOpen { row: anchor } = view.mode {
            if *anchor == index {
                let indent = options.padding(row.depth + 1);
                for option in MenuOption::ALL {
                    lines.push(LineDescriptor {
                        text: format!("{}{} {}", indent, glyphs.menu_item, option.label()),
                        style: LineStyle::MenuItem,
                        highlighted: false,
                        token: Some(ActivationToken::MenuItem { row: index, option }),
                    });
                }
            }
        }
    }
    lines
}

fn content_lines(
    view: &EditorView<'_>,
    options: &RenderOptions,
    glyphs: &Glyphs,
) -> Vec<LineDescriptor> {
    if !options.show_content {
        return Vec::new();
    }
    if let EditMode::EditingContentField(form) = view.mode {
        return form_lines(form, glyphs);
    }
    let Some(row) = view.selected.and_then(|i| view.rows.get(i)) else {
        return Vec::new();
    };

    let mut lines = vec![LineDescriptor::plain(
        format!("Content for '{}':", row.key),
        LineStyle::Header,
    )];
    let items = view.taxonomy.content_for(&row.key);
    if items.is_empty() {
        lines.push(LineDescriptor::plain("  (none)", LineStyle::Muted));
    }
    for item in items {
        lines.push(LineDescriptor {
            text: format!(
                "  {} [{}] archived={} [Edit]",
                item.name,
                item.categories_label(),
                item.archived
            ),
            style: LineStyle::Content,
            highlighted: false,
            token: Some(ActivationToken::ContentEdit(item.name.clone())),
        });
    }
    lines
}

fn form_lines(form: &ContentForm, glyphs: &Glyphs) -> Vec<LineDescriptor> {
    let mut lines = vec![LineDescriptor::plain(
        format!("Editing '{}':", form.original),
        LineStyle::Header,
    )];
    for (index, (label, value)) in FIELD_LABELS.iter().zip(form.fields.iter()).enumerate() {
        let active = index == form.active;
        let cursor = if active { glyphs.cursor } else { "" };
        lines.push(LineDescriptor {
            text: format!("  {}: {}{}", label, value, cursor),
            style: LineStyle::Field,
            highlighted: active,
            token: Some(ActivationToken::ContentField(index)),
        });
    }
    lines.push(LineDescriptor::plain(
        format!("  ({})", HINT_CONTENT),
        LineStyle::Muted,
    ));
    lines
}

fn hint_for(mode: &EditMode, unicode: bool) -> &'static str {
    match mode {
        EditMode::Browsing if unicode => HINT_BROWSING,
        EditMode::Browsing => HINT_BROWSING_ASCII,
        EditMode::RenamingNode { .. } => HINT_RENAMING,
        EditMode::EditingContentField(_) => HINT_CONTENT,
        EditMode::MenuOpen { .. } => HINT_MENU,
        EditMode::Dragging { .. } => HINT_DRAGGING,
        EditMode::Prompting(_) => HINT_PROMPTING,
    }
}
