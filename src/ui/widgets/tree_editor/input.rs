//! Keyboard and mouse mapping.
//!
//! Turns crossterm events into editor events. Keys depend on the current
//! mode; mouse presses and releases are resolved through the hit map of the
//! last painted frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::editor::{ActivationToken, EditorEvent, MenuOption, ModeKind, RenderOutput};

use super::paint::HitMap;

/// Convert a key press to an editor event for the frame on screen
pub fn key_to_event(key: KeyEvent, frame: &RenderOutput) -> Option<EditorEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(EditorEvent::Quit);
    }

    match frame.mode {
        ModeKind::Browsing => browsing_key(key, frame),
        ModeKind::RenamingNode | ModeKind::EditingContentField => text_key(key),
        ModeKind::MenuOpen => match key.code {
            KeyCode::Char('r') => Some(EditorEvent::MenuSelect(MenuOption::Rename)),
            KeyCode::Char('d') | KeyCode::Delete => Some(EditorEvent::MenuSelect(MenuOption::Delete)),
            KeyCode::Esc | KeyCode::Char('q') => Some(EditorEvent::CancelEdit),
            _ => None,
        },
        ModeKind::Dragging | ModeKind::Prompting => match key.code {
            KeyCode::Esc => Some(EditorEvent::CancelEdit),
            _ => None,
        },
    }
}

fn browsing_key(key: KeyEvent, frame: &RenderOutput) -> Option<EditorEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(EditorEvent::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(EditorEvent::NavigateDown),
        KeyCode::Right | KeyCode::Char('l') => Some(EditorEvent::Expand),
        KeyCode::Left | KeyCode::Char('h') => Some(EditorEvent::Collapse),
        KeyCode::Char('r') | KeyCode::F(2) => Some(EditorEvent::StartRename),
        KeyCode::Char('p') | KeyCode::Char('m') => Some(EditorEvent::StartReparentDialog),
        KeyCode::Char('a') | KeyCode::Insert => Some(EditorEvent::StartAddCategory),
        KeyCode::Char('d') | KeyCode::Delete => Some(EditorEvent::Delete),
        KeyCode::Char('e') => first_content_item(frame).map(EditorEvent::StartContentEdit),
        KeyCode::Char('q') | KeyCode::Esc => Some(EditorEvent::Quit),
        _ => None,
    }
}

fn text_key(key: KeyEvent) -> Option<EditorEvent> {
    match key.code {
        KeyCode::Char(c) => Some(EditorEvent::InsertChar(c)),
        KeyCode::Backspace => Some(EditorEvent::Backspace),
        KeyCode::Enter => Some(EditorEvent::Submit),
        KeyCode::Esc => Some(EditorEvent::CancelEdit),
        KeyCode::Tab => Some(EditorEvent::AdvanceField),
        KeyCode::Up => Some(EditorEvent::NavigateUp),
        KeyCode::Down => Some(EditorEvent::NavigateDown),
        _ => None,
    }
}

fn first_content_item(frame: &RenderOutput) -> Option<String> {
    frame.content.iter().find_map(|line| match &line.token {
        Some(ActivationToken::ContentEdit(name)) => Some(name.clone()),
        _ => None,
    })
}

/// Pairs pointer presses with releases
#[derive(Debug, Default)]
pub struct MouseTracker {
    /// Token under the pointer at press time; `None` inside means empty space
    pressed: Option<Option<ActivationToken>>,
    dragging: bool,
}

impl MouseTracker {
    pub fn handle(&mut self, mouse: MouseEvent, hits: &HitMap) -> Vec<EditorEvent> {
        let target = hits.token_at(mouse.row).cloned();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = Some(target);
                self.dragging = false;
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Right) => match target {
                Some(ActivationToken::Row(index)) => vec![EditorEvent::SecondaryClick(index)],
                _ => Vec::new(),
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.dragging {
                    return Vec::new();
                }
                match (&self.pressed, target) {
                    (Some(Some(ActivationToken::Row(source))), Some(ActivationToken::Row(over)))
                        if *source != over =>
                    {
                        self.dragging = true;
                        vec![EditorEvent::DragStart(*source)]
                    }
                    _ => Vec::new(),
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pressed.take();
                let was_dragging = std::mem::take(&mut self.dragging);
                self.release(pressed, target, was_dragging)
            }
            _ => Vec::new(),
        }
    }

    fn release(
        &self,
        pressed: Option<Option<ActivationToken>>,
        released: Option<ActivationToken>,
        was_dragging: bool,
    ) -> Vec<EditorEvent> {
        if was_dragging {
            return match released {
                Some(ActivationToken::Row(dest)) => vec![EditorEvent::DragEnd(dest)],
                _ => vec![EditorEvent::CancelEdit],
            };
        }
        match (pressed, released) {
            (Some(Some(ActivationToken::Row(source))), Some(ActivationToken::Row(dest)))
                if source != dest =>
            {
                vec![EditorEvent::DragStart(source), EditorEvent::DragEnd(dest)]
            }
            (Some(Some(token)), Some(released)) if token == released => {
                vec![EditorEvent::Activate(token)]
            }
            (Some(None), None) => vec![EditorEvent::CancelEdit],
            _ => Vec::new(),
        }
    }
}
