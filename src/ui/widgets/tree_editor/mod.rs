//! Tree Editor Widget
//!
//! Terminal front end for `TreeEditor`.
//!
//! # Module Structure
//!
//! - `input` - key and mouse mapping to editor events
//! - `paint` - drawing a frame and tracking what sits on each screen row

mod input;
mod paint;

use std::io::{self, stdout, Stdout, Write};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use log::debug;

use crate::domain::ports::Prompter;
use crate::editor::TreeEditor;
use crate::ui::terminal::TerminalCapabilities;

pub use input::{key_to_event, MouseTracker};
pub use paint::{paint, scroll_offset, truncate_to_width, HitMap};

/// Raw mode and alternate screen, restored on drop
struct TerminalSession {
    out: Stdout,
    mouse: bool,
    active: bool,
}

impl TerminalSession {
    fn enter(mouse: bool) -> io::Result<Self> {
        let mut session = Self {
            out: stdout(),
            mouse,
            active: false,
        };
        session.resume()?;
        Ok(session)
    }

    fn resume(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(self.out, terminal::EnterAlternateScreen, cursor::Hide)?;
        if self.mouse {
            execute!(self.out, EnableMouseCapture)?;
        }
        Ok(())
    }

    fn suspend(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        if self.mouse {
            execute!(self.out, DisableMouseCapture)?;
        }
        execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.suspend();
        let _ = self.out.flush();
    }
}

/// Run the editor until the user quits.
///
/// Prompts are answered with the terminal restored to cooked mode so the
/// prompter can draw its own widgets.
pub fn run_interactive(
    editor: &mut TreeEditor,
    prompter: &mut dyn Prompter,
    mut caps: TerminalCapabilities,
    mouse: bool,
) -> io::Result<()> {
    let mut session = TerminalSession::enter(mouse)?;
    let mut tracker = MouseTracker::default();
    let mut frame = editor.render();
    let mut hits = paint(&mut session.out, &frame, &caps)?;

    while !frame.done {
        if frame.prompt.is_some() {
            session.suspend()?;
            frame = editor.answer_prompt(prompter);
            session.resume()?;
            hits = paint(&mut session.out, &frame, &caps)?;
            continue;
        }

        let events = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                key_to_event(key, &frame).into_iter().collect()
            }
            Event::Mouse(mouse_event) => tracker.handle(mouse_event, &hits),
            Event::Resize(width, height) => {
                caps.width = width;
                caps.height = height;
                Vec::new()
            }
            _ => continue,
        };

        for event in events {
            debug!("event=editor_input event={:?}", event);
            frame = editor.handle_event(event);
            if frame.prompt.is_some() || frame.done {
                break;
            }
        }
        hits = paint(&mut session.out, &frame, &caps)?;
    }

    Ok(())
}
