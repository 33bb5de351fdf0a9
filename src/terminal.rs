//! Terminal-backed event production.
//!
//! A blocking pump reads crossterm key events in raw mode, owns the
//! authoritative line buffer, and feeds the in-process event channel.
//! Prompts stay terminal-agnostic; they only ever see [`PromptEvent`]s.

use crate::events::{InputHandle, InputSource, Key, KeyPress, PromptEvent};
use crate::settings;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Raw mode lifetime guard so terminal state is restored on any return path.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Translate a crossterm key event into the engine's key identity.
///
/// Enter is intentionally absent: the pump turns it into a `Line` event
/// instead of a keypress.
fn translate(key: &KeyEvent) -> Option<KeyPress> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let name = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => return None,
    };
    Some(KeyPress { name, ctrl })
}

/// Spawn the raw-mode key pump on the blocking pool.
///
/// Returns the event source prompts attach to, plus a join handle resolving
/// when the pump exits. The pump stops on Ctrl+C, Ctrl+D, or when the source
/// is dropped; dropping its producer handle then lets any attached prompt
/// observe end-of-input.
pub fn spawn_pump() -> (InputSource, JoinHandle<io::Result<()>>) {
    let (handle, source) = InputSource::channel();
    let pump = tokio::task::spawn_blocking(move || run_pump(handle));
    (source, pump)
}

fn run_pump(handle: InputHandle) -> io::Result<()> {
    let _guard = RawModeGuard::acquire()?;
    let mut buffer = String::new();
    debug!("terminal pump started");

    loop {
        if handle.is_closed() {
            debug!("terminal pump stopping, consumer gone");
            return Ok(());
        }
        if !event::poll(Duration::from_millis(settings::EVENT_POLL_MS))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                let line = std::mem::take(&mut buffer);
                trace!(len = line.len(), "line submitted");
                handle.send(PromptEvent::Line(line));
            }
            KeyCode::Char('c') if ctrl => {
                debug!("terminal pump stopping on ctrl+c");
                return Ok(());
            }
            KeyCode::Char('d') if ctrl => {
                debug!("terminal pump stopping on ctrl+d");
                return Ok(());
            }
            KeyCode::Backspace => {
                buffer.pop();
                handle.key(KeyPress::plain(Key::Backspace));
            }
            KeyCode::Char(ch) => {
                if !ctrl {
                    buffer.push(ch);
                }
                handle.key(KeyPress {
                    name: Key::Char(ch),
                    ctrl,
                });
            }
            _ => {
                if let Some(press) = translate(&key) {
                    handle.key(press);
                }
            }
        }
    }
}
