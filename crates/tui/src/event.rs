//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal
//! events to application messages. The mapping depends on whether the
//! focused control is a text input: printable keys either edit text or
//! act as board commands.

use std::time::Duration;

use clawdeck_protocol::Message;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// How printable keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys act as board commands.
    Command,
    /// Keys feed the focused text control.
    Text,
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action in the
/// given mode, or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Command mode | Text mode |
/// |-----|--------------|-----------|
/// | `Ctrl+C` | Quit | Quit |
/// | `Tab` | Switch card | Switch card |
/// | `Esc` | Cancel (release grab) | Cancel (stop editing) |
/// | `Enter` | Submit (drop) | Submit (send / commit draft) |
/// | `F1`-`F3` | Quick action | Quick action |
/// | arrows | Navigate | - |
/// | `n` | New task draft | typed |
/// | `g` | Grab task | typed |
/// | `x` | Delete task | typed |
/// | `r` | Refresh status | typed |
/// | `h` | Health check | typed |
/// | `o` | Open board link | typed |
#[must_use]
pub fn key_to_message(key: KeyEvent, mode: InputMode) -> Option<Message> {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    // Bindings shared by both modes
    match key.code {
        KeyCode::Tab => return Some(Message::FocusNext),
        KeyCode::Esc => return Some(Message::Cancel),
        KeyCode::Enter => return Some(Message::Submit),
        KeyCode::F(n @ 1..=3) => return Some(Message::QuickAction(n as usize - 1)),
        _ => {}
    }

    match mode {
        InputMode::Text => match key.code {
            KeyCode::Backspace => Some(Message::Backspace),
            KeyCode::Char(c) => Some(Message::Input(c)),
            _ => None,
        },
        InputMode::Command => match key.code {
            KeyCode::Left => Some(Message::NavigateLeft),
            KeyCode::Right => Some(Message::NavigateRight),
            KeyCode::Up => Some(Message::NavigateUp),
            KeyCode::Down => Some(Message::NavigateDown),
            KeyCode::Char('n') => Some(Message::NewTask),
            KeyCode::Char('g') => Some(Message::Grab),
            KeyCode::Char('x') => Some(Message::Delete),
            KeyCode::Char('r') => Some(Message::Refresh),
            KeyCode::Char('h') => Some(Message::HealthCheck),
            KeyCode::Char('o') => Some(Message::OpenBoard),
            _ => None,
        },
    }
}
