//! Status bar rendering widget.
//!
//! This module provides functions for rendering the footer status bar
//! with keybinding hints and the outcome of the last board action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::Focus;

/// Renders the status bar with keybinding hints.
///
/// The hints follow the focused card: the prompt card shows text-entry
/// bindings, the board card shows its command keys. A board action
/// outcome, when present, is shown before the hints.
///
/// # Layout
///
/// ```text
/// +----------------------------------------------------+
/// | Saved  |  Tab Cards  ←→↑↓ Move  n New  g Grab ...  |
/// +----------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use clawdeck_tui::Focus;
/// use clawdeck_tui::widgets::render_status_bar;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Focus::Board, None, area, &mut buf);
/// ```
pub fn render_status_bar(focus: Focus, message: Option<&str>, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let message_style = Style::default().fg(Color::Cyan);

    let mut spans = Vec::new();
    if let Some(message) = message {
        spans.push(Span::styled(message.to_string(), message_style));
        spans.push(Span::styled("  |  ", text_style));
    }

    let hints: &[(&str, &str)] = match focus {
        Focus::Prompt => &[
            ("Tab", " Cards  "),
            ("Enter", " Send  "),
            ("F1-F3", " Quick  "),
            ("Ctrl+C", " Quit"),
        ],
        Focus::Board => &[
            ("Tab", " Cards  "),
            ("←→↑↓", " Move  "),
            ("n", " New  "),
            ("g", " Grab  "),
            ("Enter", " Drop  "),
            ("x", " Delete  "),
            ("r", " Refresh  "),
            ("h", " Health  "),
            ("Ctrl+C", " Quit"),
        ],
    };
    for (key, text) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*text, text_style));
    }

    let status_bar =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    status_bar.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to convert buffer to string for testing.
    fn buffer_to_string(buf: &Buffer) -> String {
        let mut result = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    result.push_str(cell.symbol());
                }
            }
            result.push('\n');
        }
        result
    }

    #[test]
    fn board_hints_include_board_keys() {
        let area = Rect::new(0, 0, 100, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(Focus::Board, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Grab"));
        assert!(content.contains("Delete"));
        assert!(content.contains("Quit"));
    }

    #[test]
    fn prompt_hints_omit_board_keys() {
        let area = Rect::new(0, 0, 100, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(Focus::Prompt, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Send"));
        assert!(!content.contains("Grab"));
    }

    #[test]
    fn message_is_shown_before_hints() {
        let area = Rect::new(0, 0, 100, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(
            Focus::Board,
            Some("Created task \"Buy milk\" in To Do"),
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Created task \"Buy milk\" in To Do"));
    }
}
