//! Task card rendering widget.

use clawdeck_protocol::{Priority, Task};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Returns the accent color for a task priority.
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::Priority;
/// use clawdeck_tui::widgets::priority_color;
/// use ratatui::style::Color;
///
/// assert_eq!(priority_color(Priority::Medium), Color::Blue);
/// assert_eq!(priority_color(Priority::High), Color::Yellow);
/// ```
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::DarkGray,
        Priority::Medium => Color::Blue,
        Priority::High => Color::Yellow,
    }
}

/// Brighter accent for selected cards.
const fn priority_color_bright(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Gray,
        Priority::Medium => Color::LightBlue,
        Priority::High => Color::LightYellow,
    }
}

const fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

/// Renders a task card to the buffer.
///
/// The card shows the task title over a dim priority line inside a
/// border whose color follows the priority. A grabbed card is marked
/// with a magenta border and a grab indicator, a selected card with
/// brighter colors.
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::{Column, Task};
/// use clawdeck_tui::widgets::render_task_card;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let task = Task::new("Buy milk", Column::Todo);
/// let area = Rect::new(0, 0, 20, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, false, false, area, &mut buf);
/// ```
pub fn render_task_card(task: &Task, is_selected: bool, is_grabbed: bool, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, title_style) = if is_grabbed {
        (
            Color::Magenta,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    } else if is_selected {
        (
            priority_color_bright(task.priority),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (priority_color(task.priority), Style::default().fg(Color::White))
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let title = truncate_string(&task.title, inner_width);

    let meta = if is_grabbed {
        "grabbed".to_string()
    } else {
        priority_label(task.priority).to_string()
    };

    let content = vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray))),
    ];

    let card = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    card.render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
