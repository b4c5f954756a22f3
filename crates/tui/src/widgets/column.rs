//! Column rendering widget.
//!
//! This module provides functions for rendering individual board
//! columns with their headers, draft rows, and task lists.

use clawdeck_protocol::{Column, Task};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::task_card::render_task_card;

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// First (leftmost) column - has left border with rounded corners.
    First,
    /// Middle columns - has left border with T-connectors (no rounded corners on left).
    Middle,
    /// Last (rightmost) column - has both borders, rounded on right, T-connectors on left.
    Last,
}

/// Border set for the first (leftmost) column: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─", // No corner, just continues the line
    bottom_left: "╰",
    bottom_right: "─", // No corner, just continues the line
    vertical_left: "│",
    vertical_right: " ", // No right border
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",     // T-connector joining from previous column
    top_right: "─",    // No corner, just continues the line
    bottom_left: "┴",  // T-connector joining from previous column
    bottom_right: "─", // No corner, just continues the line
    vertical_left: "│",
    vertical_right: " ", // No right border
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) column: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",     // T-connector joining from previous column
    top_right: "╮",    // Rounded corner on outer edge
    bottom_left: "┴",  // T-connector joining from previous column
    bottom_right: "╯", // Rounded corner on outer edge
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Height of each task card in rows.
const TASK_CARD_HEIGHT: u16 = 4;

/// Everything a single column needs to render.
#[derive(Debug)]
pub struct ColumnView<'a> {
    /// The column this view renders.
    pub column: Column,
    /// Tasks in this column, display order (newest first).
    pub tasks: Vec<&'a Task>,
    /// The draft text being edited for this column, if any.
    pub draft: Option<&'a str>,
    /// Whether a grab is in progress somewhere on the board.
    pub grab_active: bool,
    /// Whether this column currently has focus.
    pub is_focused: bool,
    /// Index of the selected task within this column, if any.
    pub selected: Option<usize>,
}

/// Renders a single column to the buffer.
///
/// A column displays its header (name and task count), an optional
/// draft row while a new task is being typed, and a vertical list of
/// task cards. Empty columns show a "No tasks" placeholder. While a
/// grab is active the focused column's border turns yellow to mark the
/// drop target.
///
/// # Layout
///
/// ```text
/// +----------------+
/// | To Do (3)      |  <- Header with name and count
/// +----------------+
/// | + new task_    |  <- Draft row (only while editing)
/// | +------------+ |
/// | | Task 1     | |  <- Task cards
/// | | medium     | |
/// | +------------+ |
/// +----------------+
/// ```
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::{Column, Task};
/// use clawdeck_tui::widgets::{render_column, ColumnPosition, ColumnView};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let task = Task::new("Task 1", Column::Todo);
/// let view = ColumnView {
///     column: Column::Todo,
///     tasks: vec![&task],
///     draft: None,
///     grab_active: false,
///     is_focused: true,
///     selected: Some(0),
/// };
///
/// let area = Rect::new(0, 0, 20, 15);
/// let mut buf = Buffer::empty(area);
///
/// render_column(&view, area, &mut buf, ColumnPosition::First, false);
/// ```
pub fn render_column(
    view: &ColumnView<'_>,
    area: Rect,
    buf: &mut Buffer,
    position: ColumnPosition,
    prev_focused: bool,
) {
    // Determine border style based on focus.
    // For the left border (shared with the previous column), highlight if either is focused.
    let left_border_highlighted = view.is_focused || prev_focused;
    let focus_color = if view.grab_active {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let border_style = if view.is_focused {
        Style::default().fg(focus_color)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Create the column header
    let title = format!("{} ({})", view.column.display_name(), view.tasks.len());
    let title_style = if view.is_focused {
        Style::default()
            .fg(focus_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Determine which borders to render based on column position.
    // This collapses borders between adjacent columns to avoid double-borders:
    // - First column has LEFT border, no RIGHT (next column provides it)
    // - Middle columns have LEFT border, no RIGHT (next column provides it)
    // - Last column has both LEFT and RIGHT borders
    let borders = match position {
        ColumnPosition::First | ColumnPosition::Middle => {
            Borders::TOP | Borders::BOTTOM | Borders::LEFT
        }
        ColumnPosition::Last => Borders::ALL,
    };

    // Select the appropriate border set based on position
    let border_set = match position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    // Render the outer block
    let inner_area = block.inner(area);
    block.render(area, buf);

    // If the left border should be highlighted (previous column is focused) but this
    // column isn't, recolor the left border since the block was rendered with gray.
    if left_border_highlighted && !view.is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(focus_color);
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    // Reserve the top row for the draft while one is being typed
    let mut list_area = inner_area;
    if let Some(draft) = view.draft {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner_area);
        render_draft_row(draft, rows[0], buf);
        list_area = rows[1];
    }

    // Handle empty columns
    if view.tasks.is_empty() {
        if view.draft.is_none() {
            render_empty_placeholder(list_area, buf);
        }
        return;
    }

    // Calculate how many tasks can fit in the visible area
    let visible_tasks = (list_area.height / TASK_CARD_HEIGHT).max(1) as usize;

    // Determine scroll offset to keep selected task visible
    let scroll_offset = calculate_scroll_offset(view.selected, view.tasks.len(), visible_tasks);

    // Create constraints for visible task cards
    let task_count = view.tasks.len().min(visible_tasks);
    let mut constraints: Vec<Constraint> = (0..task_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // Fill remaining space

    let task_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(list_area);

    // Render visible task cards
    for (i, task_area) in task_areas.iter().take(task_count).enumerate() {
        let task_idx = scroll_offset + i;
        let Some(task) = view.tasks.get(task_idx) else {
            break;
        };

        let is_selected = view.is_focused && view.selected == Some(task_idx);
        let is_grabbed = view.grab_active && is_selected;

        render_task_card(task, is_selected, is_grabbed, *task_area, buf);
    }
}

/// Renders the in-progress draft as a single input row.
fn render_draft_row(draft: &str, area: Rect, buf: &mut Buffer) {
    let row = Paragraph::new(Line::from(vec![
        Span::styled("+ ", Style::default().fg(Color::Green)),
        Span::styled(draft, Style::default().fg(Color::White)),
        Span::styled("▏", Style::default().fg(Color::Green)),
    ]));

    row.render(area, buf);
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset to keep the selected task visible.
fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_tasks <= visible_tasks {
        return 0;
    }

    // Ensure selected task is visible
    let max_offset = total_tasks.saturating_sub(visible_tasks);

    if selected < visible_tasks / 2 {
        0
    } else {
        (selected.saturating_sub(visible_tasks / 2)).min(max_offset)
    }
}
