//! Kanban board rendering widget.
//!
//! This module provides functions for rendering the complete board card
//! with its four columns arranged horizontally.

use clawdeck_protocol::{Board, Column};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::column::{ColumnPosition, ColumnView, render_column};

/// Everything the board card needs to render.
#[derive(Debug)]
pub struct BoardView<'a> {
    /// The task collection.
    pub board: &'a Board,
    /// Index of the currently focused column (0-3).
    pub selected_column: usize,
    /// Index of the selected task within the focused column, if any.
    pub selected_task: Option<usize>,
    /// Whether the board card has keyboard focus.
    pub is_focused: bool,
    /// Per-column draft strings, indexed by [`Column::index`].
    pub drafts: &'a [String; 4],
    /// The column whose draft is being edited, if any.
    pub editing: Option<Column>,
    /// Whether a grab is in progress.
    pub grab_active: bool,
}

/// Renders the complete board card to the buffer.
///
/// The board displays four columns (To Do, In Progress, Review, Done)
/// arranged horizontally with equal widths. Each column shows its tasks
/// with the selected column and task highlighted; while a grab is
/// active the focused column marks the drop target.
///
/// # Layout
///
/// ```text
/// +------------+------------+------------+------------+
/// | To Do      | In Progress| Review     | Done       |
/// +------------+------------+------------+------------+
/// | Task 1     | Task 3     | Task 5     | Task 7     |
/// | Task 2     | Task 4     |            |            |
/// |            |            |            |            |
/// +------------+------------+------------+------------+
/// ```
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::{Board, Column};
/// use clawdeck_tui::widgets::{render_board, BoardView};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let mut board = Board::new();
/// board.add_task(Column::Todo, "Task 1");
///
/// let drafts = Default::default();
/// let view = BoardView {
///     board: &board,
///     selected_column: 0,
///     selected_task: Some(0),
///     is_focused: true,
///     drafts: &drafts,
///     editing: None,
///     grab_active: false,
/// };
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&view, area, &mut buf);
/// ```
pub fn render_board(view: &BoardView<'_>, area: Rect, buf: &mut Buffer) {
    // Split into 4 equal columns
    let column_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let column_count = Column::all().len();
    for (i, column) in Column::all().iter().enumerate() {
        let is_focused = view.is_focused && view.selected_column == i;

        // Only show task selection in the focused column
        let selected = if is_focused { view.selected_task } else { None };

        // Determine column position for border rendering
        let position = if i == 0 {
            ColumnPosition::First
        } else if i == column_count - 1 {
            ColumnPosition::Last
        } else {
            ColumnPosition::Middle
        };

        // Check if the previous column is focused (for shared border coloring)
        let prev_focused = i > 0 && view.is_focused && view.selected_column == i - 1;

        let column_view = ColumnView {
            column: *column,
            tasks: view.board.tasks_in(*column),
            draft: (view.editing == Some(*column)).then(|| view.drafts[i].as_str()),
            grab_active: view.grab_active,
            is_focused,
            selected,
        };

        render_column(&column_view, column_areas[i], buf, position, prev_focused);
    }
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

    fn view_of<'a>(board: &'a Board, drafts: &'a [String; 4]) -> BoardView<'a> {
        BoardView {
            board,
            selected_column: 0,
            selected_task: None,
            is_focused: true,
            drafts,
            editing: None,
            grab_active: false,
        }
    }

    #[test]
    fn render_empty_board() {
        let board = Board::new();
        let drafts = Default::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        render_board(&view_of(&board, &drafts), area, &mut buf);

        let content = buffer_to_string(&buf);
        // All four columns should be rendered
        assert!(content.contains("To Do"));
        assert!(content.contains("In Progress"));
        assert!(content.contains("Review"));
        assert!(content.contains("Done"));
    }

    #[test]
    fn render_board_with_tasks() {
        let mut board = Board::new();
        board.add_task(Column::Todo, "Task 1");
        board.add_task(Column::Todo, "Task 2");

        let drafts = Default::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        let mut view = view_of(&board, &drafts);
        view.selected_task = Some(0);
        render_board(&view, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("To Do (2)"));
    }

    #[test]
    fn render_board_shows_active_draft_only() {
        let board = Board::new();
        let drafts = [
            String::new(),
            "Fix the gateway".to_string(),
            String::new(),
            String::new(),
        ];

        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);

        let mut view = view_of(&board, &drafts);
        view.editing = Some(Column::InProgress);
        render_board(&view, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("+ Fix the gateway"));
    }

    #[test]
    fn render_sample_board_fills_every_column() {
        let board = clawdeck_protocol::sample_board();
        let drafts = Default::default();
        let area = Rect::new(0, 0, 120, 24);
        let mut buf = Buffer::empty(area);

        render_board(&view_of(&board, &drafts), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(!content.contains("No tasks"));
        assert!(content.contains("Draft release notes"));
    }

    #[test]
    fn render_board_narrow_terminal() {
        let board = Board::new();
        let drafts = Default::default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with a narrow area
        render_board(&view_of(&board, &drafts), area, &mut buf);
    }
}
