//! Sample board data for demos and widget tests.

use crate::board::Board;
use crate::task::Column;

/// Builds a board with a handful of tasks spread across the columns.
///
/// Used by the widget tests and as a stand-in board when running
/// without any persisted state worth showing.
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::sample_board;
///
/// let board = sample_board();
/// assert!(!board.is_empty());
/// ```
#[must_use]
pub fn sample_board() -> Board {
    let mut board = Board::new();

    // add_task prepends, so insert in reverse display order
    board.add_task(Column::Done, "Wire up gateway config entry");
    board.add_task(Column::Review, "Review prompt card feedback copy");
    board.add_task(Column::InProgress, "Summarize overnight agent runs");
    board.add_task(Column::Todo, "Draft release notes");
    board.add_task(Column::Todo, "Check gateway session usage");

    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_board_covers_all_columns() {
        let board = sample_board();
        for column in Column::all() {
            assert!(!board.tasks_in(column).is_empty());
        }
    }
}
