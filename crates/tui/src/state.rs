//! Application state management.
//!
//! All card state lives here, owned by the application instance:
//! the board collection, the per-column drafts, the prompt card's
//! input/pending/status trio, and the latest status snapshot read
//! passively at render time.

use clawdeck_gateway::StatusSnapshot;
use clawdeck_protocol::{Board, Column, TaskId};

/// The card that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The prompt card's text input.
    #[default]
    Prompt,
    /// The Kanban board card.
    Board,
}

/// State of the prompt card.
///
/// The pending flag is the card's only state machine: it is set when a
/// send starts and cleared by the completion event for either outcome.
/// While pending, the input is disabled; that disabling is what
/// prevents concurrent submissions.
#[derive(Debug, Clone, Default)]
pub struct PromptState {
    /// The free-text input.
    pub input: String,
    /// Whether a send is in flight.
    pub pending: bool,
    /// Human-readable outcome of the last send, if any.
    pub status_line: Option<String>,
}

/// The application state.
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::Board;
/// use clawdeck_tui::AppState;
///
/// let state = AppState::new(Board::new());
/// assert_eq!(state.selected_column, 0);
/// assert!(state.grabbed.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct AppState {
    /// The task collection backing the board card.
    pub board: Board,
    /// One draft string per column, indexed by [`Column::index`].
    pub drafts: [String; 4],
    /// The column whose draft is being edited, if any.
    pub editing: Option<Column>,
    /// Prompt card state.
    pub prompt: PromptState,
    /// Latest host-observed status values.
    pub snapshot: StatusSnapshot,
    /// Which card receives keyboard input.
    pub focus: Focus,
    /// Index of the currently selected column (0-3).
    pub selected_column: usize,
    /// Index of the selected task within the current column, if any.
    pub selected_task: Option<usize>,
    /// Plain-text payload attached when a grab starts. Not validated
    /// against the collection; move's no-op rule is the safety net.
    pub grabbed: Option<String>,
    /// Human-readable outcome of the last board-card action, if any.
    pub board_status: Option<String>,
}

impl AppState {
    /// Creates a new application state around the given board.
    ///
    /// Focus starts on the prompt card with the first column selected.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            drafts: Default::default(),
            editing: None,
            prompt: PromptState::default(),
            snapshot: StatusSnapshot::offline(),
            focus: Focus::default(),
            selected_column: 0,
            selected_task: None,
            grabbed: None,
            board_status: None,
        }
    }

    /// Returns the currently selected column.
    #[must_use]
    pub fn column(&self) -> Column {
        Column::from_index(self.selected_column).unwrap_or_default()
    }

    /// Returns the id of the selected task, if one is selected.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        let idx = self.selected_task?;
        self.board.tasks_in(self.column()).get(idx).map(|t| t.id)
    }

    /// Returns the draft string for the given column.
    #[must_use]
    pub fn draft(&self, column: Column) -> &str {
        &self.drafts[column.index()]
    }

    /// Returns a mutable reference to the given column's draft.
    pub fn draft_mut(&mut self, column: Column) -> &mut String {
        &mut self.drafts[column.index()]
    }

    /// Switches focus between the prompt card and the board card.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Prompt => Focus::Board,
            Focus::Board => Focus::Prompt,
        };
    }

    /// Moves the column selection to the left, wrapping around.
    pub fn navigate_left(&mut self) {
        if self.selected_column > 0 {
            self.selected_column -= 1;
        } else {
            self.selected_column = 3;
        }
        self.clamp_task_selection();
    }

    /// Moves the column selection to the right, wrapping around.
    pub fn navigate_right(&mut self) {
        if self.selected_column < 3 {
            self.selected_column += 1;
        } else {
            self.selected_column = 0;
        }
        self.clamp_task_selection();
    }

    /// Moves the task selection up within the current column.
    pub fn navigate_up(&mut self) {
        let count = self.board.tasks_in(self.column()).len();
        self.selected_task = match self.selected_task {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => None,
            None if count > 0 => Some(count - 1),
            None => None,
        };
    }

    /// Moves the task selection down within the current column.
    pub fn navigate_down(&mut self) {
        let count = self.board.tasks_in(self.column()).len();
        if count == 0 {
            self.selected_task = None;
            return;
        }
        self.selected_task = match self.selected_task {
            Some(idx) if idx + 1 < count => Some(idx + 1),
            Some(idx) => Some(idx),
            None => Some(0),
        };
    }

    /// Keeps the task selection within the current column's bounds.
    pub fn clamp_task_selection(&mut self) {
        let count = self.board.tasks_in(self.column()).len();
        self.selected_task = match self.selected_task {
            _ if count == 0 => None,
            Some(idx) if idx >= count => Some(count - 1),
            other => other,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_tasks() -> Board {
        let mut board = Board::new();
        board.add_task(Column::Todo, "One");
        board.add_task(Column::Todo, "Two");
        board.add_task(Column::Review, "Three");
        board
    }

    #[test]
    fn new_state_defaults() {
        let state = AppState::new(Board::new());

        assert_eq!(state.focus, Focus::Prompt);
        assert_eq!(state.selected_column, 0);
        assert!(state.selected_task.is_none());
        assert!(state.editing.is_none());
        assert!(!state.prompt.pending);
    }

    #[test]
    fn focus_toggles_between_cards() {
        let mut state = AppState::new(Board::new());

        state.focus_next();
        assert_eq!(state.focus, Focus::Board);
        state.focus_next();
        assert_eq!(state.focus, Focus::Prompt);
    }

    #[test]
    fn column_navigation_wraps() {
        let mut state = AppState::new(Board::new());

        state.navigate_left();
        assert_eq!(state.selected_column, 3);
        state.navigate_right();
        assert_eq!(state.selected_column, 0);
    }

    #[test]
    fn task_navigation_stays_in_bounds() {
        let mut state = AppState::new(board_with_tasks());

        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_down();
        assert_eq!(state.selected_task, Some(1));
        state.navigate_down(); // bottom of a two-task column
        assert_eq!(state.selected_task, Some(1));

        state.navigate_up();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_up();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn navigation_clamps_selection_across_columns() {
        let mut state = AppState::new(board_with_tasks());
        state.navigate_down();
        state.navigate_down(); // second task in To Do

        state.navigate_right(); // In Progress is empty
        assert!(state.selected_task.is_none());
    }

    #[test]
    fn selected_task_id_resolves_through_filtered_view() {
        let mut state = AppState::new(board_with_tasks());
        state.navigate_down();

        let id = state.selected_task_id().expect("task selected");
        // tasks_in returns newest first
        assert_eq!(state.board.tasks_in(Column::Todo)[0].id, id);
    }

    #[test]
    fn drafts_are_tracked_per_column() {
        let mut state = AppState::new(Board::new());

        state.draft_mut(Column::Todo).push_str("milk");
        state.draft_mut(Column::Done).push_str("eggs");

        assert_eq!(state.draft(Column::Todo), "milk");
        assert_eq!(state.draft(Column::Done), "eggs");
        assert_eq!(state.draft(Column::Review), "");
    }
}
