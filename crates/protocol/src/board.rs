//! The board collection and its mutating operations.
//!
//! Operations mutate the collection in place and return the ordered
//! list of side effects the caller must perform. Keeping the effects
//! explicit lets the board be unit tested without a rendering surface
//! or a live gateway connection.

use serde::{Deserialize, Serialize};

use crate::task::{Column, Task, TaskId};

/// A side effect requested by a board operation.
///
/// Effects are returned in the order they must be performed: the board
/// is persisted before any remote notification is attempted, and every
/// state change ends in a re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Serialize the entire collection and overwrite the stored value.
    Persist,
    /// Best-effort remote notification describing the mutation.
    Notify(String),
    /// Redraw the card.
    Render,
}

/// The task collection backing the Kanban board card.
///
/// The collection is insertion-ordered overall (new tasks are
/// prepended) and partitioned across the four columns by each task's
/// `status` field.
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::{Board, Column, Effect};
///
/// let mut board = Board::default();
/// let effects = board.add_task(Column::Todo, "Buy milk");
/// assert_eq!(effects[0], Effect::Persist);
/// assert_eq!(board.tasks_in(Column::Todo).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// All tasks, newest first.
    pub tasks: Vec<Task>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the board has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the tasks in the given column, preserving insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::{Board, Column};
    ///
    /// let mut board = Board::new();
    /// board.add_task(Column::Todo, "First");
    /// board.add_task(Column::Todo, "Second");
    ///
    /// let todo = board.tasks_in(Column::Todo);
    /// assert_eq!(todo[0].title, "Second"); // newest first
    /// assert_eq!(todo[1].title, "First");
    /// ```
    #[must_use]
    pub fn tasks_in(&self, column: Column) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == column).collect()
    }

    /// Returns a reference to a task by id, if present.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Creates a new task from a draft string in the given column.
    ///
    /// The draft is trimmed; a whitespace-only draft is silently
    /// ignored and produces no effects. Otherwise the task is prepended
    /// to the collection with `Medium` priority and the effects request
    /// a persist, a notification describing the creation, and a
    /// re-render.
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::{Board, Column};
    ///
    /// let mut board = Board::new();
    /// assert!(board.add_task(Column::Todo, "   ").is_empty());
    /// assert!(!board.add_task(Column::Todo, "Buy milk").is_empty());
    /// ```
    pub fn add_task(&mut self, column: Column, draft: &str) -> Vec<Effect> {
        let title = draft.trim();
        if title.is_empty() {
            return Vec::new();
        }

        let task = Task::new(title, column);
        let note = format!(
            "Created task \"{}\" in {}",
            task.title,
            column.display_name()
        );
        self.tasks.insert(0, task);

        vec![Effect::Persist, Effect::Notify(note), Effect::Render]
    }

    /// Moves a task to a different column.
    ///
    /// No-op if the id is unknown or the task is already in the target
    /// column; both cases produce an empty effect list (no persistence
    /// write, no notification). Otherwise the task's status and
    /// `updated_at` are updated in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::{Board, Column};
    ///
    /// let mut board = Board::new();
    /// board.add_task(Column::Todo, "Task");
    /// let id = board.tasks[0].id;
    ///
    /// assert!(board.move_task(id, Column::Todo).is_empty()); // redundant move
    /// assert!(!board.move_task(id, Column::Done).is_empty());
    /// ```
    pub fn move_task(&mut self, id: TaskId, to: Column) -> Vec<Effect> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Vec::new();
        };
        if task.status == to {
            return Vec::new();
        }

        task.move_to(to);
        let note = format!("Moved task \"{}\" to {}", task.title, to.display_name());

        vec![Effect::Persist, Effect::Notify(note), Effect::Render]
    }

    /// Resolves a drop payload against a target column.
    ///
    /// The payload is the plain-text identifier attached when a drag
    /// starts. It is not validated before the move is attempted; a
    /// payload that does not name a known task falls through to
    /// [`Board::move_task`]'s no-op rule.
    pub fn resolve_drop(&mut self, payload: &str, to: Column) -> Vec<Effect> {
        match payload.trim().parse::<TaskId>() {
            Ok(id) => self.move_task(id, to),
            Err(_) => Vec::new(),
        }
    }

    /// Deletes a task by id.
    ///
    /// No-op if the id is unknown. Removes the first match (identifiers
    /// are unique, so this is the only match). Deletion persists and
    /// re-renders but is never mirrored remotely.
    pub fn delete_task(&mut self, id: TaskId) -> Vec<Effect> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return Vec::new();
        };
        self.tasks.remove(pos);

        vec![Effect::Persist, Effect::Render]
    }
}
