//! Task types for the Kanban board card.
//!
//! This module defines the task record persisted by the board card,
//! including its identifier, column, and priority types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Uses UUID v4 for globally unique identification. Identifiers are
/// generated once at creation and never reused.
pub type TaskId = uuid::Uuid;

/// A column on the Kanban board.
///
/// Represents the workflow stages that tasks move through. The order
/// reflects the typical progression of work.
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::Column;
///
/// let column = Column::InProgress;
/// assert_eq!(column.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    /// Tasks waiting to be started.
    #[default]
    Todo,
    /// Tasks currently being worked on.
    InProgress,
    /// Tasks awaiting review or approval.
    Review,
    /// Completed tasks.
    Done,
}

impl Column {
    /// Returns all columns in workflow order.
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::Column;
    ///
    /// let columns = Column::all();
    /// assert_eq!(columns.len(), 4);
    /// assert_eq!(columns[0], Column::Todo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Todo, Self::InProgress, Self::Review, Self::Done]
    }

    /// Returns a human-readable display name for the column.
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::Column;
    ///
    /// assert_eq!(Column::Todo.display_name(), "To Do");
    /// assert_eq!(Column::InProgress.display_name(), "In Progress");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Returns the index of this column in the workflow (0-3).
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::Column;
    ///
    /// assert_eq!(Column::Todo.index(), 0);
    /// assert_eq!(Column::Done.index(), 3);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Done => 3,
        }
    }

    /// Creates a `Column` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 4).
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::Column;
    ///
    /// assert_eq!(Column::from_index(0), Some(Column::Todo));
    /// assert_eq!(Column::from_index(4), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Review),
            3 => Some(Self::Done),
            _ => None,
        }
    }
}

/// The priority of a task.
///
/// Every task is created with [`Priority::Medium`]. The field is kept
/// on the record and in the persisted format as an extension point; no
/// operation mutates it after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Low-urgency work.
    Low,
    /// The default priority for new tasks.
    #[default]
    Medium,
    /// High-urgency work.
    High,
}

/// A task on the Kanban board card.
///
/// Tasks are created in a column, moved between columns, and deleted.
/// The title is immutable after creation; there is no edit operation.
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::{Column, Priority, Task};
///
/// let task = Task::new("Buy milk", Column::Todo);
/// assert_eq!(task.status, Column::Todo);
/// assert_eq!(task.priority, Priority::Medium);
/// assert!(task.updated_at.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task. Non-empty, trimmed.
    pub title: String,
    /// Which column this task currently resides in.
    pub status: Column,
    /// Priority of the task. Always `Medium` at creation.
    pub priority: Priority,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
    /// When this task last changed column. Absent until the first move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task with the given title in the given column.
    ///
    /// The task gets a fresh id, `Medium` priority, and a creation
    /// timestamp. `updated_at` stays unset until the first move.
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::{Column, Task};
    ///
    /// let task = Task::new("Fix login bug", Column::InProgress);
    /// assert_eq!(task.title, "Fix login bug");
    /// assert_eq!(task.status, Column::InProgress);
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, status: Column) -> Self {
        Self {
            id: TaskId::new_v4(),
            title: title.into(),
            status,
            priority: Priority::default(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Creates a new task with a specific ID.
    ///
    /// Useful for testing or when recreating tasks from storage.
    #[must_use]
    pub fn with_id(id: TaskId, title: impl Into<String>, status: Column) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            priority: Priority::default(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Moves the task to a different column and stamps `updated_at`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::{Column, Task};
    ///
    /// let mut task = Task::new("Work item", Column::Todo);
    /// task.move_to(Column::Done);
    /// assert_eq!(task.status, Column::Done);
    /// assert!(task.updated_at.is_some());
    /// ```
    pub fn move_to(&mut self, column: Column) {
        self.status = column;
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_all_returns_workflow_order() {
        let all = Column::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], Column::Todo);
        assert_eq!(all[1], Column::InProgress);
        assert_eq!(all[2], Column::Review);
        assert_eq!(all[3], Column::Done);
    }

    #[test]
    fn column_index_roundtrip() {
        for column in Column::all() {
            let idx = column.index();
            assert_eq!(Column::from_index(idx), Some(column));
        }
    }

    #[test]
    fn column_json_format() {
        let json = serde_json::to_string(&Column::InProgress).expect("serialize");
        assert_eq!(json, r#""in-progress""#);

        let json = serde_json::to_string(&Column::Todo).expect("serialize");
        assert_eq!(json, r#""todo""#);
    }

    #[test]
    fn priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_json_format() {
        let json = serde_json::to_string(&Priority::Medium).expect("serialize");
        assert_eq!(json, r#""medium""#);
    }

    #[test]
    fn task_new_creates_with_defaults() {
        let task = Task::new("Test", Column::Todo);

        assert_eq!(task.title, "Test");
        assert_eq!(task.status, Column::Todo);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn task_with_id_preserves_id() {
        let id = TaskId::new_v4();
        let task = Task::with_id(id, "Test", Column::Review);

        assert_eq!(task.id, id);
        assert_eq!(task.status, Column::Review);
    }

    #[test]
    fn task_move_to_stamps_updated_at() {
        let mut task = Task::new("Test", Column::Todo);
        assert!(task.updated_at.is_none());

        task.move_to(Column::Done);

        assert_eq!(task.status, Column::Done);
        assert!(task.updated_at.is_some());
    }

    #[test]
    fn task_serialization_omits_unset_updated_at() {
        let task = Task::new("Test", Column::Todo);
        let json = serde_json::to_string(&task).expect("serialize");
        assert!(!json.contains("updated_at"));

        let parsed: Task = serde_json::from_str(&json).expect("deserialize");
        assert!(parsed.updated_at.is_none());
    }

    #[test]
    fn task_serialization_roundtrip() {
        let mut task = Task::new("Test task", Column::Todo);
        task.move_to(Column::Review);

        let json = serde_json::to_string(&task).expect("serialize");
        let parsed: Task = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(task, parsed);
    }
}
