//! Board persistence.
//!
//! The entire task collection lives as one JSON document under a
//! configurable storage key. Reads happen once at startup; a missing,
//! unreadable, or corrupt document silently yields an empty board.
//! Writes happen after every mutating operation and overwrite the
//! stored value before any remote notification is attempted.

use std::path::{Path, PathBuf};

use clawdeck_protocol::Board;
use tracing::warn;

use crate::error::{Result, StoreError};

/// Directory under the user data dir that holds board documents.
const STORE_DIR: &str = "clawdeck";

/// Storage slot for one board, keyed by a configurable name.
///
/// No coordination is attempted across multiple stores sharing the
/// same key; the single-writer guarantee comes from the event loop.
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::{Board, Column};
/// use clawdeck_store::BoardStore;
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = BoardStore::at_path(dir.path().join("kanban.json"));
///
/// let mut board = Board::new();
/// board.add_task(Column::Todo, "Buy milk");
/// store.save(&board).unwrap();
///
/// assert_eq!(store.load(), board);
/// ```
#[derive(Debug, Clone)]
pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    /// Creates a store for the given storage key under the user data
    /// directory, typically `~/.local/share/clawdeck/<key>.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the user data directory cannot be
    /// determined.
    pub fn for_key(key: &str) -> Result<Self> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDirectory)?;
        Ok(Self {
            path: dir.join(STORE_DIR).join(format!("{key}.json")),
        })
    }

    /// Creates a store backed by an explicit path.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path the board is stored at.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the board from storage.
    ///
    /// Failure is silent and total: an absent file, an unreadable
    /// file, or a parse failure all start the board empty. There is no
    /// partial recovery.
    #[must_use]
    pub fn load(&self) -> Board {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Board::new(),
        };

        match serde_json::from_str(&content) {
            Ok(board) => board,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "discarding unreadable board");
                Board::new()
            }
        }
    }

    /// Serializes the entire collection and overwrites the stored
    /// value, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or
    /// the file cannot be written.
    pub fn save(&self, board: &Board) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.exists()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFile {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(board)?;

        std::fs::write(&self.path, content).map_err(|e| StoreError::WriteFile {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawdeck_protocol::Column;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> BoardStore {
        BoardStore::at_path(dir.path().join("kanban.json"))
    }

    #[test]
    fn load_missing_file_returns_empty_board() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load().is_empty());
    }

    #[test]
    fn load_corrupt_file_returns_empty_board() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn save_and_load_roundtrip_preserves_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut board = Board::new();
        board.add_task(Column::Todo, "First");
        board.add_task(Column::InProgress, "Second");
        board.add_task(Column::Done, "Third");
        let id = board.tasks[1].id;
        board.move_task(id, Column::Review);

        store.save(&board).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, board);
        assert_eq!(loaded.tasks[0].title, "Third");
    }

    #[test]
    fn save_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut board = Board::new();
        board.add_task(Column::Todo, "Task");
        store.save(&board).unwrap();

        let id = board.tasks[0].id;
        board.delete_task(id);
        store.save(&board).unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = BoardStore::at_path(dir.path().join("nested").join("kanban.json"));

        store.save(&Board::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn for_key_derives_file_name() {
        if dirs::data_dir().is_some() {
            let store = BoardStore::for_key("kanban").unwrap();
            assert!(store.path().ends_with("clawdeck/kanban.json"));
        }
    }
}
