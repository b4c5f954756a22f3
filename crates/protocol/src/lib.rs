//! Shared types and contracts for clawdeck.
//!
//! This crate defines the data model shared by the dashboard cards:
//! the task record and its closed column/priority sets, the board
//! collection with its effect-returning operations, and the message
//! vocabulary consumed by the TUI.
//!
//! # Overview
//!
//! - [`task`]: the `Task` record, `Column` and `Priority` enums
//! - [`board`]: the `Board` collection and its add/move/delete operations
//! - [`message`]: user-action messages produced by the input handler
//! - [`sample`]: canned board data for demos and widget tests

pub mod board;
pub mod message;
pub mod sample;
pub mod task;

pub use board::{Board, Effect};
pub use message::Message;
pub use sample::sample_board;
pub use task::{Column, Priority, Task, TaskId};
