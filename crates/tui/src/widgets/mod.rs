//! Widget rendering functions for the dashboard cards.
//!
//! Rendering is a pure function of state: every widget takes its view
//! data and a buffer and draws into it, with no side effects.

pub mod board;
pub mod column;
pub mod prompt;
pub mod status_bar;
pub mod task_card;

pub use board::{BoardView, render_board};
pub use column::{ColumnPosition, ColumnView, render_column};
pub use prompt::{PROMPT_CARD_HEIGHT, render_prompt_card};
pub use status_bar::render_status_bar;
pub use task_card::{priority_color, render_task_card};
