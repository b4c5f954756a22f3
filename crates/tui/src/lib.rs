//! Terminal dashboard for the OpenClaw gateway.
//!
//! Two cards share the screen: a prompt card that sends free-text
//! messages to the gateway and a Kanban board card persisted through
//! the local store. The application follows the Elm shape: key events
//! become [`Message`](clawdeck_protocol::Message)s, `App::update` folds
//! them into state, and rendering is a pure function of that state.

pub mod app;
pub mod event;
pub mod remote;
pub mod state;
pub mod terminal;
pub mod widgets;

pub use app::App;
pub use event::InputMode;
pub use remote::CardEvent;
pub use state::{AppState, Focus, PromptState};
