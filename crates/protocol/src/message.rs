//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update card state. `Submit` is contextual: it
/// sends the prompt, commits a draft, or drops a grabbed task,
/// depending on what currently has focus.
///
/// # Examples
///
/// ```
/// use clawdeck_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Switch focus between the prompt card and the board card.
    FocusNext,
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// A character typed into the focused text control.
    Input(char),
    /// Delete the character before the cursor in the focused text control.
    Backspace,
    /// Confirm the current interaction (send, commit draft, or drop).
    Submit,
    /// Cancel the current interaction (clear draft or release a grab).
    Cancel,
    /// Begin a task draft in the selected column.
    NewTask,
    /// Grab the selected task, attaching its id as the drag payload.
    Grab,
    /// Delete the selected task.
    Delete,
    /// Trigger the refresh-status remote action.
    Refresh,
    /// Trigger the health-check remote action.
    HealthCheck,
    /// Send the nth configured quick action (0-based).
    QuickAction(usize),
    /// Open the configured board link in the system browser.
    OpenBoard,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Submit.is_navigation());
    /// ```
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}
