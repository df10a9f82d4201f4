//! Message State
//!
//! The single piece of text the greeter view displays.

use crate::constants::{CHILD_MESSAGE, INITIAL_MESSAGE};
use gpui::SharedString;

/// Local state of the greeter view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageState {
    message: SharedString,
}

impl MessageState {
    /// Create a state showing the initial greeting
    pub fn new() -> Self {
        Self {
            message: SharedString::from(INITIAL_MESSAGE),
        }
    }

    /// Current message text
    pub fn message(&self) -> SharedString {
        self.message.clone()
    }

    /// Switch to the child's message. Returns whether the text changed.
    pub fn change_message(&mut self) -> bool {
        self.set(CHILD_MESSAGE)
    }

    /// Restore the initial greeting. Returns whether the text changed.
    pub fn reset(&mut self) -> bool {
        self.set(INITIAL_MESSAGE)
    }

    fn set(&mut self, message: &'static str) -> bool {
        if &**self.message == message {
            return false;
        }
        self.message = SharedString::from(message);
        true
    }
}

impl Default for MessageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_initial_greeting() {
        let state = MessageState::new();
        assert_eq!(&**state.message(), "Hello");
    }

    #[test]
    fn change_message_shows_child_text() {
        let mut state = MessageState::new();

        assert!(state.change_message());
        assert_eq!(&**state.message(), "Hello from Child!");
    }

    #[test]
    fn repeated_change_keeps_child_text() {
        let mut state = MessageState::new();
        state.change_message();

        assert!(!state.change_message());
        assert_eq!(&**state.message(), "Hello from Child!");
    }

    #[test]
    fn reset_restores_initial_greeting() {
        let mut state = MessageState::new();
        assert!(!state.reset());

        state.change_message();
        assert!(state.reset());
        assert_eq!(&**state.message(), "Hello");
    }
}
