//! State Management Layer
//!
//! Persisted window settings live in a GPUI entity behind a global store.
//! The greeter's message is local view state:
//!
//! ```text
//! Click → listener → MessageState::change_message → cx.notify → re-render
//! ```

mod app;
mod message;

pub use app::*;
pub use message::*;
