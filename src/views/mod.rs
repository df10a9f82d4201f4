//! View Components
//!
//! Stateful views for the Hello-GUI window.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌──────────────────────────────┐
//! │                              │
//! │         Heading (h2)         │
//! │          [ Button ]          │
//! │                              │
//! └──────────────────────────────┘
//! ```

mod greeter;

pub use greeter::*;
