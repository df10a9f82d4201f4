//! Application Layer
//!
//! Contains app initialization, key bindings and window management.

pub mod application;
