//! Components - Reusable UI Components
//!
//! Pure UI components that don't own state or do I/O.

pub mod primitives;
