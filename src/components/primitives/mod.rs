//! Primitive Components
//!
//! Basic building blocks: buttons and headings.

pub mod button;
pub mod heading;
