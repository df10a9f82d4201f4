//! Hello GUI Library
//!
//! A native window with a heading and a button. Clicking the button changes
//! the heading from "Hello" to "Hello from Child!".

pub mod app;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;
pub mod views;
