//! UI Constants
//!
//! Window layout and greeting literals shared across the application.

/// Window title
pub const APP_TITLE: &str = "Hello";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 320.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 200.0;

/// Heading text shown before the button is clicked
pub const INITIAL_MESSAGE: &str = "Hello";

/// Heading text after the button is clicked
pub const CHILD_MESSAGE: &str = "Hello from Child!";

/// Label of the button that changes the message
pub const CHANGE_MESSAGE_LABEL: &str = "Change Message";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "hello-gui.toml";

/// Log file prefix inside the data directory's `logs/` folder
pub const LOG_FILE_PREFIX: &str = "hello-gui.log";

/// Filter directive used when neither `RUST_LOG` nor settings provide one
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";
