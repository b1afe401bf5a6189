//! Application-wide constants

/// Minimum terminal width required to run the application
pub const MIN_TERMINAL_WIDTH: u16 = 80;

/// Minimum terminal height required to run the application
pub const MIN_TERMINAL_HEIGHT: u16 = 24;

/// Smallest minimum width a configuration may set
pub const HARD_FLOOR_WIDTH: u16 = 20;

/// Smallest minimum height a configuration may set
pub const HARD_FLOOR_HEIGHT: u16 = 5;

/// Name used for the config directory
pub const APP_NAME: &str = "ebook-reader";

/// File holding the UI limits inside the config directory
pub const UI_CONFIG_FILE: &str = "ui.json";

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "ebook_reader=debug";

/// Error popup height in rows (border, message, spacer, button)
pub const ERROR_POPUP_HEIGHT: u16 = 7;

/// Narrowest the error popup gets before clamping to the frame
pub const ERROR_POPUP_MIN_WIDTH: u16 = 30;
