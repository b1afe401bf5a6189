//! Error taxonomy shared by every part of the reader
//!
//! Each failure category is one variant of [`ReaderError`]. Variants carry
//! the structured context a handler needs to react programmatically; the
//! `Display` message is derived from that context and nothing else.

use crate::constants::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Every failure a reader component can report
///
/// Constructors take every field of their kind, so an error can't be built
/// with context missing:
///
/// ```
/// use ebook_reader::{Direction, ReaderError};
///
/// let err = ReaderError::navigation_blocked(Direction::Next, "already at last page");
/// assert_eq!(err.to_string(), "Cannot navigate next: already at last page");
/// ```
///
/// ```compile_fail
/// let _ = ebook_reader::ReaderError::ParseFailure { file_path: "a".into() };
/// ```
///
/// ```compile_fail
/// let _ = ebook_reader::ReaderError::navigation_blocked(ebook_reader::Direction::Next);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("Failed to parse document at {}: {detail}", .file_path.display())]
    ParseFailure { file_path: PathBuf, detail: String },

    #[error("File not found: {}", .file_path.display())]
    FileNotFound { file_path: PathBuf },

    #[error("{message}")]
    ConfigurationInvalid { message: String },

    #[error(
        "Terminal too small: {width}x{height}. Minimum required: {min_width}x{min_height}"
    )]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("Invalid reader state: {message}")]
    InvalidState { state: String, message: String },

    #[error("Cannot navigate {direction}: {reason}")]
    NavigationBlocked { direction: Direction, reason: String },

    #[error("Bookmark {operation} failed: {detail}")]
    BookmarkFailure {
        operation: BookmarkOperation,
        detail: String,
    },

    #[error("Rendering failed in {component}: {detail}")]
    RenderFailure { component: String, detail: String },
}

pub type Result<T> = std::result::Result<T, ReaderError>;

/// Discriminator for [`ReaderError`], usable where the payload is not needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ParseFailure,
    FileNotFound,
    ConfigurationInvalid,
    TerminalTooSmall,
    InvalidState,
    NavigationBlocked,
    BookmarkFailure,
    RenderFailure,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::ParseFailure,
        ErrorKind::FileNotFound,
        ErrorKind::ConfigurationInvalid,
        ErrorKind::TerminalTooSmall,
        ErrorKind::InvalidState,
        ErrorKind::NavigationBlocked,
        ErrorKind::BookmarkFailure,
        ErrorKind::RenderFailure,
    ];

    /// Stable machine-readable name, matching the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ParseFailure => "parse_failure",
            ErrorKind::FileNotFound => "file_not_found",
            ErrorKind::ConfigurationInvalid => "configuration_invalid",
            ErrorKind::TerminalTooSmall => "terminal_too_small",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::NavigationBlocked => "navigation_blocked",
            ErrorKind::BookmarkFailure => "bookmark_failure",
            ErrorKind::RenderFailure => "render_failure",
        }
    }

    /// Short human title, used as the error popup heading
    pub fn title(self) -> &'static str {
        match self {
            ErrorKind::ParseFailure => "Parse Error",
            ErrorKind::FileNotFound => "File Not Found",
            ErrorKind::ConfigurationInvalid => "Configuration Error",
            ErrorKind::TerminalTooSmall => "Terminal Too Small",
            ErrorKind::InvalidState => "Invalid State",
            ErrorKind::NavigationBlocked => "Navigation",
            ErrorKind::BookmarkFailure => "Bookmark Error",
            ErrorKind::RenderFailure => "Render Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Previous,
    NextChapter,
    PreviousChapter,
    Start,
    End,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Direction::Next => "next",
            Direction::Previous => "previous",
            Direction::NextChapter => "next chapter",
            Direction::PreviousChapter => "previous chapter",
            Direction::Start => "to start",
            Direction::End => "to end",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkOperation {
    Add,
    Remove,
    Load,
    Save,
}

impl fmt::Display for BookmarkOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BookmarkOperation::Add => "add",
            BookmarkOperation::Remove => "remove",
            BookmarkOperation::Load => "load",
            BookmarkOperation::Save => "save",
        };
        f.write_str(text)
    }
}

/// Minimum terminal size the reader can draw into
///
/// Supplied by the configuration layer and passed to
/// [`ReaderError::terminal_too_small`] explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalLimits {
    pub min_width: u16,
    pub min_height: u16,
}

impl TerminalLimits {
    pub fn new(min_width: u16, min_height: u16) -> Self {
        TerminalLimits {
            min_width,
            min_height,
        }
    }

    pub fn admits(&self, width: u16, height: u16) -> bool {
        width >= self.min_width && height >= self.min_height
    }
}

impl Default for TerminalLimits {
    fn default() -> Self {
        TerminalLimits::new(MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT)
    }
}

impl ReaderError {
    pub fn parse_failure(file_path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        ReaderError::ParseFailure {
            file_path: file_path.into(),
            detail: detail.into(),
        }
    }

    pub fn file_not_found(file_path: impl Into<PathBuf>) -> Self {
        ReaderError::FileNotFound {
            file_path: file_path.into(),
        }
    }

    pub fn configuration_invalid(message: impl Into<String>) -> Self {
        ReaderError::ConfigurationInvalid {
            message: message.into(),
        }
    }

    pub fn terminal_too_small(width: u16, height: u16, limits: TerminalLimits) -> Self {
        ReaderError::TerminalTooSmall {
            width,
            height,
            min_width: limits.min_width,
            min_height: limits.min_height,
        }
    }

    pub fn invalid_state(state: impl Into<String>, message: impl Into<String>) -> Self {
        ReaderError::InvalidState {
            state: state.into(),
            message: message.into(),
        }
    }

    pub fn navigation_blocked(direction: Direction, reason: impl Into<String>) -> Self {
        ReaderError::NavigationBlocked {
            direction,
            reason: reason.into(),
        }
    }

    pub fn bookmark_failure(operation: BookmarkOperation, detail: impl Into<String>) -> Self {
        ReaderError::BookmarkFailure {
            operation,
            detail: detail.into(),
        }
    }

    pub fn render_failure(component: impl Into<String>, detail: impl Into<String>) -> Self {
        ReaderError::RenderFailure {
            component: component.into(),
            detail: detail.into(),
        }
    }

    /// Classify an I/O failure on a document path
    ///
    /// A missing file becomes `FileNotFound`; any other I/O error means the
    /// document could not be read and becomes `ParseFailure`.
    pub fn from_io(file_path: impl Into<PathBuf>, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ReaderError::file_not_found(file_path),
            _ => ReaderError::parse_failure(file_path, err.to_string()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ReaderError::ParseFailure { .. } => ErrorKind::ParseFailure,
            ReaderError::FileNotFound { .. } => ErrorKind::FileNotFound,
            ReaderError::ConfigurationInvalid { .. } => ErrorKind::ConfigurationInvalid,
            ReaderError::TerminalTooSmall { .. } => ErrorKind::TerminalTooSmall,
            ReaderError::InvalidState { .. } => ErrorKind::InvalidState,
            ReaderError::NavigationBlocked { .. } => ErrorKind::NavigationBlocked,
            ReaderError::BookmarkFailure { .. } => ErrorKind::BookmarkFailure,
            ReaderError::RenderFailure { .. } => ErrorKind::RenderFailure,
        }
    }

    /// The formatted, user-facing message (same as `Display`)
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            ReaderError::ParseFailure { file_path, .. } | ReaderError::FileNotFound { file_path } => {
                Some(file_path)
            }
            _ => None,
        }
    }

    /// Caller-supplied free text: the parse/bookmark/render detail, or the
    /// message of a configuration or state error
    pub fn detail(&self) -> Option<&str> {
        match self {
            ReaderError::ParseFailure { detail, .. }
            | ReaderError::BookmarkFailure { detail, .. }
            | ReaderError::RenderFailure { detail, .. } => Some(detail),
            ReaderError::ConfigurationInvalid { message }
            | ReaderError::InvalidState { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn state(&self) -> Option<&str> {
        match self {
            ReaderError::InvalidState { state, .. } => Some(state),
            _ => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            ReaderError::NavigationBlocked { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ReaderError::NavigationBlocked { reason, .. } => Some(reason),
            _ => None,
        }
    }

    pub fn operation(&self) -> Option<BookmarkOperation> {
        match self {
            ReaderError::BookmarkFailure { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    pub fn component(&self) -> Option<&str> {
        match self {
            ReaderError::RenderFailure { component, .. } => Some(component),
            _ => None,
        }
    }

    /// Reported terminal size as `(width, height)`
    pub fn dimensions(&self) -> Option<(u16, u16)> {
        match self {
            ReaderError::TerminalTooSmall { width, height, .. } => Some((*width, *height)),
            _ => None,
        }
    }

    pub fn minimum(&self) -> Option<TerminalLimits> {
        match self {
            ReaderError::TerminalTooSmall {
                min_width,
                min_height,
                ..
            } => Some(TerminalLimits::new(*min_width, *min_height)),
            _ => None,
        }
    }
}
