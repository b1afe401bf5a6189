//! Handling policy for reader errors
//!
//! Collaborators return [`ReaderError`] unchanged up the call chain. Whoever
//! finally handles one calls [`report`], which logs it once and says what
//! the caller should do next. Nothing here is silently ignorable.

use crate::error::{ErrorKind, ReaderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a handler should do after reporting an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Show the message and keep going
    Notify,
    /// Abandon the current operation and go back to a known-good screen
    ReturnToSafeState,
    /// Leave the application
    Terminate,
}

impl ReaderError {
    pub fn disposition(&self) -> Disposition {
        match self {
            ReaderError::NavigationBlocked { .. } | ReaderError::BookmarkFailure { .. } => {
                Disposition::Notify
            }
            ReaderError::ParseFailure { .. }
            | ReaderError::FileNotFound { .. }
            | ReaderError::InvalidState { .. }
            | ReaderError::RenderFailure { .. } => Disposition::ReturnToSafeState,
            ReaderError::ConfigurationInvalid { .. } | ReaderError::TerminalTooSmall { .. } => {
                Disposition::Terminate
            }
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.disposition() != Disposition::Terminate
    }
}

/// Serializable snapshot of a handled error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
    pub disposition: Disposition,
    pub fields: BTreeMap<String, String>,
}

impl ErrorReport {
    pub fn to_json(&self) -> String {
        // A struct of strings and unit enums cannot fail to serialize
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl From<&ReaderError> for ErrorReport {
    fn from(err: &ReaderError) -> Self {
        let mut fields = BTreeMap::new();

        if let Some(path) = err.file_path() {
            fields.insert("file_path".to_string(), path.display().to_string());
        }
        if let Some(detail) = err.detail() {
            let key = match err {
                ReaderError::ConfigurationInvalid { .. } | ReaderError::InvalidState { .. } => {
                    "message"
                }
                _ => "detail",
            };
            fields.insert(key.to_string(), detail.to_string());
        }
        if let Some(state) = err.state() {
            fields.insert("state".to_string(), state.to_string());
        }
        if let Some(direction) = err.direction() {
            fields.insert("direction".to_string(), direction.to_string());
        }
        if let Some(reason) = err.reason() {
            fields.insert("reason".to_string(), reason.to_string());
        }
        if let Some(operation) = err.operation() {
            fields.insert("operation".to_string(), operation.to_string());
        }
        if let Some(component) = err.component() {
            fields.insert("component".to_string(), component.to_string());
        }
        if let Some((width, height)) = err.dimensions() {
            fields.insert("width".to_string(), width.to_string());
            fields.insert("height".to_string(), height.to_string());
        }
        if let Some(limits) = err.minimum() {
            fields.insert("min_width".to_string(), limits.min_width.to_string());
            fields.insert("min_height".to_string(), limits.min_height.to_string());
        }

        ErrorReport {
            kind: err.kind(),
            message: err.message(),
            disposition: err.disposition(),
            fields,
        }
    }
}

/// Log a handled error and return what the caller should do with it
pub fn report(err: &ReaderError) -> Disposition {
    let disposition = err.disposition();
    match disposition {
        Disposition::Notify => {
            tracing::warn!(kind = %err.kind(), ?disposition, "{}", err);
        }
        Disposition::ReturnToSafeState | Disposition::Terminate => {
            tracing::error!(kind = %err.kind(), ?disposition, "{}", err);
        }
    }
    disposition
}

/// Treat a blocked move as a no-op, passing every other error through
///
/// Returns `Ok(None)` when the move was blocked; the block is still
/// reported so it never disappears unlogged.
pub fn recover_navigation<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err @ ReaderError::NavigationBlocked { .. }) => {
            report(&err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Process exit status for an error that reached the top level
pub fn exit_code(disposition: Disposition) -> i32 {
    match disposition {
        Disposition::Terminate => 1,
        Disposition::Notify | Disposition::ReturnToSafeState => 2,
    }
}
