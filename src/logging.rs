//! File logging setup
//!
//! Logging is off unless a log file is requested. Events go through a
//! non-blocking writer, so the returned guard must be held until exit to
//! flush what is still buffered.

use crate::constants::DEFAULT_LOG_FILTER;
use crate::error::{ReaderError, Result};
use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Local wall-clock timestamps, e.g. `2025-01-31 14:05:09`
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

pub fn init_logging(log_file: &Path) -> Result<WorkerGuard> {
    // Open/create log file, truncating if it exists
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file)
        .map_err(|e| {
            ReaderError::configuration_invalid(format!(
                "Failed to open log file {}: {}",
                log_file.display(),
                e
            ))
        })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(LocalTimestamp)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| {
            ReaderError::configuration_invalid(format!("Failed to initialize logging: {}", e))
        })?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_unwritable_log_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("reader.log");

        let err = init_logging(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationInvalid);
        assert!(err.message().starts_with("Failed to open log file"));
    }
}
