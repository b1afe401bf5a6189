use crate::error::{ReaderError, Result};
use std::fs::File;
use std::path::Path;

/// Check that `path` names a book file the reader can open
///
/// Only existence and readability are checked here; the contents are the
/// parser's concern.
pub fn check_book_file(path: &Path) -> Result<()> {
    let metadata = path
        .metadata()
        .map_err(|e| ReaderError::from_io(path, e))?;

    if metadata.is_dir() {
        return Err(ReaderError::parse_failure(path, "path is a directory"));
    }

    File::open(path).map_err(|e| ReaderError::from_io(path, e))?;
    tracing::debug!(
        "Book file {} is readable ({} bytes)",
        path.display(),
        metadata.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_missing_book() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.epub");

        let err = check_book_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.file_path(), Some(path.as_path()));
    }

    #[test]
    fn test_directory_is_not_a_book() {
        let dir = TempDir::new().unwrap();

        let err = check_book_file(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert_eq!(err.detail(), Some("path is a directory"));
    }

    #[test]
    fn test_readable_book() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.epub");
        std::fs::write(&path, b"PK").unwrap();

        assert!(check_book_file(&path).is_ok());
    }
}
