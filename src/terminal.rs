//! Terminal size checks performed before the UI starts

use crate::error::{ReaderError, Result, TerminalLimits};

/// Fail with `TerminalTooSmall` if either dimension is under the limit
pub fn check_size(width: u16, height: u16, limits: TerminalLimits) -> Result<()> {
    if !limits.admits(width, height) {
        return Err(ReaderError::terminal_too_small(width, height, limits));
    }
    tracing::debug!("Terminal size: {}x{}", width, height);
    Ok(())
}

/// Query the attached terminal and check it against `limits`
pub fn check_current(limits: TerminalLimits) -> Result<(u16, u16)> {
    let (width, height) = crossterm::terminal::size()
        .map_err(|e| ReaderError::render_failure("terminal", e.to_string()))?;
    check_size(width, height, limits)?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_exact_minimum_fits() {
        assert!(check_size(80, 24, TerminalLimits::default()).is_ok());
    }

    #[test]
    fn test_too_narrow() {
        let err = check_size(79, 40, TerminalLimits::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TerminalTooSmall);
        assert_eq!(err.dimensions(), Some((79, 40)));
    }

    #[test]
    fn test_too_short() {
        let err = check_size(40, 10, TerminalLimits::default()).unwrap_err();
        assert_eq!(
            err.message(),
            "Terminal too small: 40x10. Minimum required: 80x24"
        );
    }

    #[test]
    fn test_custom_limits() {
        let limits = TerminalLimits::new(40, 10);
        assert!(check_size(40, 10, limits).is_ok());
    }
}
