// Library exports for the binary and tests
pub mod book;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod report;
pub mod terminal;
pub mod ui;

pub use error::{
    BookmarkOperation, Direction, ErrorKind, ReaderError, Result, TerminalLimits,
};
pub use report::{Disposition, ErrorReport};
