//! Command-line interface parsing and validation
//!
//! This module handles CLI argument parsing using clap and validates
//! user inputs for correctness.

use crate::config::{UiConfig, check_floor};
use crate::constants::{HARD_FLOOR_HEIGHT, HARD_FLOOR_WIDTH};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ebook-reader")]
#[command(version)]
#[command(about = "Check that a book can be opened in this terminal", long_about = None)]
pub struct Cli {
    /// Path to EPUB file to check
    pub file: Option<PathBuf>,

    /// Override the minimum terminal width
    #[arg(long, value_name = "COLS")]
    pub min_width: Option<u16>,

    /// Override the minimum terminal height
    #[arg(long, value_name = "ROWS")]
    pub min_height: Option<u16>,

    /// Enable logging to specified file
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read settings from this directory instead of the user config dir
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Print errors as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Validate CLI arguments
    /// Returns error if a size override is below the hard floor
    pub fn validate(&self) -> Result<()> {
        if let Some(width) = self.min_width {
            check_floor("min_width", width, HARD_FLOOR_WIDTH)?;
        }
        if let Some(height) = self.min_height {
            check_floor("min_height", height, HARD_FLOOR_HEIGHT)?;
        }
        Ok(())
    }

    /// Apply size overrides on top of the loaded config (not persisted)
    pub fn apply_overrides(&self, config: UiConfig) -> UiConfig {
        UiConfig {
            min_width: self.min_width.unwrap_or(config.min_width),
            min_height: self.min_height.unwrap_or(config.min_height),
        }
    }
}
