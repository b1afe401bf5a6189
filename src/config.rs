use crate::constants::{
    APP_NAME, HARD_FLOOR_HEIGHT, HARD_FLOOR_WIDTH, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH,
    UI_CONFIG_FILE,
};
use crate::error::{ReaderError, Result, TerminalLimits};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User-adjustable UI settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub min_width: u16,
    pub min_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            min_width: MIN_TERMINAL_WIDTH,
            min_height: MIN_TERMINAL_HEIGHT,
        }
    }
}

impl UiConfig {
    /// Reject minimums the reader could never lay out a page in
    pub fn validate(&self) -> Result<()> {
        check_floor("min_width", self.min_width, HARD_FLOOR_WIDTH)?;
        check_floor("min_height", self.min_height, HARD_FLOOR_HEIGHT)?;
        Ok(())
    }

    pub fn limits(&self) -> TerminalLimits {
        TerminalLimits::new(self.min_width, self.min_height)
    }
}

impl From<UiConfig> for TerminalLimits {
    fn from(config: UiConfig) -> Self {
        config.limits()
    }
}

pub(crate) fn check_floor(field: &str, value: u16, floor: u16) -> Result<()> {
    if value < floor {
        return Err(ReaderError::configuration_invalid(format!(
            "Invalid {}: {} (must be at least {})",
            field, value, floor
        )));
    }
    Ok(())
}

pub struct ConfigStore {
    config_dir: PathBuf,
}

impl ConfigStore {
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
            ReaderError::configuration_invalid("Failed to determine config directory")
        })?;

        Self::at(project_dirs.config_dir())
    }

    /// Use an explicit config directory, creating it if it doesn't exist
    pub fn at(dir: impl AsRef<Path>) -> Result<Self> {
        let config_dir = dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|e| {
                ReaderError::configuration_invalid(format!(
                    "Failed to create config directory {}: {}",
                    config_dir.display(),
                    e
                ))
            })?;
        }

        Ok(ConfigStore { config_dir })
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(UI_CONFIG_FILE)
    }

    pub fn load(&self) -> Result<UiConfig> {
        let config_path = self.config_path();

        if !config_path.exists() {
            tracing::debug!(
                "No config at {}, writing defaults",
                config_path.display()
            );
            let config = UiConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            ReaderError::configuration_invalid(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: UiConfig = serde_json::from_str(&content).map_err(|e| {
            ReaderError::configuration_invalid(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;
        tracing::debug!(
            "Config loaded: min_width={}, min_height={}",
            config.min_width,
            config.min_height
        );

        Ok(config)
    }

    pub fn save(&self, config: &UiConfig) -> Result<()> {
        let config_path = self.config_path();
        let content = serde_json::to_string_pretty(config).map_err(|e| {
            ReaderError::configuration_invalid(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&config_path, content).map_err(|e| {
            ReaderError::configuration_invalid(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
