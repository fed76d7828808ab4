use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Dimensions, DEFAULT_COLS, DEFAULT_ROWS, SIDE_RANGE};

/// Board size offered when the player just presses Enter.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub default_rows: usize,
    pub default_cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            default_rows: DEFAULT_ROWS,
            default_cols: DEFAULT_COLS,
        }
    }
}

impl BoardConfig {
    pub fn default_dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::new(self.default_rows, self.default_cols)
            .map_err(|e| ConfigError::Validation(format!("board defaults: {e}")))
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color disks with ANSI escapes.
    pub color: bool,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SIDE_RANGE.contains(&self.board.default_rows) {
            return Err(ConfigError::Validation(
                "board.default_rows must be in 5..=9".into(),
            ));
        }
        if !SIDE_RANGE.contains(&self.board.default_cols) {
            return Err(ConfigError::Validation(
                "board.default_cols must be in 5..=9".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
