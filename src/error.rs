use std::path::PathBuf;

use crate::game::MoveError;

/// Errors that can occur while running a console session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed while waiting for {0}")]
    InputClosed(&'static str),

    #[error("move rejected by the board: {0}")]
    Move(#[from] MoveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let err = SessionError::InputClosed("the board dimensions");
        assert_eq!(
            err.to_string(),
            "input closed while waiting for the board dimensions"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.default_rows must be in 5..=9".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.default_rows must be in 5..=9"
        );
    }

    #[test]
    fn test_file_read_error_names_path() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file missing.toml: not found"
        );
    }
}
