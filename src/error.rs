use std::path::PathBuf;

/// Reasons a game session refuses a move. The same player moves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,

    #[error("column does not exist")]
    OutOfRange,

    #[error("game is over")]
    GameOver,
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
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull.to_string(), "column is full");
        assert_eq!(MoveError::OutOfRange.to_string(), "column does not exist");
        assert_eq!(MoveError::GameOver.to_string(), "game is over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("display.red_marker must be one character".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: display.red_marker must be one character"
        );
    }
}
