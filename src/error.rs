use std::path::PathBuf;

/// Errors returned by engine commands. None of these mutate the game
/// state; an offending command is simply refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: usize, col: usize },

    #[error("square is already occupied")]
    Occupied,

    #[error("move would not capture any pieces")]
    NoCapture,

    #[error("cannot pass while legal moves are available")]
    MovesAvailable,

    #[error("the game is already over")]
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
