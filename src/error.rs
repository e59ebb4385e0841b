use std::path::PathBuf;

/// Rejected board mutation. Agents only ever play moves drawn from
/// `legal_moves`, so in normal play these are unreachable; malformed input
/// from a driver or UI still fails hard rather than being ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("the game is already over")]
    GameOver,

    #[error("column {column} is out of range")]
    OutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
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
