use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Deck file not found: {path}")]
    DeckNotFound { path: String },

    #[error("Failed to parse deck: {message} (file: {path})")]
    DeckParse { message: String, path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a deck not found error
    pub fn deck_not_found(path: impl Into<String>) -> Self {
        Self::DeckNotFound { path: path.into() }
    }

    /// Create a deck parse error with the offending file path
    pub fn deck_parse(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::DeckParse {
            message: message.into(),
            path: path.into(),
        }
    }
}
