//! Error types for configuration handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    LoadError {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    SaveError {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    ConfigDirError,

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("Default profile '{name}' does not exist in the config file")]
    DefaultProfileMissing { name: String },
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
