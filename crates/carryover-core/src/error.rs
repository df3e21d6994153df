//! Error types for carryover

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using CarryoverError
pub type Result<T> = std::result::Result<T, CarryoverError>;

/// Main error type for carryover operations
#[derive(Debug, Error)]
pub enum CarryoverError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Commit message related errors
    #[error(transparent)]
    Message(#[from] MessageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading commit messages or comment stores
#[derive(Debug, Error)]
pub enum MessageError {
    /// Message file not found
    #[error("Commit message file not found at {0}")]
    FileNotFound(PathBuf),

    /// Failed to read a message file
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A comment block must hold at least the inline comment
    #[error("Comment block cannot be empty")]
    EmptyCommentBlock,

    /// Stored comments could not be decoded
    #[error("Malformed comment store: {0}")]
    MalformedStore(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_error_display() {
        let err = MessageError::FileNotFound(PathBuf::from("COMMIT_EDITMSG"));
        assert_eq!(
            err.to_string(),
            "Commit message file not found at COMMIT_EDITMSG"
        );
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: CarryoverError = ConfigError::InvalidValue {
            field: "message.comment_prefix".to_string(),
            message: "cannot be empty".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: message.comment_prefix - cannot be empty"
        );
    }
}
