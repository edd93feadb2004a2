//! Error types for Ticketlog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TicketlogError
pub type Result<T> = std::result::Result<T, TicketlogError>;

/// Main error type for Ticketlog operations
#[derive(Debug, Error)]
pub enum TicketlogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Commit log input errors
    #[error(transparent)]
    Input(#[from] InputError),
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

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("Failed to read configuration file")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading the resolved commit log document
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read the input
    #[error("Failed to read commit logs from {source_name}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// Input does not match the commit log schema
    #[error("Malformed commit logs in {source_name}")]
    Parse {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err: TicketlogError = ConfigError::InvalidValue {
            field: "jira.base_url".to_string(),
            message: "must be an absolute URL".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: jira.base_url - must be an absolute URL"
        );
    }

    #[test]
    fn test_input_error_names_source() {
        let error = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = InputError::Parse {
            source_name: "commits.json".to_string(),
            error,
        };
        assert!(err.to_string().contains("commits.json"));
    }

    #[test]
    fn test_source_not_repeated_in_message() {
        use std::error::Error as _;

        let error = serde_json::from_str::<Vec<u8>>("[").unwrap_err();
        let cause = error.to_string();
        let err = TicketlogError::from(InputError::Parse {
            source_name: "<stdin>".to_string(),
            error,
        });

        assert!(!err.to_string().contains(&cause));
        assert_eq!(err.source().map(|s| s.to_string()), Some(cause));
    }
}
