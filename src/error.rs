//! Error types for the alias engine
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for xgit
#[derive(Error, Debug)]
pub enum XgitError {
    /// The token matched none of the registry tables
    #[error("unknown command: {token}")]
    UnknownCommand { token: String },

    /// A composite command was invoked without its mandatory argument
    #[error("missing required argument for '{token}'")]
    MissingArgument { token: String, usage: String },

    /// The git binary could not be started at all
    #[error("failed to launch {command}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The registry configuration file could not be read or parsed
    #[error("configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl XgitError {
    /// Create a new unknown-command error
    pub fn unknown_command(token: impl Into<String>) -> Self {
        Self::UnknownCommand {
            token: token.into(),
        }
    }

    /// Create a new missing-argument error
    pub fn missing_argument(token: impl Into<String>, usage: impl Into<String>) -> Self {
        Self::MissingArgument {
            token: token.into(),
            usage: usage.into(),
        }
    }

    /// Create a new launch error
    pub fn launch(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            command: command.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a new configuration error tied to a file
    pub fn config_at<P: Into<PathBuf>>(
        message: impl Into<String>,
        path: P,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, XgitError>;
