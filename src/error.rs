//! Error types for motto

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for motto application
#[derive(Debug, Error)]
pub enum MottoError {
    #[error("Not a motto directory: {0}")]
    NotMottoDirectory(PathBuf),

    #[error("Invalid quote: {0}")]
    Validation(String),

    #[error("Invalid import payload: {0}")]
    ImportFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MottoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MottoError::NotMottoDirectory(_) => 2,
            MottoError::Validation(_) => 3,
            MottoError::ImportFormat(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MottoError::NotMottoDirectory(path) => {
                format!(
                    "Not a motto directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'motto init' in this directory to create a new quote store\n\
                    • Navigate to an existing motto directory\n\
                    • Set MOTTO_HOME environment variable to your quote store path",
                    path.display()
                )
            }
            MottoError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    Both the quote text and its category are required.\n\
                    Example: motto add \"Stay hungry, stay foolish.\" Motivation",
                    msg
                )
            }
            MottoError::ImportFormat(msg) => {
                format!(
                    "Invalid import payload: {}\n\n\
                    Expected a JSON array of quote objects, for example:\n\
                    [\n\
                      {{\"text\": \"Stay hungry, stay foolish.\", \"category\": \"Motivation\"}}\n\
                    ]\n\n\
                    The existing collection was left unchanged.",
                    msg
                )
            }
            MottoError::Config(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

/// Result type using MottoError
pub type Result<T> = std::result::Result<T, MottoError>;
