//! Error types for skill-triggers
//!
//! This module defines the error types used throughout the crate, following
//! a hierarchical structure with specific error variants for different
//! error categories. Per-rule problems (invalid regex, invalid priority) are
//! not errors: they are reported as warnings and never reach these types.

use std::path::PathBuf;

/// Rule file errors. All of them are fatal for the invocation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The rule file does not exist
    #[error("skill-rules file not found at {}", path.display())]
    NotFound { path: PathBuf },

    /// The rule file is not valid JSON/TOML or has the wrong shape
    #[error("Error parsing {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The rule file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors reading the hook input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Standard input could not be read
    #[error("Failed to read standard input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors persisting prompt history
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// I/O error on the history file
    #[error("History I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// History could not be serialized
    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level error type for skill-triggers
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    /// Rule file error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Hook input error
    #[error(transparent)]
    Input(#[from] InputError),

    /// History store error
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Output could not be serialized
    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    /// Output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
