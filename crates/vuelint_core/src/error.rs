//! Lint engine error types.

use thiserror::Error;

/// Errors that can occur during a lint run.
#[derive(Debug, Error)]
pub enum LintError {
    /// Lint configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Project configuration error.
    #[error("Project error: {0}")]
    Project(String),

    /// File I/O error with context.
    #[error("File error: {0}")]
    File(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LintError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a project error.
    pub fn project(message: impl Into<String>) -> Self {
        Self::Project(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}
