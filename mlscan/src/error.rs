//! Error handling module for the mlscan CLI.
//!
//! Structured error types built with `thiserror`. Scan failures arrive here
//! already rendered as source diagnostics.

use thiserror::Error;

/// Main error type for the mlscan CLI application.
#[derive(Error, Debug)]
pub enum MlscanError {
    /// Configuration file could not be found, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A loaded source file could not be looked up.
    #[error("Source map error: {0}")]
    SourceMap(#[from] minilua_util::SourceMapError),

    /// A source file failed to scan. `rendered` is the full diagnostic with
    /// source excerpt.
    #[error("{rendered}")]
    Scan {
        /// Display name of the input.
        name: String,
        /// Diagnostic text, ready to print.
        rendered: String,
    },

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias using MlscanError.
pub type Result<T> = std::result::Result<T, MlscanError>;
