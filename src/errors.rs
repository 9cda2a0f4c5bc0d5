//! Error types for the pocketnotes application.
//!
//! Store and screen operations never fail: blank input and unknown ids are
//! silent no-ops. The variants below cover the surfaces around them, such as
//! configuration loading, route parsing and the interactive shell.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the pocketnotes application.
#[derive(Error, Debug)]
pub enum NoteError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Configuration file given explicitly but missing.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// A route string that does not match any screen.
    #[error("Invalid route: {route}")]
    InvalidRoute { route: String },

    /// A shell command that could not be understood.
    #[error("{message}")]
    InvalidCommand { message: String },

    #[error("{message}")]
    EditorError { message: String },
}
