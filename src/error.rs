//! # Error Handling
//!
//! This module defines the centralized error type for the `rit` library. It
//! uses `thiserror` to describe every failure mode of the repository and
//! credential workflows with a readable message.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failures the library can report.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Errors are never retried inside the library. Each one aborts the current
//! workflow step and is handed back to the command layer, which decides how
//! to report it and which exit status to use.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for rit operations
#[derive(Error, Debug)]
pub enum Error {
    /// A prompt or the input channel failed (user cancel, EOF, I/O fault).
    #[error("Input error: {message}")]
    Input { message: String },

    /// The structured document on the input channel does not have the shape
    /// of a credential record.
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// The provider schema is missing or cannot be parsed.
    #[error("Provider schema unreadable at {}: {message}", path.display())]
    StoreUnreadable { path: PathBuf, message: String },

    /// A persistence collaborator (credential setter, schema save,
    /// repository registry) failed.
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// A new provider was given a name that is already defined.
    #[error("Provider '{name}' already exists")]
    ProviderExists { name: String },

    /// No input reader is registered for a field kind.
    #[error("No input reader registered for field kind '{kind}'")]
    UnsupportedFieldKind { kind: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for an [`Error::Persistence`] with the given message.
    pub fn persistence(message: impl Into<String>) -> Self {
        Error::Persistence {
            message: message.into(),
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Input {
            message: err.to_string(),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
