//! Key store error types

use std::io;
use thiserror::Error;

/// Result type for key store operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while building or loading a key store
///
/// Malformed lines in a key file are never errors; they are skipped.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The configured name separator is empty
    #[error("name separator must not be empty")]
    EmptyNameSeparator,

    /// Failed to open the API keys file
    #[error("failed to open API keys file '{path}': {source}")]
    Open {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed while reading the API keys file
    #[error("failed to read API keys file '{path}' at line {line}: {source}")]
    Scan {
        /// Path to the file (or the origin label of a reader)
        path: String,
        /// Line number (1-based) being read when the error occurred
        line: usize,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}

impl AuthError {
    /// Create an Open error
    pub fn open(path: impl Into<String>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a Scan error
    pub fn scan(path: impl Into<String>, line: usize, source: io::Error) -> Self {
        Self::Scan {
            path: path.into(),
            line,
            source,
        }
    }

    /// Kind of the underlying IO error, if this error came from IO
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Open { source, .. } | Self::Scan { source, .. } => Some(source.kind()),
            Self::EmptyNameSeparator => None,
        }
    }
}
