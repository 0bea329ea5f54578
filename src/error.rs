use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the convpath library.
///
/// An unreachable target is not an error: solvers report it as `Ok(None)`.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The requested format is already one of the available formats.
    #[error("Format: '{format}' already exists in the given available formats")]
    AlreadyAvailable {
        /// The requested target format
        format: String,
    },

    /// Solver configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },

    /// IO error with context about the file path.
    #[error("IO error accessing '{path}': {message}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// JSON (de)serialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },

    /// A conversion graph was parsed but is not usable.
    #[error("Invalid conversion graph: {message}")]
    InvalidGraph {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Creates an "already available" error for the given target format.
    #[must_use]
    pub fn already_available(format: impl std::fmt::Display) -> Self {
        Self::AlreadyAvailable {
            format: format.to_string(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an IO error with path context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates an invalid graph error.
    #[must_use]
    pub fn invalid_graph(message: impl Into<String>) -> Self {
        Self::InvalidGraph {
            message: message.into(),
        }
    }

    /// Returns true if the target was already available.
    #[must_use]
    pub const fn is_already_available(&self) -> bool {
        matches!(self, Self::AlreadyAvailable { .. })
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns true if this is an IO error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}
