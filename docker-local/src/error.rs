//! Error types for the docker-local library.
//!
//! Infrastructure failures (I/O, malformed JSON) are represented here and
//! propagate immediately. Problems with the *contents* of a configuration are
//! not errors: they are collected by the validator as a
//! [`ValidationReport`](crate::config::ValidationReport).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a docker-local error.
///
/// # Examples
///
/// ```
/// use docker_local::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(3306)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the docker-local library.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read or written, or a directory could not be created.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The backing configuration file does not contain valid JSON.
    #[error("invalid JSON in config file {}: {source}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration tree could not be encoded as JSON.
    #[error("failed to encode config as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },
}

impl Error {
    /// Builds an [`Error::Io`] for the given path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use docker_local::Error;
    ///
    /// let err = Error::NotFound { resource: "config file".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error came from malformed JSON.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
