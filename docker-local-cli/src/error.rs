//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use docker_local::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error.
    Io(std::io::Error),

    /// Semantic failure (absent key, invalid config) - exit code 1.
    ///
    /// An empty message means the command already reported the problem.
    SemanticFailure(String),
}

impl CliError {
    /// A semantic failure with nothing further to print.
    pub fn silent() -> Self {
        CliError::SemanticFailure(String::new())
    }

    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (absent key, invalid or missing config)
    /// - 2: Invalid arguments (reported by clap before any command runs)
    /// - 3: I/O error
    /// - 4: Config file is not valid JSON
    /// - 5: Other library error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::NotFound { .. } => 1,
                LibError::Io { .. } => 3,
                LibError::Parse { .. } => 4,
                _ => 5,
            },
            CliError::Io(_) => 3,
        }
    }

    /// Whether there is a message worth printing.
    pub fn has_message(&self) -> bool {
        !matches!(self, CliError::SemanticFailure(msg) if msg.is_empty())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::silent().exit_code(), 1);
        assert_eq!(
            CliError::Io(std::io::Error::other("disk")).exit_code(),
            3
        );
        assert_eq!(
            CliError::from(LibError::NotFound {
                resource: "config file".into()
            })
            .exit_code(),
            1
        );
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            CliError::from(LibError::Parse {
                path: PathBuf::from("config.json"),
                source: parse,
            })
            .exit_code(),
            4
        );
    }

    #[test]
    fn test_silent_has_no_message() {
        assert!(!CliError::silent().has_message());
        assert!(CliError::SemanticFailure("Key not found".into()).has_message());
    }
}
