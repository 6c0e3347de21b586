//! Logging infrastructure for docker-local.
//!
//! User-facing diagnostics go through a small stderr [`Logger`] with three
//! verbosity levels. Library internals emit `log::debug!` breadcrumbs which
//! are only visible when the embedding program installs a `log` backend.

use std::fmt;

use crate::environment::Environment;

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_VAR: &str = "DOCKER_LOCAL_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use docker_local::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of `quiet`, `normal`, `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use docker_local::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger that filters by [`LogLevel`].
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether messages at `level` are printed.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level >= level
    }

    /// Logs an error message. Suppressed only in quiet mode.
    pub fn error(&self, message: &str) {
        if self.enabled(LogLevel::Normal) {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        if self.enabled(LogLevel::Normal) {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message (verbose only).
    pub fn info(&self, message: &str) {
        if self.enabled(LogLevel::Verbose) {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message (verbose only).
    pub fn debug(&self, message: &str) {
        if self.enabled(LogLevel::Verbose) {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Chooses a log level from CLI flags and the environment.
///
/// Priority: `verbose` flag, then `quiet` flag, then
/// [`DOCKER_LOCAL_LOG_MODE`](LOG_MODE_VAR), then [`LogLevel::Normal`].
/// An unparseable environment value is ignored.
///
/// # Examples
///
/// ```
/// use docker_local::environment::{MapEnvironment, OsFamily};
/// use docker_local::{init_logger, LogLevel};
///
/// let env = MapEnvironment::new(OsFamily::Linux).with_var("DOCKER_LOCAL_LOG_MODE", "quiet");
/// assert_eq!(init_logger(&env, false, false).level(), LogLevel::Quiet);
/// assert_eq!(init_logger(&env, true, false).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(env: &dyn Environment, verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    env.var(LOG_MODE_VAR)
        .and_then(|value| LogLevel::parse(&value).ok())
        .map_or_else(Logger::default, Logger::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{MapEnvironment, OsFamily};

    fn env_with_mode(mode: Option<&str>) -> MapEnvironment {
        let env = MapEnvironment::new(OsFamily::Linux);
        match mode {
            Some(mode) => env.with_var(LOG_MODE_VAR, mode),
            None => env,
        }
    }

    #[test]
    fn test_log_level_display_round_trips_through_parse() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(LogLevel::parse(&level.to_string()).unwrap(), level);
        }
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_enabled() {
        let logger = Logger::new(LogLevel::Normal);
        assert!(logger.enabled(LogLevel::Quiet));
        assert!(logger.enabled(LogLevel::Normal));
        assert!(!logger.enabled(LogLevel::Verbose));
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_defaults_to_normal() {
        let logger = init_logger(&env_with_mode(None), false, false);
        assert_eq!(logger.level(), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_flags_override_env() {
        let env = env_with_mode(Some("quiet"));
        assert_eq!(init_logger(&env, true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(&env, true, true).level(), LogLevel::Verbose);

        let env = env_with_mode(Some("verbose"));
        assert_eq!(init_logger(&env, false, true).level(), LogLevel::Quiet);
    }

    #[test]
    fn test_init_logger_reads_env() {
        let logger = init_logger(&env_with_mode(Some("Verbose")), false, false);
        assert_eq!(logger.level(), LogLevel::Verbose);
    }

    #[test]
    fn test_init_logger_ignores_invalid_env() {
        let logger = init_logger(&env_with_mode(Some("chatty")), false, false);
        assert_eq!(logger.level(), LogLevel::Normal);
    }
}
