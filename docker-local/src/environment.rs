//! Access to the process environment.
//!
//! Everything that depends on the host (environment variables, the OS family,
//! the kernel version string used for WSL detection) goes through the
//! [`Environment`] trait so that path resolution can be exercised against a
//! fully controlled [`MapEnvironment`] instead of the real process.

use std::collections::HashMap;
use std::env;
use std::fs;

/// Operating-system family of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// Linux (including WSL).
    Linux,
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
    /// Any other Unix-like system.
    Other,
}

impl OsFamily {
    /// The family of the platform this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        match env::consts::OS {
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }
}

/// Source of environment variables and host facts.
pub trait Environment: Send + Sync {
    /// Value of an environment variable, or `None` when it is unset or not
    /// valid Unicode. An empty value is returned as `Some("")`.
    fn var(&self, name: &str) -> Option<String>;

    /// Operating-system family.
    fn os_family(&self) -> OsFamily;

    /// Contents of the kernel version string (`/proc/version` on Linux), or
    /// `None` when it is missing or unreadable.
    fn kernel_version(&self) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn os_family(&self) -> OsFamily {
        OsFamily::current()
    }

    fn kernel_version(&self) -> Option<String> {
        match fs::read_to_string("/proc/version") {
            Ok(contents) => Some(contents),
            Err(e) => {
                log::debug!("/proc/version unavailable: {e}");
                None
            }
        }
    }
}

/// An in-memory environment.
///
/// # Examples
///
/// ```
/// use docker_local::environment::{Environment, MapEnvironment, OsFamily};
///
/// let env = MapEnvironment::new(OsFamily::Linux)
///     .with_var("HOME", "/home/dev")
///     .with_kernel_version("Linux version 5.15.90.1-microsoft-standard-WSL2");
///
/// assert_eq!(env.var("HOME").as_deref(), Some("/home/dev"));
/// assert_eq!(env.var("USER"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
    os: OsFamily,
    kernel_version: Option<String>,
}

impl MapEnvironment {
    /// An empty environment for the given OS family.
    #[must_use]
    pub fn new(os: OsFamily) -> Self {
        Self {
            vars: HashMap::new(),
            os,
            kernel_version: None,
        }
    }

    /// Sets a variable.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Sets the kernel version string.
    #[must_use]
    pub fn with_kernel_version(mut self, version: impl Into<String>) -> Self {
        self.kernel_version = Some(version.into());
        self
    }

    /// Sets a variable in place.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Removes a variable in place.
    pub fn remove_var(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl Environment for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn os_family(&self) -> OsFamily {
        self.os
    }

    fn kernel_version(&self) -> Option<String> {
        self.kernel_version.clone()
    }
}
