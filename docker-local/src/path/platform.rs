//! Host platform detection.

use std::fmt;

use crate::environment::{Environment, OsFamily};

/// The platform docker-local is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Native Linux (and other Unix-likes).
    Linux,
    /// macOS.
    MacOs,
    /// Native Windows.
    Windows,
    /// Linux running under the Windows Subsystem for Linux.
    Wsl,
}

impl Platform {
    /// Derive the platform from the environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use docker_local::environment::{MapEnvironment, OsFamily};
    /// use docker_local::path::Platform;
    ///
    /// let wsl = MapEnvironment::new(OsFamily::Linux)
    ///     .with_kernel_version("Linux version 5.15.90.1-microsoft-standard-WSL2");
    /// assert_eq!(Platform::detect(&wsl), Platform::Wsl);
    ///
    /// let mac = MapEnvironment::new(OsFamily::MacOs);
    /// assert_eq!(Platform::detect(&mac), Platform::MacOs);
    /// ```
    #[must_use]
    pub fn detect(env: &dyn Environment) -> Self {
        if is_wsl(env) {
            return Self::Wsl;
        }
        match env.os_family() {
            OsFamily::Windows => Self::Windows,
            OsFamily::MacOs => Self::MacOs,
            OsFamily::Linux | OsFamily::Other => Self::Linux,
        }
    }

    /// Lowercase name used in shell output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Wsl => "wsl",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the host is WSL.
///
/// The kernel version is only consulted on Linux.
#[must_use]
pub fn is_wsl(env: &dyn Environment) -> bool {
    if env.os_family() != OsFamily::Linux {
        return false;
    }

    env.kernel_version().is_some_and(|version| {
        let version = version.to_lowercase();
        version.contains("microsoft") || version.contains("wsl")
    })
}
