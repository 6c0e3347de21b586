//! Path resolution and well-known directory discovery.
//!
//! This module provides the [`PathResolver`] type, the single entry point the
//! rest of the crate uses to turn user-supplied path strings into concrete,
//! forward-slash paths.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::environment::{Environment, SystemEnvironment};
use crate::path::normalize::{expand_env_vars, expand_tilde, normalize_separators};
use crate::path::platform::{self, Platform};

/// Directory name used under the config root.
pub const APP_DIR_NAME: &str = "docker-local";

/// File name of the persisted configuration document.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that pins the package directory.
pub const PACKAGE_DIR_VAR: &str = "DOCKER_LOCAL_PACKAGE_DIR";

/// Default permissions for directories created by [`PathResolver::ensure_directory`].
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o755;

/// Resolves path strings against an [`Environment`].
///
/// Every path returned by this type uses `/` as separator, on all platforms.
///
/// # Examples
///
/// ```
/// use docker_local::environment::{MapEnvironment, OsFamily};
/// use docker_local::PathResolver;
///
/// let env = MapEnvironment::new(OsFamily::Linux)
///     .with_var("HOME", "/home/dev")
///     .with_var("STACK", "laravel");
/// let resolver = PathResolver::with_environment(env);
///
/// assert_eq!(resolver.resolve("~/projects/$STACK"), "/home/dev/projects/laravel");
/// assert_eq!(resolver.config_directory(), "/home/dev/.config/docker-local");
/// ```
#[derive(Clone)]
pub struct PathResolver {
    env: Arc<dyn Environment>,
    package_dir: Option<String>,
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("platform", &self.platform())
            .field("package_dir", &self.package_dir)
            .finish_non_exhaustive()
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::with_environment(SystemEnvironment)
    }
}

impl PathResolver {
    /// Create a resolver backed by the real process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver backed by the given environment.
    #[must_use]
    pub fn with_environment(env: impl Environment + 'static) -> Self {
        Self {
            env: Arc::new(env),
            package_dir: None,
        }
    }

    /// Pin the package directory instead of discovering it.
    #[must_use]
    pub fn with_package_directory(mut self, dir: impl Into<String>) -> Self {
        self.package_dir = Some(normalize_separators(&dir.into()));
        self
    }

    /// The environment this resolver reads from.
    #[must_use]
    pub fn environment(&self) -> &dyn Environment {
        self.env.as_ref()
    }

    /// The detected platform.
    #[must_use]
    pub fn platform(&self) -> Platform {
        Platform::detect(self.environment())
    }

    /// Whether the host is native Windows.
    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.platform() == Platform::Windows
    }

    /// Whether the host is macOS.
    #[must_use]
    pub fn is_macos(&self) -> bool {
        self.platform() == Platform::MacOs
    }

    /// Whether the host runs a Linux kernel, WSL included.
    #[must_use]
    pub fn is_linux(&self) -> bool {
        matches!(self.platform(), Platform::Linux | Platform::Wsl)
    }

    /// Whether the host is WSL.
    #[must_use]
    pub fn is_wsl(&self) -> bool {
        platform::is_wsl(self.environment())
    }

    /// Replace backslashes with forward slashes.
    #[must_use]
    pub fn normalize(&self, path: &str) -> String {
        normalize_separators(path)
    }

    /// Expand `~`, then `$NAME`/`${NAME}`, then normalize separators.
    ///
    /// Tilde expansion runs first so `~` is never mistaken for part of a
    /// variable reference. Unset variables are left verbatim.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        let expanded = if path == "~" || path.starts_with("~/") {
            expand_tilde(path, &self.home_directory())
        } else {
            path.to_string()
        };
        let expanded = expand_env_vars(&expanded, self.environment());
        normalize_separators(&expanded)
    }

    /// The user's home directory.
    ///
    /// Tries `HOME`, `USERPROFILE`, then `HOMEDRIVE` + `HOMEPATH`, and falls
    /// back to `C:/Users/Default` on Windows or `/tmp` elsewhere.
    #[must_use]
    pub fn home_directory(&self) -> String {
        if let Some(home) = self.non_empty_var("HOME") {
            return normalize_separators(&home);
        }

        if let Some(profile) = self.non_empty_var("USERPROFILE") {
            return normalize_separators(&profile);
        }

        if let (Some(drive), Some(path)) = (self.env.var("HOMEDRIVE"), self.env.var("HOMEPATH")) {
            return normalize_separators(&format!("{drive}{path}"));
        }

        log::debug!("no home directory variables set, using fallback");
        if self.is_windows() {
            "C:/Users/Default".to_string()
        } else {
            "/tmp".to_string()
        }
    }

    /// The docker-local configuration directory.
    ///
    /// `XDG_CONFIG_HOME` wins on every platform, then `APPDATA` on Windows,
    /// then `~/.config/docker-local`.
    #[must_use]
    pub fn config_directory(&self) -> String {
        if let Some(xdg) = self.non_empty_var("XDG_CONFIG_HOME") {
            return normalize_separators(&format!("{xdg}/{APP_DIR_NAME}"));
        }

        if self.is_windows() {
            if let Some(app_data) = self.non_empty_var("APPDATA") {
                return normalize_separators(&format!("{app_data}/{APP_DIR_NAME}"));
            }
        }

        normalize_separators(&format!("{}/.config/{APP_DIR_NAME}", self.home_directory()))
    }

    /// Path of the persisted configuration file.
    #[must_use]
    pub fn config_file(&self) -> String {
        format!("{}/{CONFIG_FILE_NAME}", self.config_directory())
    }

    /// Root of the installed package (bundled resources and stubs live here).
    ///
    /// Uses the pinned directory, then `DOCKER_LOCAL_PACKAGE_DIR`, then the
    /// parent of the directory holding the running executable, then `.`.
    #[must_use]
    pub fn package_directory(&self) -> String {
        if let Some(dir) = &self.package_dir {
            return dir.clone();
        }

        if let Some(dir) = self.non_empty_var(PACKAGE_DIR_VAR) {
            return normalize_separators(&dir);
        }

        let from_exe = env::current_exe().ok().and_then(|exe| {
            exe.parent()
                .and_then(Path::parent)
                .map(|dir| dir.to_string_lossy().into_owned())
        });
        match from_exe {
            Some(dir) => normalize_separators(&dir),
            None => {
                log::debug!("cannot locate executable, using current directory as package root");
                ".".to_string()
            }
        }
    }

    /// `<package>/resources`.
    #[must_use]
    pub fn resources_directory(&self) -> String {
        format!("{}/resources", self.package_directory())
    }

    /// `<package>/resources/docker`, the bundled docker assets.
    #[must_use]
    pub fn default_docker_directory(&self) -> String {
        format!("{}/docker", self.resources_directory())
    }

    /// `<package>/stubs`.
    #[must_use]
    pub fn stubs_directory(&self) -> String {
        format!("{}/stubs", self.package_directory())
    }

    /// `<home>/projects`.
    #[must_use]
    pub fn default_projects_directory(&self) -> String {
        format!("{}/projects", self.home_directory())
    }

    /// Whether the resolved path exists.
    #[must_use]
    pub fn path_exists(&self, path: &str) -> bool {
        Path::new(&self.resolve(path)).exists()
    }

    /// Whether the resolved path is a directory.
    #[must_use]
    pub fn is_directory(&self, path: &str) -> bool {
        Path::new(&self.resolve(path)).is_dir()
    }

    /// Make sure the resolved directory exists, creating missing ancestors.
    ///
    /// Returns `true` when the directory already existed or was created, and
    /// `false` when creation failed. `permissions` is applied to newly created
    /// directories on Unix and ignored elsewhere.
    pub fn ensure_directory(&self, path: &str, permissions: u32) -> bool {
        let resolved = self.resolve(path);
        let dir = Path::new(&resolved);
        if dir.is_dir() {
            return true;
        }

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(permissions);
        }
        #[cfg(not(unix))]
        let _ = permissions;

        match builder.create(dir) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("failed to create directory {resolved}: {e}");
                false
            }
        }
    }

    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.env.var(name).filter(|value| !value.is_empty())
    }
}
