//! The top-level entry point tying the store, resolver and validator together.

use crate::config::{ConfigStore, ConfigValidator, ConfigValue, ValidationReport};
use crate::error::{Error, Result};
use crate::path::resolver::DEFAULT_DIR_PERMISSIONS;
use crate::path::PathResolver;

/// Facade over a [`ConfigStore`] and a [`ConfigValidator`] sharing one
/// [`PathResolver`].
///
/// # Examples
///
/// ```no_run
/// use docker_local::DockerLocal;
///
/// let mut app = DockerLocal::new();
/// if !app.is_initialized() {
///     app.bootstrap_defaults(true)?;
/// }
/// for (name, value) in app.paths()? {
///     println!("{name}={value}");
/// }
/// # Ok::<(), docker_local::Error>(())
/// ```
#[derive(Debug)]
pub struct DockerLocal {
    store: ConfigStore,
    validator: ConfigValidator,
}

impl Default for DockerLocal {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerLocal {
    /// A facade over the real environment and the default config file.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(PathResolver::new())
    }

    /// A facade using `resolver` for everything.
    #[must_use]
    pub fn with_resolver(resolver: PathResolver) -> Self {
        let validator = ConfigValidator::new(resolver.clone());
        Self::with_parts(ConfigStore::new(resolver), validator)
    }

    /// A facade over pre-built parts.
    #[must_use]
    pub fn with_parts(store: ConfigStore, validator: ConfigValidator) -> Self {
        Self { store, validator }
    }

    /// The configuration store.
    #[must_use]
    pub fn config(&self) -> &ConfigStore {
        &self.store
    }

    /// The configuration store, mutably.
    pub fn config_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    /// The path resolver.
    #[must_use]
    pub fn path_resolver(&self) -> &PathResolver {
        self.store.path_resolver()
    }

    /// The validator holding the last validation results.
    #[must_use]
    pub fn validator(&self) -> &ConfigValidator {
        &self.validator
    }

    /// Whether the configuration file exists.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.store.exists()
    }

    /// The library version.
    #[must_use]
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// The directories shell scripts need, as `(name, path)` pairs.
    ///
    /// # Errors
    ///
    /// Propagates configuration load failures.
    pub fn paths(&mut self) -> Result<Vec<(&'static str, String)>> {
        let resolver = self.store.path_resolver().clone();
        Ok(vec![
            ("PACKAGE_DIR", resolver.package_directory()),
            ("CONFIG_DIR", resolver.config_directory()),
            ("PROJECTS_DIR", self.store.projects_path()?),
            ("DOCKER_FILES_DIR", self.store.docker_files_path()?),
            ("RESOURCES_DIR", resolver.resources_directory()),
            ("DEFAULT_DOCKER_DIR", resolver.default_docker_directory()),
        ])
    }

    /// The resolver's own view of the standard directories. Does not load
    /// the configuration.
    #[must_use]
    pub fn resolver_paths(&self) -> Vec<(&'static str, String)> {
        let resolver = self.store.path_resolver();
        vec![
            ("HOME", resolver.home_directory()),
            ("CONFIG_DIR", resolver.config_directory()),
            ("PACKAGE_DIR", resolver.package_directory()),
            ("RESOURCES_DIR", resolver.resources_directory()),
            ("DOCKER_DIR", resolver.default_docker_directory()),
            ("STUBS_DIR", resolver.stubs_directory()),
        ]
    }

    /// A configuration value rendered as text; `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Propagates configuration load failures.
    pub fn lookup(&mut self, key: &str) -> Result<Option<String>> {
        Ok(match self.store.get(key)? {
            None | Some(ConfigValue::Null) => None,
            Some(value) => Some(value.to_string()),
        })
    }

    /// Validate the configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the file does not exist, and
    /// propagates load failures.
    pub fn validate(&mut self) -> Result<ValidationReport> {
        if !self.store.exists() {
            return Err(Error::NotFound {
                resource: format!("config file {}", self.store.config_path().display()),
            });
        }
        let tree = self.store.load()?;
        self.validator.validate(tree);
        Ok(self.validator.report())
    }

    /// Reset the configuration to the defaults, saving them when `write` is
    /// true. The config file's directory is created with mode `0755`.
    ///
    /// # Errors
    ///
    /// Propagates save failures.
    pub fn bootstrap_defaults(&mut self, write: bool) -> Result<()> {
        self.store.initialize_defaults();
        if !write {
            return Ok(());
        }
        if let Some(dir) = self.store.config_path().parent() {
            let dir = dir.to_string_lossy().into_owned();
            if !dir.is_empty()
                && !self
                    .store
                    .path_resolver()
                    .ensure_directory(&dir, DEFAULT_DIR_PERMISSIONS)
            {
                log::debug!("could not create {dir}, leaving it to save");
            }
        }
        self.store.save()
    }
}
