//! The JSON-backed configuration store.
//!
//! A [`ConfigStore`] owns one configuration document. The backing file is
//! read lazily on first access and written back wholesale by
//! [`ConfigStore::save`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::default_config;
use crate::config::value::{ConfigTree, ConfigValue};
use crate::error::{Error, Result};
use crate::path::normalize::looks_like_path;
use crate::path::PathResolver;

/// Lazily loaded, dot-addressed configuration storage.
///
/// Reads, writes and saves load the backing file first if that has not
/// happened yet, so calling [`load`](Self::load) explicitly is optional.
///
/// # Examples
///
/// ```no_run
/// use docker_local::{ConfigStore, PathResolver};
///
/// let mut store = ConfigStore::new(PathResolver::new());
/// let port = store.get_i64("mysql.port")?.unwrap_or(3306);
/// store.set("mysql.port", port + 1)?;
/// store.save()?;
/// # Ok::<(), docker_local::Error>(())
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    resolver: PathResolver,
    path: PathBuf,
    tree: ConfigTree,
    loaded: bool,
}

impl ConfigStore {
    /// A store backed by `<config dir>/config.json`.
    #[must_use]
    pub fn new(resolver: PathResolver) -> Self {
        let path = resolver.config_file();
        Self::with_path(resolver, path)
    }

    /// A store backed by an explicit file.
    #[must_use]
    pub fn with_path(resolver: PathResolver, path: impl Into<PathBuf>) -> Self {
        Self {
            resolver,
            path: path.into(),
            tree: ConfigTree::new(),
            loaded: false,
        }
    }

    /// The backing file.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// The resolver used for path-valued entries.
    #[must_use]
    pub fn path_resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Whether the document has been loaded (or defaults initialized).
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load the backing file if it has not been loaded yet.
    ///
    /// A missing file loads as an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read, and
    /// [`Error::Parse`] if it does not contain a JSON object.
    pub fn load(&mut self) -> Result<&ConfigTree> {
        if !self.loaded {
            self.tree = self.read_backing_file()?;
            self.loaded = true;
        }
        Ok(&self.tree)
    }

    fn read_backing_file(&self) -> Result<ConfigTree> {
        if !self.path.exists() {
            log::debug!("no config file at {}, starting empty", self.path.display());
            return Ok(ConfigTree::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let tree = serde_json::from_str(&contents).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("loaded config from {}", self.path.display());
        Ok(tree)
    }

    /// The whole configuration tree.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn all(&mut self) -> Result<&ConfigTree> {
        self.load()
    }

    /// Read a value by dot path.
    ///
    /// Strings containing `~` or `$` come back resolved through the
    /// [`PathResolver`]. Missing keys and paths that run through a
    /// non-mapping value yield `None`.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn get(&mut self, key: &str) -> Result<Option<ConfigValue>> {
        self.load()?;
        let value = match self.tree.lookup(key) {
            Some(ConfigValue::String(s)) if looks_like_path(s) => {
                ConfigValue::String(self.resolver.resolve(s))
            }
            Some(value) => value.clone(),
            None => return Ok(None),
        };
        Ok(Some(value))
    }

    /// Read a value by dot path, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn get_or(&mut self, key: &str, default: impl Into<ConfigValue>) -> Result<ConfigValue> {
        Ok(self.get(key)?.unwrap_or_else(|| default.into()))
    }

    /// Read a string value (resolved if path-like).
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn get_str(&mut self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key)?.and_then(|value| match value {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }))
    }

    /// Read an integer value.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn get_i64(&mut self, key: &str) -> Result<Option<i64>> {
        Ok(self.get(key)?.as_ref().and_then(ConfigValue::as_i64))
    }

    /// Read a boolean value.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn get_bool(&mut self, key: &str) -> Result<Option<bool>> {
        Ok(self.get(key)?.as_ref().and_then(ConfigValue::as_bool))
    }

    /// Write a value at a dot path, creating intermediate mappings.
    ///
    /// Values are not type-checked; that is the validator's job.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) -> Result<()> {
        self.load()?;
        self.tree.set_path(key, value);
        Ok(())
    }

    /// Whether a dot path exists (a `null` value counts as present).
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn has(&mut self, key: &str) -> Result<bool> {
        Ok(self.load()?.contains_path(key))
    }

    /// Write the whole tree to the backing file.
    ///
    /// The parent directory is created when missing. The document is written
    /// to a temporary sibling and renamed into place, so readers never see a
    /// partially written file. When the config file is a symlink the link is
    /// kept and its target is replaced instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] naming the directory or file that could not be
    /// created or written.
    pub fn save(&mut self) -> Result<()> {
        self.load()?;

        let target = self.write_target();
        if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.is_dir() {
                fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
            }
        }

        let json = self.to_json()?;
        let staging = staging_path(&target);
        let written = fs::write(&staging, json)
            .map_err(|e| Error::io(&staging, e))
            .and_then(|()| fs::rename(&staging, &target).map_err(|e| Error::io(&target, e)));
        if written.is_err() {
            let _ = fs::remove_file(&staging);
        }
        written?;

        log::debug!("saved config to {}", target.display());
        Ok(())
    }

    /// The file `save` replaces: the config path itself, or the file a
    /// symlinked config path points at.
    fn write_target(&self) -> PathBuf {
        let is_link = fs::symlink_metadata(&self.path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        if !is_link {
            return self.path.clone();
        }
        match fs::canonicalize(&self.path) {
            Ok(target) => target,
            // dangling link: write where it points
            Err(_) => match fs::read_link(&self.path) {
                Ok(link) => match self.path.parent() {
                    Some(dir) => dir.join(link),
                    None => link,
                },
                Err(e) => {
                    log::debug!("cannot read link {}: {e}", self.path.display());
                    self.path.clone()
                }
            },
        }
    }

    /// The in-memory tree as pretty-printed JSON (four-space indent).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.tree.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Whether the backing file exists. Does not load.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replace the in-memory tree with the default document.
    ///
    /// The store counts as loaded afterwards; nothing is written until
    /// [`save`](Self::save) is called.
    pub fn initialize_defaults(&mut self) {
        self.tree = default_config();
        self.loaded = true;
    }

    /// The configured projects directory, or `<home>/projects`.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn projects_path(&mut self) -> Result<String> {
        let fallback = self.resolver.default_projects_directory();
        self.directory_setting("projects_path", fallback)
    }

    /// The configured docker files directory, or the config directory.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn docker_files_path(&mut self) -> Result<String> {
        let fallback = self.resolver.config_directory();
        self.directory_setting("docker_files_path", fallback)
    }

    fn directory_setting(&mut self, key: &str, fallback: String) -> Result<String> {
        Ok(match self.get(key)? {
            None | Some(ConfigValue::Null) => fallback,
            Some(value) => value.to_string(),
        })
    }

    /// Locate a docker asset, preferring the user's copy.
    ///
    /// Returns `<docker files dir>/<relative>` when that file exists, and
    /// `<package>/resources/docker/<relative>` otherwise. The fallback is not
    /// checked for existence.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn resolve_docker_file(&mut self, relative: &str) -> Result<String> {
        let user = self.user_override_path(relative)?;
        if Path::new(&user).exists() {
            return Ok(user);
        }
        log::debug!("no user override for {relative}, using package default");
        Ok(format!(
            "{}/{relative}",
            self.resolver.default_docker_directory()
        ))
    }

    /// Whether the user has their own copy of a docker asset.
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn has_user_override(&mut self, relative: &str) -> Result<bool> {
        let user = self.user_override_path(relative)?;
        Ok(Path::new(&user).exists())
    }

    fn user_override_path(&mut self, relative: &str) -> Result<String> {
        Ok(format!("{}/{relative}", self.docker_files_path()?))
    }
}

fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map_or_else(|| "config.json".into(), |n| n.to_string_lossy().into_owned());
    target.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
