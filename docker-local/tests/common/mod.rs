//! Common test utilities for integration tests.
//!
//! This module provides a sandboxed environment for exercising the
//! docker-local library against a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use docker_local::environment::{MapEnvironment, OsFamily};
use docker_local::PathResolver;
use tempfile::TempDir;

/// A temporary directory laid out like a user's machine:
/// `home/`, `xdg/` (config root) and `pkg/` (package root).
pub struct Sandbox {
    temp: TempDir,
}

#[allow(dead_code)]
impl Sandbox {
    /// Creates an empty sandbox with `home/` and `pkg/resources/docker/`.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir_all(temp.path().join("home")).unwrap();
        fs::create_dir_all(temp.path().join("pkg/resources/docker")).unwrap();
        Self { temp }
    }

    /// The sandbox root with forward slashes.
    pub fn root(&self) -> String {
        self.temp.path().to_string_lossy().replace('\\', "/")
    }

    /// Absolute path of a sandbox-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// The sandbox's home directory as a string.
    pub fn home(&self) -> String {
        format!("{}/home", self.root())
    }

    /// The docker-local config directory inside the sandbox.
    pub fn config_dir(&self) -> PathBuf {
        self.path("xdg/docker-local")
    }

    /// The environment a process inside the sandbox would see.
    pub fn environment(&self) -> MapEnvironment {
        MapEnvironment::new(OsFamily::Linux)
            .with_var("HOME", self.home())
            .with_var("XDG_CONFIG_HOME", format!("{}/xdg", self.root()))
    }

    /// A resolver bound to the sandbox.
    pub fn resolver(&self) -> PathResolver {
        PathResolver::with_environment(self.environment())
            .with_package_directory(format!("{}/pkg", self.root()))
    }

    /// Writes the config file with the given contents.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a file at a sandbox-relative path, creating parents.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Reads a file as JSON.
    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }
}
