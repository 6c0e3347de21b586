//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home and config directory
//! - Command builder helpers
//! - Config file fixtures

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated home, config and package directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with `home/` and `pkg/` directories.
    ///
    /// The config directory (`xdg/docker-local`) is not created.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        fs::create_dir_all(temp_path.join("home")).expect("Failed to create home");
        fs::create_dir_all(temp_path.join("pkg/resources/docker"))
            .expect("Failed to create package dir");

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// The sandbox root with forward slashes.
    pub fn root(&self) -> String {
        self.temp_path.to_string_lossy().replace('\\', "/")
    }

    /// The sandbox home directory.
    pub fn home(&self) -> String {
        format!("{}/home", self.root())
    }

    /// The sandbox package directory.
    pub fn package_dir(&self) -> String {
        format!("{}/pkg", self.root())
    }

    /// The docker-local config directory.
    pub fn config_dir(&self) -> PathBuf {
        self.temp_path.join("xdg").join("docker-local")
    }

    /// The default config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("config.json")
    }

    /// A command for the helper binary with the environment isolated.
    pub fn command(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("docker-local-config").expect("Failed to find binary");
        cmd.env("HOME", self.home())
            .env("XDG_CONFIG_HOME", format!("{}/xdg", self.root()))
            .env("DOCKER_LOCAL_PACKAGE_DIR", self.package_dir())
            .env_remove("DOCKER_LOCAL_CONFIG")
            .env_remove("DOCKER_LOCAL_LOG_MODE")
            .env_remove("USERPROFILE")
            .env_remove("APPDATA");
        cmd
    }

    /// Write the default config file.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        fs::create_dir_all(self.config_dir()).expect("Failed to create config dir");
        let path = self.config_file();
        fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Create a directory under the sandbox.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file under the sandbox, creating parent directories.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Parse a JSON file.
    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        let contents = fs::read_to_string(path).expect("Failed to read file");
        serde_json::from_str(&contents).expect("Invalid JSON")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }
}
