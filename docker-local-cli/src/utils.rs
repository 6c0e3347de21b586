//! Utility functions for CLI operations.
//!
//! This module provides the options shared by every command and builds the
//! [`DockerLocal`] facade they operate on.

use std::path::PathBuf;

use docker_local::{ConfigStore, ConfigValidator, DockerLocal, Logger, PathResolver};

/// Global CLI options shared across all commands.
#[derive(Debug)]
pub struct GlobalOptions {
    /// Enable verbose output.
    #[allow(dead_code)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[allow(dead_code)]
    pub quiet: bool,

    /// Explicit configuration file, replacing `<config dir>/config.json`.
    pub config: Option<PathBuf>,

    /// Logger configured from the verbosity flags.
    pub logger: Logger,
}

/// Build the facade for this invocation.
///
/// With `--config`, the store is bound to that file; otherwise it uses the
/// resolver's default config file.
pub fn open_app(global: &GlobalOptions) -> DockerLocal {
    let resolver = PathResolver::new();
    match &global.config {
        Some(path) => {
            global
                .logger
                .debug(&format!("using config file {}", path.display()));
            let validator = ConfigValidator::new(resolver.clone());
            DockerLocal::with_parts(ConfigStore::with_path(resolver, path), validator)
        }
        None => DockerLocal::with_resolver(resolver),
    }
}
