#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # docker-local
//!
//! Configuration and path resolution for the docker-local development
//! environment.
//!
//! This library owns the user's `config.json`: where it lives, how dot-path
//! keys are read and written, how path-valued settings expand `~` and
//! `$VARS`, and how the document is validated.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: home, config, package and resource directories
//! - [`ConfigStore`]: lazily loaded, dot-addressed JSON configuration
//! - [`ConfigValidator`] and [`ValidationReport`]: schema and port checks
//! - [`DockerLocal`]: facade combining the above
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use docker_local::environment::{MapEnvironment, OsFamily};
//! use docker_local::{ConfigStore, PathResolver};
//!
//! let env = MapEnvironment::new(OsFamily::Linux).with_var("HOME", "/home/dev");
//! let mut store = ConfigStore::new(PathResolver::with_environment(env));
//!
//! store.set("projects_path", "~/code")?;
//! assert_eq!(store.get_str("projects_path")?.as_deref(), Some("/home/dev/code"));
//! # Ok::<(), docker_local::Error>(())
//! ```

pub mod config;
pub mod docker_local;
pub mod environment;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ConfigStore, ConfigTree, ConfigValidator, ConfigValue, ValidationReport};
pub use docker_local::DockerLocal;
pub use environment::{Environment, MapEnvironment, OsFamily, SystemEnvironment};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathResolver, Platform};
