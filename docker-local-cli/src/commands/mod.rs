//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `config`: Print configured directories as shell assignments
//! - `paths`: Print the resolver's standard directories
//! - `get`: Print a configuration value
//! - `set`: Write a configuration value
//! - `resolve`: Locate a docker file
//! - `initialized`: Check that the config file exists
//! - `version`: Print the version
//! - `validate`: Validate the configuration file
//! - `init`: Write the default configuration

pub mod config;
pub mod get;
pub mod init;
pub mod initialized;
pub mod paths;
pub mod resolve;
pub mod set;
pub mod validate;
pub mod version;

pub use config::ConfigCommand;
pub use get::GetCommand;
pub use init::InitCommand;
pub use initialized::InitializedCommand;
pub use paths::PathsCommand;
pub use resolve::ResolveCommand;
pub use set::SetCommand;
pub use validate::ValidateCommand;
pub use version::VersionCommand;
