//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ConfigCommand, GetCommand, InitCommand, InitializedCommand, PathsCommand, ResolveCommand,
    SetCommand, ValidateCommand, VersionCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shell helper exposing docker-local configuration to bash scripts.
#[derive(Parser)]
#[command(name = "docker-local-config")]
#[command(version, about = "Expose docker-local configuration to shell scripts", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of the default one
    #[arg(long, value_name = "PATH", global = true, env = "DOCKER_LOCAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to `config`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the configured directories as shell assignments
    Config(ConfigCommand),

    /// Print the resolver's standard directories as shell assignments
    Paths(PathsCommand),

    /// Print a single configuration value
    Get(GetCommand),

    /// Set a configuration value and save the file
    Set(SetCommand),

    /// Print the path of a docker file, preferring the user's copy
    Resolve(ResolveCommand),

    /// Exit 0 if the configuration file exists, 1 otherwise
    Initialized(InitializedCommand),

    /// Print the docker-local version
    Version(VersionCommand),

    /// Validate the configuration file
    Validate(ValidateCommand),

    /// Write the default configuration file
    Init(InitCommand),
}
