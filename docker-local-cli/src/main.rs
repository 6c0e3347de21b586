//! Main entry point for the docker-local shell helper.
//!
//! Bash scripts call this binary to read the docker-local configuration:
//! - `config`: Print configured directories as `NAME='value'` lines
//! - `get`: Print a single value
//! - `resolve`: Locate a docker file, preferring the user's copy
//! - `validate`: Check the configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use commands::ConfigCommand;
use docker_local::{init_logger, SystemEnvironment};
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = init_logger(&SystemEnvironment, cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        logger,
    };

    // Execute the command
    let result = match cli.command.unwrap_or(Command::Config(ConfigCommand {})) {
        Command::Config(cmd) => cmd.execute(&global),
        Command::Paths(cmd) => cmd.execute(&global),
        Command::Get(cmd) => cmd.execute(&global),
        Command::Set(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Initialized(cmd) => cmd.execute(&global),
        Command::Version(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Init(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if e.has_message() {
                global.logger.error(&e.to_string());
            }
            std::process::exit(e.exit_code());
        }
    }
}
