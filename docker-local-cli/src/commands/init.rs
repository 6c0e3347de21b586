//! Init command implementation.
//!
//! This module implements the `init` command, which writes the default
//! configuration file.

use crate::error::CliError;
use crate::utils::{open_app, GlobalOptions};
use clap::Args;

/// Write the default configuration file.
#[derive(Args)]
pub struct InitCommand {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,

    /// Print the default configuration instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl InitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut app = open_app(global);
        let path = app.config().config_path().to_path_buf();

        if self.dry_run {
            app.bootstrap_defaults(false)?;
            println!("{}", app.config().to_json()?);
            return Ok(());
        }

        if app.is_initialized() && !self.force {
            return Err(CliError::SemanticFailure(format!(
                "Configuration file already exists (use --force to overwrite): {}",
                path.display()
            )));
        }

        app.bootstrap_defaults(true)?;
        println!("Created configuration file: {}", path.display());
        Ok(())
    }
}
