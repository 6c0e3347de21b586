//! Command to validate the docker-local configuration file.

use crate::error::CliError;
use crate::utils::{open_app, GlobalOptions};
use clap::Args;

/// Validate the configuration file.
///
/// Prints an `Errors:` section when the configuration is invalid and a
/// `Warnings:` section when there are warnings. Exits 1 on errors.
#[derive(Args)]
pub struct ValidateCommand {}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut app = open_app(global);

        if !app.is_initialized() {
            println!("Config file not found");
            return Err(CliError::silent());
        }

        let report = app.validate()?;
        print!("{report}");

        if report.is_valid() {
            global.logger.info("Configuration is valid");
            Ok(())
        } else {
            Err(CliError::silent())
        }
    }
}
