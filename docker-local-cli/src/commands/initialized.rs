//! Command to check whether docker-local has been set up.

use crate::error::CliError;
use crate::utils::{open_app, GlobalOptions};
use clap::Args;

/// Exit 0 if the configuration file exists and 1 otherwise.
#[derive(Args)]
pub struct InitializedCommand {}

impl InitializedCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if open_app(global).is_initialized() {
            Ok(())
        } else {
            Err(CliError::silent())
        }
    }
}
