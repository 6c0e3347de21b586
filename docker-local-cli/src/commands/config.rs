//! Command to print the configured directories for `eval` in bash.

use crate::error::CliError;
use crate::utils::{open_app, GlobalOptions};
use clap::Args;
use docker_local::output::format_assignments;

/// Print the configured directories as `NAME='value'` lines.
#[derive(Args)]
pub struct ConfigCommand {}

impl ConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut app = open_app(global);
        print!("{}", format_assignments(&app.paths()?));
        Ok(())
    }
}
