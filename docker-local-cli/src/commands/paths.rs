//! Command to print the resolver's standard directories.

use crate::error::CliError;
use crate::utils::{open_app, GlobalOptions};
use clap::Args;
use docker_local::output::format_assignments;

/// Print the home, config, package and resource directories.
#[derive(Args)]
pub struct PathsCommand {}

impl PathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let app = open_app(global);
        print!("{}", format_assignments(&app.resolver_paths()));
        Ok(())
    }
}
