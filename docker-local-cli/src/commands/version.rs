//! Command to print the version.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use docker_local::DockerLocal;

/// Print the docker-local version.
#[derive(Args)]
pub struct VersionCommand {}

impl VersionCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", DockerLocal::version());
        Ok(())
    }
}
