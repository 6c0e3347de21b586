//! Command to locate a docker file.

use std::io::Write;

use crate::error::CliError;
use crate::utils::{open_app, GlobalOptions};
use clap::Args;

/// Print the path of a docker file without a trailing newline.
///
/// The user's copy under `docker_files_path` wins when it exists; otherwise
/// the bundled copy is printed whether or not it exists.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path relative to the docker files directory
    #[arg(value_name = "RELATIVE_PATH")]
    pub relative: String,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut app = open_app(global);
        let path = app.config_mut().resolve_docker_file(&self.relative)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(path.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
