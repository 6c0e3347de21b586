//! Command to print a single configuration value.

use std::io::Write;

use crate::error::CliError;
use crate::utils::{open_app, GlobalOptions};
use clap::Args;

/// Print a configuration value without a trailing newline.
#[derive(Args)]
pub struct GetCommand {
    /// Dot-separated key, e.g. `mysql.port`
    #[arg(value_name = "KEY")]
    pub key: String,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut app = open_app(global);
        match app.lookup(&self.key)? {
            Some(value) => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(value.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
            None => {
                global.logger.debug(&format!("{} is not set", self.key));
                Err(CliError::silent())
            }
        }
    }
}
