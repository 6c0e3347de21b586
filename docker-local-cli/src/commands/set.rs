//! Command to write a configuration value.

use crate::error::CliError;
use crate::utils::{open_app, GlobalOptions};
use clap::Args;
use docker_local::ConfigValue;

/// Set a configuration value and save the file.
#[derive(Args)]
pub struct SetCommand {
    /// Dot-separated key, e.g. `mysql.port`
    #[arg(value_name = "KEY")]
    pub key: String,

    /// New value; JSON scalars (`3307`, `true`, `null`) keep their type
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

impl SetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let value = parse_value(&self.value);
        let mut app = open_app(global);
        let store = app.config_mut();
        store.set(&self.key, value)?;
        store.save()?;
        global.logger.info(&format!(
            "Set {} in {}",
            self.key,
            store.config_path().display()
        ));
        Ok(())
    }
}

/// Interpret a command-line value.
///
/// Input that parses as a JSON scalar keeps its JSON type. Everything else,
/// including JSON arrays and objects, is stored as the literal string.
fn parse_value(raw: &str) -> ConfigValue {
    match serde_json::from_str::<ConfigValue>(raw) {
        Ok(ConfigValue::Array(_) | ConfigValue::Mapping(_)) | Err(_) => {
            ConfigValue::String(raw.to_string())
        }
        Ok(value) => value,
    }
}
