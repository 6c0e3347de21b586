//! The default configuration document written by `init`.

use crate::config::value::ConfigTree;

/// Version string stamped into new configuration files.
pub const CONFIG_VERSION: &str = "2.0.0";

/// Build the default configuration tree.
///
/// # Examples
///
/// ```
/// use docker_local::config::default_config;
///
/// let defaults = default_config();
/// assert_eq!(defaults.lookup("mysql.port").and_then(|v| v.as_i64()), Some(3306));
/// assert_eq!(defaults.lookup("projects_path").and_then(|v| v.as_str()), Some("~/projects"));
/// ```
#[must_use]
pub fn default_config() -> ConfigTree {
    let mut tree = ConfigTree::new();
    tree.insert("version", CONFIG_VERSION);
    tree.insert("projects_path", "~/projects");
    tree.insert("docker_files_path", "~/.config/docker-local");
    tree.insert("editor", "code");
    tree.insert("default_php_version", "8.4");

    tree.set_path("mysql.version", "9.1");
    tree.set_path("mysql.port", 3306);
    tree.set_path("postgres.port", 5432);
    tree.set_path("redis.port", 6379);
    tree.set_path("minio.api_port", 9000);
    tree.set_path("minio.console_port", 9001);
    tree.set_path("mailpit.web_port", 8025);
    tree.set_path("mailpit.smtp_port", 1025);

    tree.set_path("reverb.port", 6001);
    tree.set_path("reverb.project_name", "myapp");
    tree.set_path("reverb.app_id", "my-app-id");
    tree.set_path("reverb.app_key", "my-app-key");
    tree.set_path("reverb.app_secret", "my-app-secret");
    tree.set_path("reverb.scaling_enabled", false);
    tree
}
