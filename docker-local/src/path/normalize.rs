//! Pure string transforms used by path resolution.
//!
//! None of these functions touch the filesystem. Variable lookups go through
//! an [`Environment`] so callers decide where values come from.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::environment::Environment;

lazy_static! {
    /// `$NAME` or `${NAME}`. Each brace is optional on its own.
    static ref ENV_REFERENCE: Regex =
        Regex::new(r"\$\{?([A-Za-z_][A-Za-z0-9_]*)\}?").expect("valid env reference pattern");
}

/// Replace every backslash with a forward slash.
///
/// # Examples
///
/// ```
/// use docker_local::path::normalize::normalize_separators;
///
/// assert_eq!(normalize_separators(r"C:\Users\dev"), "C:/Users/dev");
/// assert_eq!(normalize_separators("/already/fine"), "/already/fine");
/// ```
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Expand a leading `~` to `home`.
///
/// Only `~` on its own and the `~/` prefix are expanded. `~user` and a `~`
/// anywhere else are left untouched.
///
/// # Examples
///
/// ```
/// use docker_local::path::normalize::expand_tilde;
///
/// assert_eq!(expand_tilde("~", "/home/dev"), "/home/dev");
/// assert_eq!(expand_tilde("~/projects", "/home/dev"), "/home/dev/projects");
/// assert_eq!(expand_tilde("~other/x", "/home/dev"), "~other/x");
/// assert_eq!(expand_tilde("/srv/~/x", "/home/dev"), "/srv/~/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str, home: &str) -> String {
    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

/// Substitute `$NAME` and `${NAME}` references.
///
/// Set variables are replaced by their value (an empty value substitutes the
/// empty string). Unset variables are left exactly as written.
///
/// # Examples
///
/// ```
/// use docker_local::environment::{MapEnvironment, OsFamily};
/// use docker_local::path::normalize::expand_env_vars;
///
/// let env = MapEnvironment::new(OsFamily::Linux).with_var("DATA", "/srv/data");
/// assert_eq!(expand_env_vars("$DATA/mysql", &env), "/srv/data/mysql");
/// assert_eq!(expand_env_vars("${DATA}/mysql", &env), "/srv/data/mysql");
/// assert_eq!(expand_env_vars("$MISSING/mysql", &env), "$MISSING/mysql");
/// ```
#[must_use]
pub fn expand_env_vars(path: &str, env: &dyn Environment) -> String {
    ENV_REFERENCE
        .replace_all(path, |caps: &Captures<'_>| {
            env.var(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Whether a config value should be treated as a path needing resolution.
///
/// Any string containing `~` or `$` qualifies.
#[must_use]
pub fn looks_like_path(value: &str) -> bool {
    value.contains('~') || value.contains('$')
}
