//! Cross-platform path handling.
//!
//! Paths in docker-local are plain strings that always use `/` as separator,
//! including on Windows. Resolution happens in three steps:
//!
//! 1. `~` or a `~/` prefix expands to the home directory
//! 2. `$NAME` and `${NAME}` expand to environment values (unset names stay)
//! 3. backslashes become forward slashes
//!
//! The [`PathResolver`] also knows where the well-known directories live:
//! the XDG-style config directory, the package's bundled resources, and the
//! default projects directory.
//!
//! # Examples
//!
//! ```
//! use docker_local::environment::{MapEnvironment, OsFamily};
//! use docker_local::path::{PathResolver, Platform};
//!
//! let env = MapEnvironment::new(OsFamily::Windows).with_var("USERPROFILE", r"C:\Users\dev");
//! let resolver = PathResolver::with_environment(env);
//!
//! assert_eq!(resolver.platform(), Platform::Windows);
//! assert_eq!(resolver.resolve("~/sites"), "C:/Users/dev/sites");
//! ```

pub mod normalize;
pub mod platform;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use platform::Platform;
pub use resolver::{
    PathResolver, APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DIR_PERMISSIONS, PACKAGE_DIR_VAR,
};
