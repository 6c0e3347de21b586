//! Configuration storage and validation for docker-local.
//!
//! The configuration is a single JSON document, normally
//! `<config dir>/config.json`. It is loaded into a [`ConfigTree`] of
//! [`ConfigValue`]s and addressed with dot paths such as `mysql.port`.
//!
//! - [`ConfigStore`] loads, reads, writes and saves the document.
//! - [`ConfigValidator`] checks it against [`schema::CONFIG_SCHEMA`] and a few
//!   semantic rules, producing a [`ValidationReport`].
//! - [`default_config`] is the document written by `init`.
//!
//! # Examples
//!
//! ```
//! use docker_local::config::{default_config, ConfigValidator};
//! use docker_local::PathResolver;
//!
//! let mut tree = default_config();
//! tree.set_path("postgres.port", 3306);
//!
//! let mut validator = ConfigValidator::new(PathResolver::new());
//! assert!(!validator.validate(&tree));
//! assert!(validator.errors()[0].starts_with("Port conflict"));
//! ```
//!
//! Dot paths have no escape syntax, so keys containing `.` cannot be
//! addressed individually.

pub mod defaults;
pub mod schema;
pub mod store;
pub mod validator;
pub mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use defaults::{default_config, CONFIG_VERSION};
pub use schema::{PortKey, SchemaNode, SchemaType, PORT_KEYS, REQUIRED_KEYS};
pub use store::ConfigStore;
pub use validator::{ConfigValidator, ValidationReport};
pub use value::{ConfigTree, ConfigValue, DotPath};
