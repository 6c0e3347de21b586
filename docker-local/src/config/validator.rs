//! Configuration validation.
//!
//! Validation never fails: every problem found is recorded either as an
//! error (the configuration is unusable) or as a warning (it is usable but
//! probably not what the user wants).

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::config::schema::{
    Schema, SchemaNode, CONFIG_SCHEMA, DIRECTORY_KEYS, PORT_KEYS, REQUIRED_KEYS,
};
use crate::config::value::{ConfigTree, ConfigValue};
use crate::path::PathResolver;

/// Highest valid TCP port.
const MAX_PORT: i64 = 65535;

/// The outcome of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the configuration invalid.
    pub errors: Vec<String>,
    /// Problems worth mentioning that do not invalidate it.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when there are no errors. Warnings do not count.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when at least one warning was recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Lists errors then warnings, one `  - ` item per line.
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (title, items) in [("Errors:", &self.errors), ("Warnings:", &self.warnings)] {
            if items.is_empty() {
                continue;
            }
            writeln!(f, "{title}")?;
            for item in items {
                writeln!(f, "  - {item}")?;
            }
        }
        Ok(())
    }
}

/// Validates a configuration tree against the schema and a few semantic
/// rules (directories exist, ports are in range and unique).
///
/// # Examples
///
/// ```
/// use docker_local::config::{default_config, ConfigValidator};
/// use docker_local::PathResolver;
///
/// let mut validator = ConfigValidator::new(PathResolver::new());
/// validator.validate(&default_config());
/// assert!(validator.errors().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigValidator {
    resolver: PathResolver,
    report: ValidationReport,
}

impl ConfigValidator {
    /// A validator that resolves directory values with `resolver`.
    #[must_use]
    pub fn new(resolver: PathResolver) -> Self {
        Self {
            resolver,
            report: ValidationReport::default(),
        }
    }

    /// Run every check against `tree`, replacing any previous results.
    ///
    /// Returns whether the tree is valid.
    pub fn validate(&mut self, tree: &ConfigTree) -> bool {
        self.report = ValidationReport::default();

        self.check_required(tree);
        self.check_schema(tree, CONFIG_SCHEMA, "");
        self.check_directories(tree);
        self.check_ports(tree);

        log::debug!(
            "validation finished with {} error(s), {} warning(s)",
            self.report.errors.len(),
            self.report.warnings.len()
        );
        self.is_valid()
    }

    fn check_required(&mut self, tree: &ConfigTree) {
        for key in REQUIRED_KEYS {
            if !tree.contains_key(key) {
                self.error(format!("Missing required configuration key: {key}"));
            }
        }
    }

    fn check_schema(&mut self, tree: &ConfigTree, schema: Schema, prefix: &str) {
        for (name, node) in schema {
            let Some(value) = tree.get(name) else {
                continue;
            };
            let key = if prefix.is_empty() {
                (*name).to_string()
            } else {
                format!("{prefix}.{name}")
            };

            match node {
                SchemaNode::Nested(inner) => match value {
                    ConfigValue::Mapping(child) => self.check_schema(child, *inner, &key),
                    _ => self.error(format!("Configuration key '{key}' must be an object")),
                },
                SchemaNode::Type(expected) if !expected.matches(value) => {
                    self.error(format!(
                        "Configuration key '{key}' must be of type {expected}, got {}",
                        value.type_name()
                    ));
                }
                SchemaNode::Type(_) => {}
            }
        }
    }

    fn check_directories(&mut self, tree: &ConfigTree) {
        for (key, label) in DIRECTORY_KEYS {
            let Some(raw) = tree.get(key).and_then(ConfigValue::as_str) else {
                continue;
            };
            let path = self.resolver.resolve(raw);
            if !Path::new(&path).is_dir() {
                self.warning(format!("{label} does not exist: {path}"));
            }
        }
    }

    fn check_ports(&mut self, tree: &ConfigTree) {
        let mut seen: HashMap<String, &'static str> = HashMap::new();

        for port in PORT_KEYS {
            let value = match tree.lookup(port.key) {
                None | Some(ConfigValue::Null) => continue,
                Some(value) => value,
            };

            if !matches!(value.as_i64(), Some(1..=MAX_PORT)) {
                self.error(format!(
                    "Invalid port number for '{}': {value} (must be 1-{MAX_PORT})",
                    port.key
                ));
            }

            // Ports are compared by their rendered text, so "3306" and 3306
            // collide. Lists and mappings never do.
            if matches!(value, ConfigValue::Array(_) | ConfigValue::Mapping(_)) {
                continue;
            }
            let rendered = value.to_string();
            match seen.get(&rendered) {
                Some(first) => self.error(format!(
                    "Port conflict: {} and {first} both use port {rendered}",
                    port.service
                )),
                None => {
                    seen.insert(rendered, port.service);
                }
            }
        }
    }

    fn error(&mut self, message: String) {
        self.report.errors.push(message);
    }

    fn warning(&mut self, message: String) {
        self.report.warnings.push(message);
    }

    /// Errors from the last run.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.report.errors
    }

    /// Warnings from the last run.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.report.warnings
    }

    /// Whether the last run found no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    /// Whether the last run produced warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.report.has_warnings()
    }

    /// A copy of the last run's results.
    #[must_use]
    pub fn report(&self) -> ValidationReport {
        self.report.clone()
    }
}
