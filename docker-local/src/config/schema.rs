//! The static shape of a docker-local configuration.
//!
//! The schema is only used for validation. Every key is optional except the
//! ones in [`REQUIRED_KEYS`].

use std::fmt;

use crate::config::value::ConfigValue;

/// Primitive type tags a schema leaf can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    /// A string.
    String,
    /// An integer.
    Integer,
    /// A boolean.
    Boolean,
    /// A list or mapping.
    Array,
}

impl SchemaType {
    /// Whether `value` has this type.
    #[must_use]
    pub fn matches(self, value: &ConfigValue) -> bool {
        match self {
            Self::String => matches!(value, ConfigValue::String(_)),
            Self::Integer => matches!(value, ConfigValue::Integer(_)),
            Self::Boolean => matches!(value, ConfigValue::Boolean(_)),
            Self::Array => matches!(value, ConfigValue::Array(_) | ConfigValue::Mapping(_)),
        }
    }

    /// Tag name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One level of the schema: key names paired with their declaration.
pub type Schema = &'static [(&'static str, SchemaNode)];

/// A schema entry: either a primitive type or a nested schema.
#[derive(Debug, Clone, Copy)]
pub enum SchemaNode {
    /// The value must have this primitive type.
    Type(SchemaType),
    /// The value must be a mapping conforming to the nested schema.
    Nested(Schema),
}

use SchemaNode::{Nested, Type};
use SchemaType::{Boolean, Integer, String as Str};

/// The docker-local configuration schema.
pub const CONFIG_SCHEMA: Schema = &[
    ("version", Type(Str)),
    ("projects_path", Type(Str)),
    ("docker_files_path", Type(Str)),
    ("editor", Type(Str)),
    ("default_php_version", Type(Str)),
    ("mysql", Nested(&[("version", Type(Str)), ("port", Type(Integer))])),
    ("postgres", Nested(&[("port", Type(Integer))])),
    ("redis", Nested(&[("port", Type(Integer))])),
    (
        "minio",
        Nested(&[("api_port", Type(Integer)), ("console_port", Type(Integer))]),
    ),
    (
        "mailpit",
        Nested(&[("web_port", Type(Integer)), ("smtp_port", Type(Integer))]),
    ),
    (
        "reverb",
        Nested(&[
            ("port", Type(Integer)),
            ("project_name", Type(Str)),
            ("app_id", Type(Str)),
            ("app_key", Type(Str)),
            ("app_secret", Type(Str)),
            ("scaling_enabled", Type(Boolean)),
        ]),
    ),
];

/// Top-level keys that must be present.
pub const REQUIRED_KEYS: &[&str] = &["version", "projects_path"];

/// A port-valued key and the service that listens on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortKey {
    /// Dot path of the port value.
    pub key: &'static str,
    /// Human-readable service name used in conflict messages.
    pub service: &'static str,
}

/// Port keys in the order conflicts are reported.
pub const PORT_KEYS: &[PortKey] = &[
    PortKey { key: "mysql.port", service: "MySQL" },
    PortKey { key: "postgres.port", service: "PostgreSQL" },
    PortKey { key: "redis.port", service: "Redis" },
    PortKey { key: "minio.api_port", service: "MinIO API" },
    PortKey { key: "minio.console_port", service: "MinIO Console" },
    PortKey { key: "mailpit.web_port", service: "Mailpit Web" },
    PortKey { key: "mailpit.smtp_port", service: "Mailpit SMTP" },
    PortKey { key: "reverb.port", service: "Reverb WebSocket" },
];

/// Directory-valued keys that produce a warning when the directory is missing,
/// with the label used in the warning.
pub const DIRECTORY_KEYS: &[(&str, &str)] = &[
    ("projects_path", "Projects directory"),
    ("docker_files_path", "Docker files directory"),
];

/// Find the declaration for a dot path.
#[must_use]
pub fn lookup(path: &str) -> Option<SchemaNode> {
    let mut schema = CONFIG_SCHEMA;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        let (_, node) = schema.iter().find(|(key, _)| *key == segment)?;
        match (node, segments.peek()) {
            (_, None) => return Some(*node),
            (Nested(inner), Some(_)) => schema = *inner,
            (Type(_), Some(_)) => return None,
        }
    }
    None
}
