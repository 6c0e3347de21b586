//! The in-memory configuration tree.
//!
//! A [`ConfigTree`] is an insertion-ordered mapping from keys to
//! [`ConfigValue`]s. Nested values are addressed with dot paths such as
//! `mysql.port`; see [`DotPath`].

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single configuration value.
///
/// The configuration proper only uses strings, integers, booleans and nested
/// mappings. The remaining variants exist so that any JSON document survives
/// a load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// A string.
    String(String),
    /// A number that fits in an `i64`.
    Integer(i64),
    /// Any other number.
    Float(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// A JSON array.
    Array(Vec<ConfigValue>),
    /// A nested mapping.
    Mapping(ConfigTree),
    /// JSON `null`.
    Null,
}

impl ConfigValue {
    /// The string content, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The nested mapping, if this is a mapping.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&ConfigTree> {
        match self {
            Self::Mapping(tree) => Some(tree),
            _ => None,
        }
    }

    /// Whether this is `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this is a mapping.
    #[must_use]
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Name of the runtime type as reported in validation messages.
    ///
    /// Mappings and arrays both report `array`; floats report `double`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "double",
            Self::Boolean(_) => "boolean",
            Self::Array(_) | Self::Mapping(_) => "array",
            Self::Null => "NULL",
        }
    }

    /// Turn this value into a mapping (replacing any non-mapping content)
    /// and return it.
    fn make_mapping(&mut self) -> &mut ConfigTree {
        if !self.is_mapping() {
            *self = Self::Mapping(ConfigTree::new());
        }
        match self {
            Self::Mapping(tree) => tree,
            _ => unreachable!("value was just replaced with a mapping"),
        }
    }
}

/// Renders the value the way the shell helper prints it: strings verbatim,
/// scalars as text, arrays and mappings as compact JSON.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Array(_) | Self::Mapping(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<ConfigTree> for ConfigValue {
    fn from(value: ConfigTree) -> Self {
        Self::Mapping(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        Self::Array(value)
    }
}

/// A dot-separated key such as `minio.console_port`.
///
/// Every `.` separates two segments; there is no escape for keys that
/// themselves contain a dot, so such keys cannot be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotPath<'a>(&'a str);

impl<'a> DotPath<'a> {
    /// Wrap a dot path string.
    #[must_use]
    pub const fn new(path: &'a str) -> Self {
        Self(path)
    }

    /// The original string.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// The segments, in order. Always yields at least one (possibly empty) segment.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.0.split('.')
    }
}

impl fmt::Display for DotPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An insertion-ordered mapping from keys to [`ConfigValue`]s.
///
/// # Examples
///
/// ```
/// use docker_local::config::{ConfigTree, ConfigValue};
///
/// let mut tree = ConfigTree::new();
/// tree.set_path("mysql.port", 3306);
/// tree.set_path("mysql.version", "9.1");
///
/// assert_eq!(tree.lookup("mysql.port"), Some(&ConfigValue::Integer(3306)));
/// assert!(tree.contains_path("mysql.version"));
/// assert_eq!(tree.lookup("mysql.port.deeper"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigTree {
    entries: Vec<(String, ConfigValue)>,
}

impl ConfigTree {
    /// An empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of keys at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this level has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Direct child lookup (no dot splitting).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Whether a direct child exists (no dot splitting).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert a direct child. An existing key keeps its position and has its
    /// value replaced; the old value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Option<ConfigValue> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove a direct child.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Iterate over the direct children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The direct child keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Follow a dot path.
    ///
    /// Returns `None` at the first missing segment or as soon as an
    /// intermediate value is not a mapping.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        let mut segments = DotPath::new(path).segments();
        let first = segments.next()?;
        let mut value = self.get(first)?;
        for segment in segments {
            value = value.as_mapping()?.get(segment)?;
        }
        Some(value)
    }

    /// Whether a dot path resolves to a value (including `null`).
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Assign a value at a dot path.
    ///
    /// Missing intermediate mappings are created and intermediate values that
    /// are not mappings are replaced by empty mappings before descending.
    pub fn set_path(&mut self, path: &str, value: impl Into<ConfigValue>) {
        let mut segments: Vec<&str> = DotPath::new(path).segments().collect();
        let leaf = segments.pop().unwrap_or_default();

        let mut current = self;
        for segment in segments {
            current = current.child_mapping_mut(segment);
        }
        current.insert(leaf, value);
    }

    fn child_mapping_mut(&mut self, key: &str) -> &mut ConfigTree {
        let index = match self.position(key) {
            Some(i) => i,
            None => {
                self.entries
                    .push((key.to_string(), ConfigValue::Mapping(ConfigTree::new())));
                self.entries.len() - 1
            }
        };
        self.entries[index].1.make_mapping()
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Array(items) => items.serialize(serializer),
            Self::Mapping(tree) => tree.serialize(serializer),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for ConfigTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = ConfigValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Integer(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ConfigValue, E> {
        Ok(i64::try_from(v).map_or(ConfigValue::Float(v as f64), ConfigValue::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ConfigValue, D::Error> {
        ConfigValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ConfigValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ConfigValue::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<ConfigValue, A::Error> {
        TreeVisitor.visit_map(map).map(ConfigValue::Mapping)
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Accepts an object, or `null` as an empty tree. Duplicate keys keep the
/// last value.
struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = ConfigTree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<ConfigTree, E> {
        Ok(ConfigTree::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ConfigTree, A::Error> {
        let mut tree = ConfigTree::new();
        while let Some((key, value)) = map.next_entry::<String, ConfigValue>()? {
            tree.insert(key, value);
        }
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for ConfigTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TreeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigTree {
        serde_json::from_str(
            r#"{
                "version": "2.0.0",
                "mysql": {"port": 3306, "version": "9.1"},
                "reverb": {"scaling_enabled": false},
                "ratio": 1.5,
                "tags": ["a", 1],
                "nothing": null
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_variants() {
        let tree = sample();
        assert_eq!(tree.get("version"), Some(&ConfigValue::from("2.0.0")));
        assert_eq!(tree.lookup("mysql.port"), Some(&ConfigValue::Integer(3306)));
        assert_eq!(
            tree.lookup("reverb.scaling_enabled"),
            Some(&ConfigValue::Boolean(false))
        );
        assert_eq!(tree.get("ratio"), Some(&ConfigValue::Float(1.5)));
        assert_eq!(
            tree.get("tags"),
            Some(&ConfigValue::Array(vec!["a".into(), 1.into()]))
        );
        assert_eq!(tree.get("nothing"), Some(&ConfigValue::Null));
    }

    #[test]
    fn test_huge_unsigned_becomes_float() {
        let tree: ConfigTree = serde_json::from_str(r#"{"n": 18446744073709551615}"#).unwrap();
        assert!(matches!(tree.get("n"), Some(ConfigValue::Float(_))));
    }

    #[test]
    fn test_top_level_null_is_empty() {
        let tree: ConfigTree = serde_json::from_str("null").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_top_level_scalar_rejected() {
        assert!(serde_json::from_str::<ConfigTree>(r#""text""#).is_err());
        assert!(serde_json::from_str::<ConfigTree>("[1, 2]").is_err());
    }

    #[test]
    fn test_duplicate_keys_last_wins_in_first_position() {
        let tree: ConfigTree = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(tree.get("a"), Some(&ConfigValue::Integer(3)));
    }

    #[test]
    fn test_insertion_order_preserved_on_serialize() {
        let mut tree = ConfigTree::new();
        tree.insert("zeta", 1);
        tree.insert("alpha", 2);
        tree.insert("zeta", 3);
        assert_eq!(serde_json::to_string(&tree).unwrap(), r#"{"zeta":3,"alpha":2}"#);
    }

    #[test]
    fn test_lookup_through_scalar_is_none() {
        let tree = sample();
        assert_eq!(tree.lookup("version.major"), None);
        assert_eq!(tree.lookup("mysql.port.number"), None);
        assert_eq!(tree.lookup("tags.0"), None);
    }

    #[test]
    fn test_lookup_missing() {
        let tree = sample();
        assert_eq!(tree.lookup("mysql.host"), None);
        assert_eq!(tree.lookup("nonexistent.key"), None);
        assert_eq!(tree.lookup(""), None);
    }

    #[test]
    fn test_contains_path_counts_null() {
        let tree = sample();
        assert!(tree.contains_path("nothing"));
        assert!(tree.contains_path("mysql"));
        assert!(!tree.contains_path("mysql.host"));
    }

    #[test]
    fn test_set_path_creates_intermediates() {
        let mut tree = ConfigTree::new();
        tree.set_path("deeply.nested.value", "test");
        assert_eq!(
            tree.lookup("deeply.nested.value"),
            Some(&ConfigValue::from("test"))
        );
        assert!(tree.lookup("deeply.nested").unwrap().is_mapping());
    }

    #[test]
    fn test_set_path_replaces_scalar_intermediate() {
        let mut tree = sample();
        tree.set_path("version.major", 2);
        assert_eq!(tree.lookup("version.major"), Some(&ConfigValue::Integer(2)));
        assert!(tree.get("version").unwrap().is_mapping());
        // key keeps its original position
        assert_eq!(tree.keys().next(), Some("version"));
    }

    #[test]
    fn test_set_path_keeps_siblings() {
        let mut tree = sample();
        tree.set_path("mysql.port", 3307);
        assert_eq!(tree.lookup("mysql.port"), Some(&ConfigValue::Integer(3307)));
        assert_eq!(tree.lookup("mysql.version"), Some(&ConfigValue::from("9.1")));
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(ConfigValue::from("~/x").to_string(), "~/x");
        assert_eq!(ConfigValue::from(3306).to_string(), "3306");
        assert_eq!(ConfigValue::from(true).to_string(), "true");
        assert_eq!(ConfigValue::Null.to_string(), "null");

        let tree: ConfigTree = [("port", 3306)].into_iter().collect();
        assert_eq!(ConfigValue::from(tree).to_string(), r#"{"port":3306}"#);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ConfigValue::from("x").type_name(), "string");
        assert_eq!(ConfigValue::from(1).type_name(), "integer");
        assert_eq!(ConfigValue::from(1.5).type_name(), "double");
        assert_eq!(ConfigValue::from(false).type_name(), "boolean");
        assert_eq!(ConfigValue::Array(vec![]).type_name(), "array");
        assert_eq!(ConfigValue::from(ConfigTree::new()).type_name(), "array");
        assert_eq!(ConfigValue::Null.type_name(), "NULL");
    }

    #[test]
    fn test_dot_path_segments() {
        assert_eq!(
            DotPath::new("minio.api_port").segments().collect::<Vec<_>>(),
            vec!["minio", "api_port"]
        );
        assert_eq!(DotPath::new("").segments().collect::<Vec<_>>(), vec![""]);
        assert_eq!(
            DotPath::new("a..b").segments().collect::<Vec<_>>(),
            vec!["a", "", "b"]
        );
    }

    #[test]
    fn test_remove() {
        let mut tree = sample();
        assert_eq!(tree.remove("ratio"), Some(ConfigValue::Float(1.5)));
        assert!(!tree.contains_key("ratio"));
        assert_eq!(tree.remove("ratio"), None);
    }
}
