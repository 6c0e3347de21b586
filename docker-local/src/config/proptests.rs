//! Property-based tests for the configuration store.

use super::store::ConfigStore;
use super::value::{ConfigTree, ConfigValue};
use crate::environment::{MapEnvironment, OsFamily};
use crate::path::PathResolver;
use proptest::prelude::*;
use tempfile::TempDir;

fn resolver() -> PathResolver {
    PathResolver::with_environment(
        MapEnvironment::new(OsFamily::Linux).with_var("HOME", "/home/prop"),
    )
    .with_package_directory("/package")
}

// Dot paths of one to four lowercase segments
fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z_]{1,8}", 1..=4).prop_map(|segments| segments.join("."))
}

// Scalars that come back from `get` unchanged (no `~` or `$`)
fn scalar_strategy() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        "[a-zA-Z0-9 ./:-]{0,16}".prop_map(ConfigValue::String),
        any::<i64>().prop_map(ConfigValue::Integer),
        any::<bool>().prop_map(ConfigValue::Boolean),
        Just(ConfigValue::Null),
    ]
}

proptest! {
    #[test]
    fn set_then_get_returns_value(key in key_strategy(), value in scalar_strategy()) {
        let mut store = ConfigStore::new(resolver());
        store.set(&key, value.clone()).unwrap();
        prop_assert_eq!(store.get(&key).unwrap(), Some(value));
    }

    #[test]
    fn set_then_has(key in key_strategy(), value in scalar_strategy()) {
        let mut store = ConfigStore::new(resolver());
        store.set(&key, value).unwrap();
        prop_assert!(store.has(&key).unwrap());
    }

    #[test]
    fn missing_path_yields_default(key in key_strategy(), fallback in any::<i64>()) {
        let mut store = ConfigStore::new(resolver());
        prop_assert_eq!(store.get_or(&key, fallback).unwrap(), ConfigValue::Integer(fallback));
    }

    #[test]
    fn tilde_strings_resolve_on_get(key in key_strategy(), rest in "[a-z]{0,10}") {
        let mut store = ConfigStore::new(resolver());
        store.set(&key, format!("~/{rest}")).unwrap();
        prop_assert_eq!(store.get_str(&key).unwrap(), Some(format!("/home/prop/{rest}")));
    }

    #[test]
    fn save_then_reload_is_equal(
        entries in prop::collection::vec((key_strategy(), scalar_strategy()), 0..8)
    ) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        let mut store = ConfigStore::with_path(resolver(), &path);
        for (key, value) in entries {
            store.set(&key, value).unwrap();
        }
        store.save().unwrap();

        let mut reloaded = ConfigStore::with_path(resolver(), &path);
        let expected: ConfigTree = store.all().unwrap().clone();
        prop_assert_eq!(reloaded.all().unwrap(), &expected);
    }
}
