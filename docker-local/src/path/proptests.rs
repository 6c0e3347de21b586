//! Property-based tests for path handling.

use super::normalize::{expand_env_vars, normalize_separators};
use super::PathResolver;
use crate::environment::{MapEnvironment, OsFamily};
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}"
}

fn mixed_separator_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(path_component_strategy(), 1..8),
        prop::collection::vec(prop_oneof![Just('/'), Just('\\')], 8),
    )
        .prop_map(|(parts, seps)| {
            let mut path = String::new();
            for (part, sep) in parts.iter().zip(seps.iter().cycle()) {
                path.push(*sep);
                path.push_str(part);
            }
            path
        })
}

fn resolver_with_home(home: &str) -> PathResolver {
    PathResolver::with_environment(MapEnvironment::new(OsFamily::Linux).with_var("HOME", home))
        .with_package_directory("/pkg")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(s)) == normalize(s)
    #[test]
    fn normalize_idempotent(s in any::<String>()) {
        let once = normalize_separators(&s);
        prop_assert_eq!(normalize_separators(&once), once.clone());
        prop_assert!(!once.contains('\\'));
    }

    #[test]
    fn normalize_only_touches_backslashes(path in mixed_separator_path_strategy()) {
        let normalized = normalize_separators(&path);
        prop_assert_eq!(normalized.len(), path.len());
        prop_assert_eq!(normalized.replace('/', ""), path.replace(['/', '\\'], ""));
    }

    #[test]
    fn tilde_prefix_maps_to_home(rest in "[a-z0-9_-]{1,12}(/[a-z0-9_-]{1,12}){0,4}") {
        let resolver = resolver_with_home("/home/prop");
        prop_assert_eq!(resolver.resolve("~"), resolver.home_directory());
        prop_assert_eq!(
            resolver.resolve(&format!("~/{rest}")),
            format!("{}/{rest}", resolver.home_directory())
        );
    }

    #[test]
    fn unset_variables_survive_verbatim(name in "[A-Z_][A-Z0-9_]{0,15}", tail in "(/[a-z]{1,8}){0,3}") {
        let env = MapEnvironment::new(OsFamily::Linux);
        let input = format!("${name}{tail}");
        prop_assert_eq!(expand_env_vars(&input, &env), input.clone());
    }

    #[test]
    fn plain_paths_resolve_to_themselves(path in "(/[a-z0-9_-]{1,10}){1,6}") {
        let resolver = resolver_with_home("/home/prop");
        prop_assert_eq!(resolver.resolve(&path), path);
    }
}
