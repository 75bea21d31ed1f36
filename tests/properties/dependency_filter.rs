//! Properties of the publishable-dependency filter.

use proptest::prelude::*;

use artifact_deploy::domain::entities::Dependency;
use artifact_deploy::domain::services::publishable_dependencies;

fn dependency() -> impl Strategy<Value = Dependency> {
    (
        "[a-z]{1,6}",
        prop::option::of(prop_oneof![
            Just("compile"),
            Just("runtime"),
            Just("provided"),
            Just("system"),
            Just("test"),
            Just("Test"),
        ]),
    )
        .prop_map(|(name, scope)| {
            let dependency = Dependency::new("com.acme", name).with_version("1.0");
            match scope {
                Some(scope) => dependency.with_scope(scope),
                None => dependency,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    /// PROPERTY: nothing scoped exactly `test` survives
    #[test]
    fn property_test_scope_is_removed(declared in prop::collection::vec(dependency(), 0..12)) {
        let kept = publishable_dependencies(&declared);
        prop_assert!(kept.iter().all(|d| d.scope.as_deref() != Some("test")));
    }

    /// PROPERTY: every other dependency is kept, in declaration order
    #[test]
    fn property_other_scopes_keep_their_order(declared in prop::collection::vec(dependency(), 0..12)) {
        let expected: Vec<Dependency> = declared
            .iter()
            .filter(|d| d.scope.as_deref() != Some("test"))
            .cloned()
            .collect();
        prop_assert_eq!(publishable_dependencies(&declared), expected);
    }

    /// PROPERTY: filtering twice is the same as filtering once
    #[test]
    fn property_filter_is_idempotent(declared in prop::collection::vec(dependency(), 0..12)) {
        let once = publishable_dependencies(&declared);
        prop_assert_eq!(publishable_dependencies(&once), once.clone());
    }
}
