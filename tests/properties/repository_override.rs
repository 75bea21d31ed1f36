//! Properties of the `ID::LAYOUT::URL` repository override grammar.

use proptest::prelude::*;

use artifact_deploy::domain::value_objects::RepositoryTarget;

fn field() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9._-]{0,15}"
}

fn url() -> impl Strategy<Value = String> {
    ("(https|http|file|scp)", "[a-z0-9.]{1,12}", "(/[a-z0-9_-]{1,8}){0,3}")
        .prop_map(|(scheme, host, path)| format!("{scheme}://{host}{path}"))
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

    /// PROPERTY: a well-formed triple yields exactly its three fields
    #[test]
    fn property_override_triple_is_preserved(id in field(), layout in field(), url in url()) {
        let target = RepositoryTarget::parse_override(&format!("{id}::{layout}::{url}")).unwrap();
        prop_assert_eq!(target.id, id);
        prop_assert_eq!(target.layout, layout);
        prop_assert_eq!(target.url, url);
    }

    /// PROPERTY: surrounding whitespace never changes the parsed fields
    #[test]
    fn property_override_fields_are_trimmed(
        id in field(),
        layout in field(),
        url in url(),
        pad in "[ \t]{0,3}",
    ) {
        let spaced = format!("{pad}{id}{pad}::{pad}{layout}{pad}::{pad}{url}{pad}");
        let target = RepositoryTarget::parse_override(&spaced).unwrap();
        prop_assert_eq!(target, RepositoryTarget::new(id, layout, url));
    }

    /// PROPERTY: anything but exactly three separated fields is rejected
    #[test]
    fn property_wrong_field_count_is_rejected(
        fields in prop::collection::vec(field(), 1..6)
            .prop_filter("three fields are valid", |f| f.len() != 3),
    ) {
        prop_assert!(RepositoryTarget::parse_override(&fields.join("::")).is_err());
    }

    /// PROPERTY: an empty field anywhere is rejected
    #[test]
    fn property_empty_field_is_rejected(id in field(), url in url(), slot in 0usize..3) {
        let mut fields = vec![id, "default".to_string(), url];
        fields[slot] = "  ".to_string();
        prop_assert!(RepositoryTarget::parse_override(&fields.join("::")).is_err());
    }
}
