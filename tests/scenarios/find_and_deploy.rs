//! Deploying artifacts that already sit in the local cache, located by
//! coordinate.

use std::sync::Arc;

use artifact_deploy::application::{
    DeployOptions, DeployProject, InteractiveLookup, LookupMode, PartialCoordinate,
};
use artifact_deploy::domain::value_objects::{Coordinate, CoordinateField};
use artifact_deploy::error::{ConfigurationError, DeployError};
use artifact_deploy::infrastructure::TomlDescriptorStore;

use crate::common::{descriptor, jar, publisher, use_case, LocalRepo, RELEASES};

/// app -> gear -> bolt, plus a test-only dependency and a managed version
fn populated() -> LocalRepo {
    let repo = LocalRepo::new();
    repo.install_jar(
        &jar("com.acme", "app", "1.0"),
        r#"
group = "com.acme"
name = "app"
version = "1.0"

[dependency_management]
[[dependency_management.dependencies]]
group = "com.acme"
name = "bolt"
version = "3.1"

[[dependencies]]
group = "com.acme"
name = "gear"
version = "2.0"

[[dependencies]]
group = "org.junit"
name = "junit"
version = "5"
scope = "test"
"#,
    );
    repo.install_jar(
        &jar("com.acme", "gear", "2.0"),
        r#"
group = "com.acme"
name = "gear"
version = "2.0"

[[dependencies]]
group = "com.acme"
name = "bolt"
version = "3.0"
"#,
    );
    repo.install_jar(&jar("com.acme", "bolt", "3.0"), &descriptor("com.acme", "bolt", "3.0"));
    repo.install_jar(&jar("com.acme", "bolt", "3.1"), &descriptor("com.acme", "bolt", "3.1"));
    repo
}

fn lookup(repo: &LocalRepo, mode: LookupMode, partial: PartialCoordinate) -> InteractiveLookup {
    InteractiveLookup::new(
        partial,
        mode,
        repo.resolver(),
        Arc::new(TomlDescriptorStore::new()),
        repo.context(),
    )
}

fn app() -> PartialCoordinate {
    PartialCoordinate::new()
        .with_group("com.acme")
        .with_name("app")
        .with_version("1.0")
        .with_type("jar")
}

fn published(records: &[artifact_deploy::infrastructure::PublishRecord]) -> Vec<String> {
    records.iter().map(|r| r.coordinate.to_string()).collect()
}

#[test]
fn transitive_mode_publishes_the_runtime_closure() {
    let repo = populated();
    let publisher = publisher();

    let report = use_case(repo.resolver(), publisher.clone())
        .execute(
            &DeployOptions::new().with_alt_repository(RELEASES),
            &DeployProject::new(repo.context()),
            &lookup(&repo, LookupMode::Transitive, app()),
        )
        .unwrap();

    assert_eq!(report.published_count(), 3);
    let coordinates = published(&publisher.records());
    assert_eq!(coordinates[0], "com.acme:app:jar:1.0");
    assert!(coordinates.contains(&"com.acme:gear:jar:2.0".to_string()));
    assert!(coordinates.iter().all(|c| !c.contains("junit")));
    // Managed by the root below the first level
    assert!(coordinates.contains(&"com.acme:bolt:jar:3.1".to_string()));
}

#[test]
fn descriptor_mode_publishes_declared_dependencies_only() {
    let repo = populated();
    let publisher = publisher();

    use_case(repo.resolver(), publisher.clone())
        .execute(
            &DeployOptions::new().with_alt_repository(RELEASES),
            &DeployProject::new(repo.context()),
            &lookup(&repo, LookupMode::Descriptor, app()),
        )
        .unwrap();

    assert_eq!(
        published(&publisher.records()),
        vec!["com.acme:app:jar:1.0", "com.acme:gear:jar:2.0"]
    );
}

#[test]
fn incomplete_coordinate_without_prompter_fails_before_publishing() {
    let repo = populated();
    let publisher = publisher();

    let err = use_case(repo.resolver(), publisher.clone())
        .execute(
            &DeployOptions::new().with_alt_repository(RELEASES),
            &DeployProject::new(repo.context()),
            &lookup(
                &repo,
                LookupMode::Transitive,
                PartialCoordinate::new().with_group("com.acme").with_name("app"),
            ),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        DeployError::Configuration(ConfigurationError::MissingCoordinate {
            field: CoordinateField::Version
        })
    ));
    assert!(publisher.records().is_empty());
}

#[test]
fn artifact_missing_from_cache_names_the_coordinate() {
    let repo = populated();
    let err = use_case(repo.resolver(), publisher())
        .execute(
            &DeployOptions::new().with_alt_repository(RELEASES),
            &DeployProject::new(repo.context()),
            &lookup(
                &repo,
                LookupMode::Transitive,
                app().with_version("9.9"),
            ),
        )
        .unwrap_err();

    match err {
        DeployError::Resolution(e) => {
            assert_eq!(e.coordinate, Coordinate::new("com.acme", "app", "9.9", "jar"))
        }
        other => panic!("unexpected error {other:?}"),
    }
}
