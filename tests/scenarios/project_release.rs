//! Release deploy of a local project whose descriptor inherits from a
//! parent in the cache.

use std::fs;
use std::sync::Arc;

use artifact_deploy::application::{DeployOptions, ProjectArtifacts};
use artifact_deploy::domain::ports::ArtifactResolver;
use artifact_deploy::domain::value_objects::Coordinate;
use artifact_deploy::infrastructure::TomlDescriptorStore;
use artifact_deploy::presentation::{factory, AttachmentSpec, LocalProject};

use crate::common::{jar, publisher, use_case, LocalRepo, RELEASES};

const PARENT: &str = r#"
group = "com.acme"
name = "parent"
version = "3"
packaging = "pom"
description = "Acme parent"
modules = ["widget"]

[properties]
"java.version" = "17"

[[licenses]]
name = "Apache-2.0"

[[dependencies]]
group = "com.acme"
name = "logging"
version = "1.2"
"#;

const PROJECT: &str = r#"
name = "widget"
version = "1.0"

[parent]
group = "com.acme"
name = "parent"
version = "3"

[[dependencies]]
group = "com.acme"
name = "gear"
version = "2.0"

[[dependencies]]
group = "org.junit"
name = "junit"
version = "5"
scope = "test"
"#;

struct Project {
    repo: LocalRepo,
    project: LocalProject,
    resolver: Arc<dyn ArtifactResolver>,
}

fn project() -> Project {
    let repo = LocalRepo::new();
    repo.install(&Coordinate::new("com.acme", "parent", "3", "pom"), PARENT);

    let dir = repo.root().join("widget");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("pom.toml");
    fs::write(&path, PROJECT).unwrap();

    load(repo, &path)
}

fn load(repo: LocalRepo, path: &std::path::Path) -> Project {
    let project = LocalProject::load(&TomlDescriptorStore::new(), path).unwrap();
    let resolver: Arc<dyn ArtifactResolver> = Arc::new(project.resolver(repo.resolver()));
    let project = project
        .with_ancestors(&factory::create_flattener(Arc::clone(&resolver)), &repo.context())
        .unwrap();
    Project {
        repo,
        project,
        resolver,
    }
}

const CORPORATE_PARENT: &str = r#"
group = "com.acme"
name = "corp"
version = "7"
packaging = "pom"

[distribution.repository]
id = "corp-releases"
url = "file:///srv/corp-releases"

[dependency_management]
[[dependency_management.dependencies]]
group = "com.acme"
name = "gear"
version = "2.0"
"#;

const CORPORATE_CHILD: &str = r#"
name = "widget"
version = "1.0"

[parent]
group = "com.acme"
name = "corp"
version = "7"

[[dependencies]]
group = "com.acme"
name = "gear"
"#;

/// A child of `com.acme:corp:7`, which owns the distribution target and the
/// dependency versions
fn corporate_project() -> Project {
    let repo = LocalRepo::new();
    repo.install(&Coordinate::new("com.acme", "corp", "7", "pom"), CORPORATE_PARENT);
    repo.install(&jar("com.acme", "gear", "2.0"), "gear classes");

    let dir = repo.root().join("widget");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("pom.toml");
    fs::write(&path, CORPORATE_CHILD).unwrap();
    load(repo, &path)
}

#[test]
fn project_identity_is_inherited_from_parent() {
    let fixture = project();
    assert_eq!(*fixture.project.coordinate(), jar("com.acme", "widget", "1.0"));
}

#[test]
fn flattened_release_publishes_binary_then_descriptor() {
    let fixture = project();
    let binary = fixture.repo.build_output("widget-1.0.jar", "widget classes");
    let publisher = publisher();
    let options = DeployOptions::new()
        .with_alt_repository(RELEASES)
        .with_flatten_descriptors(true)
        .with_update_release_info(true);

    let report = use_case(Arc::clone(&fixture.resolver), publisher.clone())
        .execute(
            &options,
            &fixture.project.deploy_project(fixture.repo.context(), vec![]),
            &ProjectArtifacts::new(fixture.project.primary(Some(&binary))),
        )
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.repository.as_ref().unwrap().id, "releases");

    let records = publisher.records();
    let coordinates: Vec<String> = records.iter().map(|r| r.coordinate.to_string()).collect();
    assert_eq!(
        coordinates,
        vec!["com.acme:widget:jar:1.0", "com.acme:widget:pom:1.0"]
    );
    assert_eq!(records[0].file, binary);
    assert!(records.iter().all(|r| r.effective_version == "1.0"));
    assert!(records.iter().all(|r| r.checksum.is_some()));
    assert_eq!(
        records[1].remote_path,
        std::path::PathBuf::from("com/acme/widget/1.0/widget-1.0.pom")
    );

    let primary = report.artifact(&jar("com.acme", "widget", "1.0")).unwrap();
    assert!(primary.is_release());
}

#[test]
fn flattened_descriptor_is_standalone() {
    let fixture = project();
    let flattener = artifact_deploy::presentation::factory::create_flattener(Arc::clone(
        &fixture.resolver,
    ));

    let document = flattener
        .flatten_document(
            &fixture.repo.root().join("widget").join("pom.toml"),
            &fixture.repo.context(),
        )
        .unwrap();

    assert_eq!(document.group.as_deref(), Some("com.acme"));
    assert_eq!(document.name.as_deref(), Some("widget"));
    assert_eq!(document.version.as_deref(), Some("1.0"));
    assert!(document.parent.is_none());
    assert!(document.modules.is_empty());
    assert!(document.properties.is_empty());
    assert_eq!(document.description, None);
    assert_eq!(document.licenses.len(), 1);
    assert_eq!(document.licenses[0].name, "Apache-2.0");

    // Only the project's own non-test dependencies survive
    let names: Vec<&str> = document.dependencies.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["gear"]);
}

#[test]
fn attachments_follow_the_primary_release() {
    let fixture = project();
    let binary = fixture.repo.build_output("widget-1.0.jar", "widget classes");
    let sources = fixture.repo.build_output("widget-1.0-sources.jar", "widget sources");
    let spec: AttachmentSpec = format!("jar:sources={}", sources.display()).parse().unwrap();
    let publisher = publisher();

    use_case(Arc::clone(&fixture.resolver), publisher.clone())
        .execute(
            &DeployOptions::new().with_alt_repository(RELEASES),
            &fixture.project.deploy_project(
                fixture.repo.context(),
                vec![fixture.project.attachment(&spec)],
            ),
            &ProjectArtifacts::new(fixture.project.primary(Some(&binary))),
        )
        .unwrap();

    let records = publisher.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].coordinate.classifier.as_deref(), Some("sources"));
    assert_eq!(records[1].effective_version, "1.0");
    assert_eq!(
        records[1].remote_path,
        std::path::PathBuf::from("com/acme/widget/1.0/widget-1.0-sources.jar")
    );
}

#[test]
fn distribution_target_is_inherited_from_parent() {
    let fixture = corporate_project();
    let binary = fixture.repo.build_output("widget-1.0.jar", "widget classes");
    let publisher = publisher();

    let report = use_case(Arc::clone(&fixture.resolver), publisher.clone())
        .execute(
            &DeployOptions::new(),
            &fixture.project.deploy_project(fixture.repo.context(), vec![]),
            &ProjectArtifacts::new(fixture.project.primary(Some(&binary))),
        )
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.repository.as_ref().unwrap().id, "corp-releases");
    let records = publisher.records();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.repository == "corp-releases"));
}

#[test]
fn dependency_versions_managed_by_parent_resolve() {
    let fixture = corporate_project();

    let dependencies = fixture
        .project
        .dependencies(fixture.resolver.as_ref(), &fixture.repo.context())
        .unwrap();

    assert_eq!(dependencies.len(), 1);
    assert_eq!(*dependencies[0].coordinate(), jar("com.acme", "gear", "2.0"));
    assert!(dependencies[0].file().is_some());
}
