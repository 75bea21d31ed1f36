//! Snapshot deploys: timestamped versions shared across one build, and the
//! descriptor-only fallback for projects without a primary binary.

use std::fs;
use std::sync::Arc;

use artifact_deploy::application::{DeployOptions, ProjectArtifacts};
use artifact_deploy::domain::ports::ArtifactResolver;
use artifact_deploy::error::DeployError;
use artifact_deploy::infrastructure::TomlDescriptorStore;
use artifact_deploy::presentation::{AttachmentSpec, LocalProject};

use crate::common::{jar, publisher, use_case, LocalRepo};

const PROJECT: &str = r#"
group = "com.acme"
name = "widget"
version = "1.0-SNAPSHOT"

[distribution.repository]
id = "releases"
url = "file:///srv/releases"

[distribution.snapshot_repository]
id = "snapshots"
url = "file:///srv/snapshots"
"#;

fn load(repo: &LocalRepo) -> (LocalProject, Arc<dyn ArtifactResolver>) {
    let path = repo.root().join("pom.toml");
    fs::write(&path, PROJECT).unwrap();
    let project = LocalProject::load(&TomlDescriptorStore::new(), &path).unwrap();
    let resolver: Arc<dyn ArtifactResolver> = Arc::new(project.resolver(repo.resolver()));
    (project, resolver)
}

fn sources(repo: &LocalRepo, project: &LocalProject) -> artifact_deploy::domain::entities::ArtifactHandle {
    let file = repo.build_output("widget-sources.jar", "widget sources");
    let spec: AttachmentSpec = format!("jar:sources={}", file.display()).parse().unwrap();
    project.attachment(&spec)
}

fn is_timestamped(version: &str) -> bool {
    version.starts_with("1.0-") && version.ends_with("-1") && !version.contains("SNAPSHOT")
}

#[test]
fn snapshot_goes_to_snapshot_repository_with_one_timestamp() {
    let repo = LocalRepo::new();
    let (project, resolver) = load(&repo);
    let binary = repo.build_output("widget.jar", "widget classes");
    let publisher = publisher();

    let report = use_case(resolver, publisher.clone())
        .execute(
            &DeployOptions::new(),
            &project.deploy_project(repo.context(), vec![sources(&repo, &project)]),
            &ProjectArtifacts::new(project.primary(Some(&binary))),
        )
        .unwrap();

    let records = publisher.records();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.repository == "snapshots"));
    assert!(is_timestamped(&records[0].effective_version));
    assert_eq!(records[0].effective_version, records[1].effective_version);
    assert_eq!(
        report.effective_version_of(&jar("com.acme", "widget", "1.0-SNAPSHOT")),
        Some(records[0].effective_version.as_str())
    );
}

#[test]
fn missing_binary_falls_back_to_descriptor_and_attachments() {
    let repo = LocalRepo::new();
    let (project, resolver) = load(&repo);
    let publisher = publisher();

    let report = use_case(resolver, publisher.clone())
        .execute(
            &DeployOptions::new(),
            &project.deploy_project(repo.context(), vec![sources(&repo, &project)]),
            &ProjectArtifacts::new(project.primary(None)),
        )
        .unwrap();

    let records = publisher.records();
    let coordinates: Vec<String> = records.iter().map(|r| r.coordinate.to_string()).collect();
    assert_eq!(
        coordinates,
        vec![
            "com.acme:widget:pom:1.0-SNAPSHOT",
            "com.acme:widget:jar:sources:1.0-SNAPSHOT"
        ]
    );
    assert_eq!(records[0].file, repo.root().join("pom.toml"));
    assert!(is_timestamped(&records[0].effective_version));
    assert_eq!(records[1].effective_version, records[0].effective_version);

    // The primary carries the version its descriptor was given
    let primary = report
        .artifact(&jar("com.acme", "widget", "1.0-SNAPSHOT"))
        .unwrap();
    assert_eq!(primary.effective_version(), records[0].effective_version);
}

#[test]
fn nothing_to_publish_is_an_error() {
    let repo = LocalRepo::new();
    let (project, resolver) = load(&repo);
    let publisher = publisher();

    let err = use_case(resolver, publisher.clone())
        .execute(
            &DeployOptions::new(),
            &project.deploy_project(repo.context(), vec![]),
            &ProjectArtifacts::new(project.primary(None)),
        )
        .unwrap_err();

    assert!(matches!(err, DeployError::NoPublishableContent { .. }));
    assert!(publisher.records().is_empty());
}
