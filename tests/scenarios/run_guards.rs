//! Runs that stop before anything is published.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use artifact_deploy::application::{DeployOptions, DeployProject, ProjectArtifacts};
use artifact_deploy::domain::entities::ArtifactHandle;
use artifact_deploy::error::{ConfigurationError, DeployError};
use artifact_deploy::infrastructure::JsonEventSink;

use crate::common::{descriptor, jar, publisher, use_case, LocalRepo};

fn widget(repo: &LocalRepo) -> ProjectArtifacts {
    let coordinate = jar("com.acme", "widget", "1.0");
    let file = repo.install_jar(&coordinate, &descriptor("com.acme", "widget", "1.0"));
    ProjectArtifacts::new(ArtifactHandle::new(coordinate).with_file(file))
}

fn run(options: DeployOptions) -> (Result<usize, DeployError>, usize) {
    let repo = LocalRepo::new();
    let builder = widget(&repo);
    let publisher = publisher();
    let result = use_case(repo.resolver(), publisher.clone())
        .execute(&options, &DeployProject::new(repo.context()), &builder)
        .map(|report| report.published_count());
    (result, publisher.records().len())
}

#[test]
fn skip_wins_over_everything() {
    let (result, published) = run(DeployOptions::new()
        .with_skip(true)
        .with_offline(true)
        .with_alt_repository("broken"));
    assert_eq!(result.unwrap(), 0);
    assert_eq!(published, 0);
}

#[test]
fn offline_refuses_to_deploy() {
    let (result, published) = run(DeployOptions::new()
        .with_offline(true)
        .with_alt_repository("releases::default::file:///srv/releases"));
    assert!(matches!(
        result,
        Err(DeployError::Configuration(ConfigurationError::Offline))
    ));
    assert_eq!(published, 0);
}

#[test]
fn project_without_distribution_needs_an_override() {
    let (result, published) = run(DeployOptions::new());
    assert!(matches!(
        result,
        Err(DeployError::Configuration(ConfigurationError::NoRepository))
    ));
    assert_eq!(published, 0);
}

#[test]
fn malformed_and_unknown_layout_overrides_are_rejected() {
    let (result, _) = run(DeployOptions::new().with_alt_repository("releases::file:///srv"));
    assert!(matches!(
        result,
        Err(DeployError::Configuration(
            ConfigurationError::InvalidRepositorySyntax { .. }
        ))
    ));

    let (result, _) = run(DeployOptions::new().with_alt_repository("releases::flat::file:///srv"));
    match result {
        Err(DeployError::Configuration(ConfigurationError::UnknownLayout { layout })) => {
            assert_eq!(layout, "flat")
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn json_events_trace_a_successful_run() {
    let repo = LocalRepo::new();
    let builder = widget(&repo);
    let captured = Captured::default();

    use_case(repo.resolver(), publisher())
        .execute_with_events(
            &DeployOptions::new().with_alt_repository("releases::default::file:///srv/releases"),
            &DeployProject::new(repo.context()),
            &builder,
            Arc::new(JsonEventSink::with_writer(captured.clone())),
        )
        .unwrap();

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    let events: Vec<String> = output
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["event"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(
        events,
        vec!["repository", "artifact_set", "item_start", "published", "complete"]
    );
}
