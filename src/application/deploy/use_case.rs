//! Deploy Use Case
//!
//! Orchestrates one deployment run:
//! 1. Honour the skip switch (no-op success)
//! 2. Resolve the destination repository
//! 3. Build the artifact set
//! 4. Publish each artifact with its descriptor, then every attachment
//! 5. Republish a freshly flattened descriptor when flattening is on
//!
//! Artifacts are processed strictly one at a time. The first failure aborts
//! the run; whatever was already published stays published.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::artifact_set::ArtifactSetBuilder;
use crate::application::flatten::{DescriptorFlattener, FlattenedDescriptor};
use crate::application::repository::RepositoryResolver;
use crate::application::ResolutionContext;
use crate::domain::entities::{ArtifactHandle, ArtifactMetadata, DeploymentRun, RunState};
use crate::domain::ports::{
    ArtifactPublisher, ArtifactResolver, DeployEvent, DeployEventSink, NoopEventSink,
};
use crate::domain::value_objects::{Checksum, Coordinate, RepositoryTarget, DESCRIPTOR_TYPE};
use crate::error::{ConfigurationError, DeployError, DeployResult};

use super::options::{DeployOptions, DeployProject};
use super::result::{DeployReport, PublishedArtifact};

/// Deploy use case - orchestrates the deployment flow
pub struct DeployUseCase {
    repositories: RepositoryResolver,
    flattener: DescriptorFlattener,
    resolver: Arc<dyn ArtifactResolver>,
    publisher: Arc<dyn ArtifactPublisher>,
}

impl DeployUseCase {
    pub fn new(
        repositories: RepositoryResolver,
        flattener: DescriptorFlattener,
        resolver: Arc<dyn ArtifactResolver>,
        publisher: Arc<dyn ArtifactPublisher>,
    ) -> Self {
        Self {
            repositories,
            flattener,
            resolver,
            publisher,
        }
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        options: &DeployOptions,
        project: &DeployProject,
        builder: &dyn ArtifactSetBuilder,
    ) -> DeployResult<DeployReport> {
        self.execute_with_events(options, project, builder, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        project: &DeployProject,
        builder: &dyn ArtifactSetBuilder,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult<DeployReport> {
        if options.skip {
            info!("Skipping artifact deployment");
            event_sink.on_event(DeployEvent::Skipped);
            return Ok(DeployReport::skipped());
        }

        let mut report = DeployReport::new();
        match self.run(options, project, builder, event_sink.as_ref(), &mut report) {
            Ok(()) => {
                advance(&mut report, RunState::Done);
                info!(published = report.published_count(), "deployment complete");
                event_sink.on_event(DeployEvent::Completed {
                    published_count: report.published_count(),
                });
                Ok(report)
            }
            Err(e) => {
                advance(&mut report, RunState::Failed);
                error!(
                    error = %e,
                    published = report.published_count(),
                    "deployment failed"
                );
                event_sink.on_event(DeployEvent::Failed {
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn run(
        &self,
        options: &DeployOptions,
        project: &DeployProject,
        builder: &dyn ArtifactSetBuilder,
        sink: &dyn DeployEventSink,
        report: &mut DeployReport,
    ) -> DeployResult<()> {
        if options.offline {
            return Err(ConfigurationError::Offline.into());
        }

        let repository = self.repositories.resolve(
            options.alt_repository.as_deref(),
            project.distribution.as_ref(),
        )?;
        info!(repository = %repository, "deploying to repository");
        advance(report, RunState::RepositoryResolved);
        report.repository = Some(repository.clone());
        sink.on_event(DeployEvent::RepositoryResolved {
            repository: repository.clone(),
        });

        let artifacts = builder.build()?;
        advance(report, RunState::ArtifactSetBuilt);
        sink.on_event(DeployEvent::ArtifactSetBuilt {
            artifact_count: artifacts.len(),
            attachment_count: project.attachments.len(),
        });

        let mut run = DeploymentRun::new(
            repository,
            artifacts,
            project.attachments.clone(),
            options.flatten_descriptors,
        );
        let flatten = run.flatten_descriptors();
        advance(report, RunState::Publishing);

        let (repository, artifacts, attachments) = run.parts_mut();
        let mut session = PublishSession {
            publisher: self.publisher.as_ref(),
            resolver: self.resolver.as_ref(),
            flattener: &self.flattener,
            repository,
            context: &project.context,
            sink,
            report: &mut *report,
            flatten,
            release: options.update_release_info,
            flattened: Vec::new(),
        };

        for (index, artifact) in artifacts.iter_mut().enumerate() {
            debug!(coordinate = %artifact.coordinate(), "deploying artifact");
            sink.on_event(DeployEvent::ArtifactStarted {
                index,
                coordinate: artifact.coordinate().clone(),
            });
            session.deploy_artifact(artifact, attachments)?;
        }
        drop(session);

        report.artifacts = run.artifacts().to_vec();
        Ok(())
    }
}

fn advance(report: &mut DeployReport, next: RunState) {
    debug_assert!(
        report.state.can_transition_to(next),
        "invalid run transition {} -> {}",
        report.state,
        next
    );
    debug!(from = %report.state, to = %next, "run state changed");
    report.state = next;
}

/// Per-run publishing state. Flattened descriptors live until the session
/// is dropped.
struct PublishSession<'a> {
    publisher: &'a dyn ArtifactPublisher,
    resolver: &'a dyn ArtifactResolver,
    flattener: &'a DescriptorFlattener,
    repository: &'a RepositoryTarget,
    context: &'a ResolutionContext,
    sink: &'a dyn DeployEventSink,
    report: &'a mut DeployReport,
    flatten: bool,
    release: bool,
    flattened: Vec<FlattenedDescriptor>,
}

impl PublishSession<'_> {
    fn deploy_artifact(
        &mut self,
        artifact: &mut ArtifactHandle,
        attachments: &[ArtifactHandle],
    ) -> DeployResult<()> {
        let descriptor_coordinate = artifact.coordinate().descriptor();
        let resolved_descriptor = self.resolver.resolve(
            &descriptor_coordinate,
            &self.context.remotes,
            &self.context.local,
        )?;

        let descriptor_file = if self.flatten {
            self.flatten_descriptor(&descriptor_coordinate, &resolved_descriptor)?
        } else {
            resolved_descriptor.clone()
        };

        if self.release {
            artifact.set_release(true);
        }

        if artifact.is_descriptor() {
            self.publish(&descriptor_file, artifact)?;
        } else {
            let metadata =
                ArtifactMetadata::project_descriptor(artifact.coordinate(), &descriptor_file);
            artifact.add_metadata(metadata);

            if let Some(file) = artifact.publishable_file().map(Path::to_path_buf) {
                self.publish(&file, artifact)?;
            } else if !attachments.is_empty() {
                self.publish_descriptor_only(artifact, &descriptor_file)?;
            } else {
                return Err(DeployError::NoPublishableContent {
                    coordinate: artifact.coordinate().clone(),
                });
            }
        }

        for attachment in attachments {
            self.publish_attachment(artifact, attachment)?;
        }

        if self.flatten {
            let refreshed = self.flatten_descriptor(&descriptor_coordinate, &resolved_descriptor)?;
            let mut descriptor = ArtifactHandle::new(descriptor_coordinate).with_file(&refreshed);
            descriptor.set_effective_version(artifact.effective_version());
            descriptor.set_release(artifact.is_release());
            self.publish(&refreshed, &mut descriptor)?;
        }

        Ok(())
    }

    /// Publish the descriptor under its own identity, then carry the
    /// effective version it was assigned back onto the primary.
    fn publish_descriptor_only(
        &mut self,
        artifact: &mut ArtifactHandle,
        descriptor_file: &Path,
    ) -> DeployResult<()> {
        info!(
            coordinate = %artifact.coordinate(),
            "No primary artifact to deploy, deploying descriptor and attached artifacts instead"
        );
        self.sink.on_event(DeployEvent::DescriptorOnlyFallback {
            coordinate: artifact.coordinate().clone(),
        });

        let coordinate = artifact.coordinate();
        let mut descriptor = ArtifactHandle::new(Coordinate::new(
            coordinate.group.clone(),
            coordinate.name.clone(),
            artifact.base_version(),
            DESCRIPTOR_TYPE,
        ))
        .with_file(descriptor_file);
        descriptor.set_release(artifact.is_release());

        let effective = self.publish(descriptor_file, &mut descriptor)?;
        artifact.set_effective_version(effective);
        Ok(())
    }

    fn publish_attachment(
        &mut self,
        primary: &ArtifactHandle,
        attachment: &ArtifactHandle,
    ) -> DeployResult<()> {
        let mut attachment = attachment.clone();
        if attachment.shares_build_with(primary) {
            attachment.set_effective_version(primary.effective_version());
        }

        let file = attachment
            .publishable_file()
            .map(Path::to_path_buf)
            .ok_or_else(|| DeployError::NoPublishableContent {
                coordinate: attachment.coordinate().clone(),
            })?;
        self.publish(&file, &mut attachment)?;
        Ok(())
    }

    fn flatten_descriptor(
        &mut self,
        coordinate: &Coordinate,
        descriptor_file: &Path,
    ) -> DeployResult<PathBuf> {
        let flattened = self.flattener.flatten(descriptor_file, self.context)?;
        let path = flattened.path().to_path_buf();
        self.sink.on_event(DeployEvent::DescriptorFlattened {
            coordinate: coordinate.clone(),
            path: path.clone(),
        });
        self.flattened.push(flattened);
        Ok(path)
    }

    /// Hand one file to the publisher and record the effective version it
    /// was assigned.
    fn publish(&mut self, file: &Path, artifact: &mut ArtifactHandle) -> DeployResult<String> {
        let effective = self
            .publisher
            .publish(file, artifact, self.repository, &self.context.local)?;
        artifact.set_effective_version(effective.clone());

        info!(
            coordinate = %artifact.coordinate(),
            file = %file.display(),
            effective_version = %effective,
            repository = %self.repository.id,
            "published"
        );
        self.sink.on_event(DeployEvent::Published {
            coordinate: artifact.coordinate().clone(),
            file: file.to_path_buf(),
            effective_version: effective.clone(),
        });
        let checksum = match Checksum::of_file(file) {
            Ok(checksum) => Some(checksum),
            Err(e) => {
                warn!(file = %file.display(), error = %e, "can't checksum published file");
                None
            }
        };
        self.report.published.push(PublishedArtifact {
            coordinate: artifact.coordinate().clone(),
            file: file.to_path_buf(),
            effective_version: effective.clone(),
            checksum,
        });

        Ok(effective)
    }
}
