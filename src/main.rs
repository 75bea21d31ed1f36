//! artifact-deploy CLI
//!
//! Usage: artifact-deploy <COMMAND>
//!
//! Commands:
//!   deploy           Publish the project described by a descriptor file
//!   find-and-deploy  Locate an artifact by coordinate and publish it
//!   flatten          Print the standalone form of a descriptor

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use artifact_deploy::application::{
    ArtifactSetBuilder, DeployOptions, DeployProject, DeployReport, InteractiveLookup,
    LookupMode, PartialCoordinate, ProjectArtifacts, ResolutionContext,
};
use artifact_deploy::config::Config;
use artifact_deploy::domain::ports::{ArtifactResolver, DeployEventSink, NoopEventSink};
use artifact_deploy::error::DeployError;
use artifact_deploy::infrastructure::JsonEventSink;
use artifact_deploy::presentation::telemetry::{init_tracing, level_for};
use artifact_deploy::presentation::{factory, AttachmentSpec, LocalProject};

/// artifact-deploy - publish build artifacts and flattened descriptors
#[derive(Parser, Debug)]
#[command(name = "artifact-deploy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false", global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Switches shared by every deploying command
#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Alternative repository as ID::LAYOUT::URL
    #[arg(long)]
    alt_repository: Option<String>,

    /// Publish the project's dependencies too
    #[arg(long)]
    include_dependencies: bool,

    /// Publish flattened descriptors
    #[arg(long)]
    flatten: bool,

    /// Mark published artifacts as releases
    #[arg(long)]
    release: bool,

    /// Skip the deployment entirely
    #[arg(long)]
    skip: bool,

    /// Refuse to deploy
    #[arg(long)]
    offline: bool,

    /// Local artifact cache
    #[arg(long)]
    local_cache: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Publish the project described by a descriptor file
    Deploy {
        /// Project descriptor
        #[arg(short, long, default_value = "pom.toml")]
        descriptor: PathBuf,

        /// Primary build output
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Secondary output as TYPE[:CLASSIFIER]=PATH (repeatable)
        #[arg(short, long = "attach")]
        attachments: Vec<AttachmentSpec>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Locate an artifact by coordinate and publish it
    FindAndDeploy {
        #[arg(long)]
        group: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "artifact-version")]
        version: Option<String>,

        #[arg(long = "type")]
        artifact_type: Option<String>,

        #[arg(long)]
        classifier: Option<String>,

        /// Read the artifact and its dependencies from its descriptor
        /// instead of resolving the transitive closure
        #[arg(long = "descriptor")]
        from_descriptor: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Print the standalone form of a descriptor
    Flatten {
        /// Descriptor to flatten
        #[arg(default_value = "pom.toml")]
        descriptor: PathBuf,

        /// Local artifact cache
        #[arg(long)]
        local_cache: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json, level_for(cli.verbose));

    match cli.command {
        Commands::Deploy {
            descriptor,
            file,
            attachments,
            run,
        } => cmd_deploy(&descriptor, file.as_deref(), &attachments, &run, cli.json),
        Commands::FindAndDeploy {
            group,
            name,
            version,
            artifact_type,
            classifier,
            from_descriptor,
            run,
        } => {
            let partial = PartialCoordinate {
                group,
                name,
                version,
                artifact_type,
                classifier,
            };
            let mode = if from_descriptor {
                LookupMode::Descriptor
            } else {
                LookupMode::Transitive
            };
            cmd_find_and_deploy(partial, mode, &run, cli.json)
        }
        Commands::Flatten {
            descriptor,
            local_cache,
        } => cmd_flatten(&descriptor, local_cache),
    }
}

/// Configuration for a project rooted at `project_root`, flags applied last
fn load_config(project_root: Option<&Path>, local_cache: Option<PathBuf>) -> Config {
    let (mut config, warnings) = Config::load_or_default(project_root);
    for warning in warnings {
        match &warning.suggestion {
            Some(suggestion) => warn!(
                file = %warning.file.display(),
                line = ?warning.line,
                "unknown config key '{}', did you mean '{}'?",
                warning.key,
                suggestion
            ),
            None => warn!(
                file = %warning.file.display(),
                line = ?warning.line,
                "unknown config key '{}'",
                warning.key
            ),
        }
    }
    if local_cache.is_some() {
        config.repositories.local = local_cache;
    }
    config
}

fn deploy_options(config: &Config, run: &RunArgs) -> DeployOptions {
    let mut options = config.deploy_options();
    if run.alt_repository.is_some() {
        options.alt_repository = run.alt_repository.clone();
    }
    options.include_dependencies |= run.include_dependencies;
    options.flatten_descriptors |= run.flatten;
    options.update_release_info |= run.release;
    options.skip |= run.skip;
    options.offline |= run.offline;
    options
}

fn cmd_deploy(
    descriptor: &Path,
    file: Option<&Path>,
    attachments: &[AttachmentSpec],
    run: &RunArgs,
    json: bool,
) -> Result<()> {
    let config = load_config(descriptor.parent(), run.local_cache.clone());
    let options = deploy_options(&config, run);
    let context = config.resolution_context();

    let project = LocalProject::load(factory::create_descriptor_store().as_ref(), descriptor)
        .with_context(|| format!("Failed to load project descriptor {}", descriptor.display()))?;
    let resolver: Arc<dyn ArtifactResolver> =
        Arc::new(project.resolver(factory::create_resolver()));
    let project = project
        .with_ancestors(&factory::create_flattener(Arc::clone(&resolver)), &context)
        .with_context(|| format!("Failed to merge parents of {}", descriptor.display()))?;

    let dependencies = if options.include_dependencies && !options.skip {
        project
            .dependencies(resolver.as_ref(), &context)
            .context("Failed to resolve project dependencies")?
    } else {
        Vec::new()
    };
    let builder = ProjectArtifacts::new(project.primary(file))
        .with_dependencies(dependencies)
        .include_dependencies(options.include_dependencies);
    let attachments = attachments.iter().map(|a| project.attachment(a)).collect();
    let deploy_project = project.deploy_project(context, attachments);

    run_deploy(resolver, &options, &deploy_project, &builder, json)
}

fn cmd_find_and_deploy(
    partial: PartialCoordinate,
    mode: LookupMode,
    run: &RunArgs,
    json: bool,
) -> Result<()> {
    let cwd = std::env::current_dir().ok();
    let config = load_config(cwd.as_deref(), run.local_cache.clone());
    let options = deploy_options(&config, run);
    let context = config.resolution_context();

    let resolver = factory::create_resolver();
    let mut builder = InteractiveLookup::new(
        partial,
        mode,
        Arc::clone(&resolver),
        factory::create_descriptor_store(),
        context.clone(),
    );
    if let Some(prompter) = factory::create_prompter(json) {
        builder = builder.with_prompter(prompter);
    }

    run_deploy(resolver, &options, &DeployProject::new(context), &builder, json)
}

fn run_deploy(
    resolver: Arc<dyn ArtifactResolver>,
    options: &DeployOptions,
    project: &DeployProject,
    builder: &dyn ArtifactSetBuilder,
    json: bool,
) -> Result<()> {
    let use_case = factory::create_deploy_use_case(resolver, factory::create_publisher());
    let sink: Arc<dyn DeployEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(NoopEventSink)
    };

    match use_case.execute_with_events(options, project, builder, sink) {
        Ok(report) => {
            print_report(&report, json)?;
            Ok(())
        }
        Err(e) => {
            print_hint(&e, json);
            Err(anyhow::Error::new(e).context("Deployment failed"))
        }
    }
}

fn print_report(report: &DeployReport, json: bool) -> Result<()> {
    if json {
        let line = serde_json::json!({
            "event": "report",
            "command": "deploy",
            "report": report,
        });
        println!("{}", line);
        return Ok(());
    }

    if report.skipped {
        println!("Deployment skipped");
        return Ok(());
    }
    if let Some(repository) = &report.repository {
        println!("Repository: {} ({})", repository.id, repository.url);
    }
    for published in &report.published {
        println!(
            "  {} -> {}{}",
            published.coordinate,
            published.effective_version,
            published
                .checksum
                .as_ref()
                .map(|c| format!("  {}", c))
                .unwrap_or_default()
        );
    }
    println!("Published {} file(s)", report.published_count());
    Ok(())
}

fn print_hint(error: &DeployError, json: bool) {
    if json {
        return;
    }
    if let Some(hint) = error.hint() {
        eprintln!("hint: {}", hint);
    }
}

fn cmd_flatten(descriptor: &Path, local_cache: Option<PathBuf>) -> Result<()> {
    let config = load_config(descriptor.parent(), local_cache);
    let context: ResolutionContext = config.resolution_context();
    let store = factory::create_descriptor_store();

    let flattener = factory::create_flattener(factory::create_resolver());
    let document = flattener
        .flatten_document(descriptor, &context)
        .with_context(|| format!("Failed to flatten {}", descriptor.display()))?;
    let rendered = store
        .render(&document)
        .context("Failed to render flattened descriptor")?;
    print!("{}", rendered);
    Ok(())
}
