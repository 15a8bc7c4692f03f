//! restforge CLI entrypoint
//! Parses command-line arguments and dispatches to the use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use restforge::application::{
    AnalyzeRequest, AnalyzeUseCase, GenerateApiRequest, GenerateApiUseCase,
};
use restforge::core::Config;
use restforge::design::{DuplicatePolicy, LocationStrategy};
use restforge::generation::ArtifactOutcome;
use restforge::infrastructure::FileSystemOutputService;
use restforge::infrastructure::generation::GinEmitterFactory;
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "restforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate Gin handlers, an OpenAPI document and Go tests from Go source
    Generate {
        #[command(flatten)]
        common: CommonArgs,
        /// Output directory for generated files
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Directory whose templates override the built-in ones
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// OpenAPI info.title
        #[arg(long)]
        title: Option<String>,
        /// OpenAPI info.version
        #[arg(long)]
        api_version: Option<String>,
        /// Prefix for every route, e.g. /api/v1
        #[arg(long)]
        api_prefix: Option<String>,
        /// Go package of the generated files
        #[arg(long)]
        package: Option<String>,
        /// Also write a go.mod declaring this module path
        #[arg(long)]
        go_module: Option<String>,
    },
    /// Print the API that would be generated without writing anything
    Analyze {
        #[command(flatten)]
        common: CommonArgs,
        /// Print the designed endpoints as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct CommonArgs {
    /// Go file or directory to scan
    #[arg(default_value = ".")]
    source: PathBuf,
    /// Configuration file (TOML or YAML); defaults to ./restforge.toml when present
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keep endpoints that share a method and path instead of failing
    #[arg(long)]
    allow_duplicates: bool,
    /// Place id-like parameters in the path and scalars of GET/DELETE in the query
    #[arg(long)]
    infer_locations: bool,
    /// Function to leave out of the API (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,
}

impl CommonArgs {
    /// Load the configuration file and apply the shared flags on top of it.
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                Config::discover(&cwd).context("Failed to load restforge.toml")?
            }
        };

        if self.allow_duplicates {
            config.duplicates = DuplicatePolicy::Allow;
        }
        if self.infer_locations {
            config.parameter_locations = LocationStrategy::Inferred;
        }
        config.exclude_functions.extend(self.exclude.iter().cloned());

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            common,
            output_dir,
            template_dir,
            title,
            api_version,
            api_prefix,
            package,
            go_module,
        } => {
            let mut config = common.load_config()?;
            if let Some(dir) = template_dir {
                config.template_dir = Some(dir);
            }
            if let Some(title) = title {
                config.api_title = title;
            }
            if let Some(version) = api_version {
                config.api_version = version;
            }
            if let Some(prefix) = api_prefix {
                config.api_prefix = prefix;
            }
            if let Some(package) = package {
                config.package_name = package;
            }
            if let Some(module) = go_module {
                config.go_module = Some(module);
            }

            generate(common.source, output_dir, config).await?
        }
        Commands::Analyze { common, json } => {
            let config = common.load_config()?;
            analyze(common.source, config, json).await?
        }
    }
    Ok(())
}

/// Run the full pipeline and report every artifact
async fn generate(
    source: PathBuf,
    output_dir: Option<PathBuf>,
    config: Config,
) -> anyhow::Result<()> {
    let output_dir = config
        .resolve_output_dir(output_dir.as_deref())
        .context("Failed to resolve output directory")?;
    debug!(?config, "Effective configuration");

    let use_case = GenerateApiUseCase::new(
        Arc::new(FileSystemOutputService::new()),
        Arc::new(GinEmitterFactory::new()),
    );
    let response = use_case
        .execute(GenerateApiRequest {
            source,
            output_dir,
            config,
        })
        .await
        .context("API generation failed")?;

    println!(
        "Designed {} endpoint(s) from {} function(s)",
        response.model.len(),
        response.functions
    );
    for outcome in &response.report.outcomes {
        match outcome {
            ArtifactOutcome::Written { kind, path } => {
                println!("✅ {}: {}", kind.display_name(), path.display());
            }
            ArtifactOutcome::Failed { kind, error } => {
                println!("❌ {}: {}", kind.display_name(), error);
            }
        }
    }

    let failed = response.report.failures().count();
    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} artifact(s) failed",
            response.report.outcomes.len()
        );
    }

    info!(
        output_dir = %response.output_dir.display(),
        artifacts = response.report.written().count(),
        "Successfully generated API scaffolding"
    );
    Ok(())
}

/// Print the designed API
async fn analyze(source: PathBuf, config: Config, json: bool) -> anyhow::Result<()> {
    let response = AnalyzeUseCase::new()
        .execute(AnalyzeRequest { source, config })
        .await
        .context("API analysis failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response.model)?);
    } else {
        print!("{}", response.model);
        println!(
            "{} endpoint(s) from {} function(s)",
            response.model.len(),
            response.functions.len()
        );
    }
    Ok(())
}
