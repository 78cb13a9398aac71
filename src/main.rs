use std::path::PathBuf;
use std::process::ExitCode;

use checker::{CheckError, DEFAULT_TEMPLATE, SourceArtifact};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::{CheckConfig, DEFAULT_ARTIFACT};
use render::BindingSummary;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Check(#[from] CheckError),
    #[error("categories file unreadable: {path}: {source}")]
    CategoriesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("categories file {path} is not a JSON array of strings: {source}")]
    CategoriesJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to render JSON report: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "blueprint-check",
    version,
    about = "Report which chart categories have active highlight bindings in a UI file"
)]
struct Cli {
    #[arg(long, env = "BLUEPRINT_ARTIFACT", default_value = DEFAULT_ARTIFACT)]
    artifact: PathBuf,

    #[arg(
        long,
        env = "BLUEPRINT_PATTERN",
        default_value = DEFAULT_TEMPLATE,
        help = "Binding template with one {category} slot"
    )]
    pattern: String,

    #[arg(long, help = "Expected category (repeatable); overrides all other sources")]
    category: Vec<String>,

    #[arg(long, help = "JSON array of category names")]
    categories_file: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Output machine-readable JSON")]
    json: bool,

    #[arg(long, default_value_t = false, help = "Also list every binding found")]
    bindings: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run one check; returns whether every category is fully supported.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let config = CheckConfig::resolve(cli)?;
    let artifact = SourceArtifact::load(&config.artifact)?;
    let report = checker::scan(&config.categories, &artifact, &config.pattern)?;

    let bindings = cli
        .bindings
        .then(|| BindingSummary::collect(&config.categories, &artifact, &config.pattern));

    if cli.json {
        println!("{}", render::render_json(&report, bindings.as_ref())?);
    } else {
        print!("{}", render::render_text(&report, bindings.as_ref()));
    }

    tracing::info!(
        artifact = %config.artifact.display(),
        categories_from = ?config.category_source,
        full = report.full_count(),
        total = report.total(),
        "check complete"
    );
    Ok(report.all_supported())
}
