use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;

use tf_version::config::{Config, log_path};
use tf_version::detector::{Detection, create_default_detector};
use tf_version::logging::{LogTarget, setup_logging};
use tf_version::version::Constraint;

#[derive(Parser)]
#[command(name = "tf-version")]
#[command(
    version,
    about = "Detect Terraform required_version from .tf files and pick a matching release"
)]
struct Cli {
    /// Directory containing the Terraform configuration
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Use this constraint instead of scanning the directory
    #[arg(long)]
    constraint: Option<String>,

    /// Print every matching release, newest first
    #[arg(long)]
    all: bool,

    /// Base URL of the releases site
    #[arg(long)]
    base_url: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to the data directory instead of stderr
    #[arg(long)]
    log_file: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(base_url) = cli.base_url.clone() {
        config.releases.base_url = base_url;
    }
    if let Some(level) = cli.log_level.clone() {
        config.log.level = level;
    }
    config.log.to_file |= cli.log_file;

    let log_file = log_path();
    let target = if config.log.to_file {
        LogTarget::File(&log_file)
    } else {
        LogTarget::Stderr
    };
    let _guard = setup_logging(&config.log.level, target)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli, config))
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let detector = create_default_detector(&config.releases);

    let detection = match &cli.constraint {
        Some(text) => {
            let constraint = Constraint::parse(text)?;
            detector.resolve(None, constraint).await?
        }
        None => {
            let detection = detector
                .detect(&cli.path)
                .await
                .with_context(|| format!("Failed to detect version in {}", cli.path.display()))?;
            report_source(&detection);
            detection
        }
    };

    if detection.matching.is_empty() {
        bail!("No published release satisfies \"{}\"", detection.constraint);
    }

    let mut stdout = std::io::stdout().lock();
    render(&detection, cli.all, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write the selected version, or every matching version with `all`
fn render(detection: &Detection, all: bool, out: &mut impl Write) -> std::io::Result<()> {
    if all {
        for version in &detection.matching {
            writeln!(out, "{version}")?;
        }
    } else if let Some(selected) = detection.selected() {
        // No trailing newline so `$(tf-version)` captures the bare version
        write!(out, "{selected}")?;
    }
    Ok(())
}

fn report_source(detection: &Detection) {
    eprintln!("{}", source_message(detection));
}

fn source_message(detection: &Detection) -> String {
    match &detection.source {
        Some(source) => {
            let name = source
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.path.display().to_string());
            format!("Found version specification in {name}")
        }
        None => "No version specification found, using latest.".to_string(),
    }
}
