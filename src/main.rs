use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use embroidery_tracker::adapters::LocalFileReportStorage;
use embroidery_tracker::cli::{self, Prompter, StartupOptions};
use embroidery_tracker::config::AppConfig;
use embroidery_tracker::domain::foundation::ValidationError;
use embroidery_tracker::domain::session::capture::{validate_positive, validate_text};
use embroidery_tracker::logging::init_logging;

#[derive(Parser)]
#[command(name = "embroidery-tracker", about = "Log embroidery sessions and track a weekly goal")]
#[command(version)]
struct Cli {
    /// Your name (skips the name prompt)
    #[arg(long, value_parser = parse_name)]
    name: Option<String>,

    /// Weekly goal in hours (skips the goal prompt)
    #[arg(long, value_parser = parse_goal)]
    goal: Option<f64>,

    /// Where to save the report (overrides EMBROIDERY_TRACKER__REPORT__PATH)
    #[arg(long)]
    report_path: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_name(raw: &str) -> Result<String, ValidationError> {
    validate_text("name", raw)
}

fn parse_goal(raw: &str) -> Result<f64, ValidationError> {
    validate_positive("goal", raw)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = AppConfig::load()
        .context("Failed to load configuration")?
        .with_report_path(args.report_path)
        .validated()
        .context("Invalid configuration")?;

    init_logging(&config.logging, args.verbose).context("Failed to initialize logging")?;

    let storage = LocalFileReportStorage::new(config.report.path.clone());
    let options = StartupOptions {
        name: args.name,
        goal: args.goal,
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    cli::run(&mut prompter, options, &config, &storage).context("Console I/O failed")?;

    Ok(())
}
