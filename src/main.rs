//! Sprintscope - per-engineer active-sprint issue reporter
//!
//! A CLI tool that resolves the active sprint on a Jira board and reports,
//! for each configured engineer, the issues still open or recently updated.
//!
//! Exit codes:
//!   0 - Report produced (individual engineers may still carry errors)
//!   1 - Configuration error, or the report could not be written
//!   2 - Tracker unreachable while resolving the sprint
//!   3 - No active sprint on the configured board

mod aggregate;
mod cli;
mod config;
mod error;
mod identity;
mod jira;
mod jql;
mod models;
mod report;
mod search;
mod sprint;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::Config;
use error::RunError;
use jira::JiraClient;
use models::SprintReport;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

const EXIT_CONFIG: i32 = 1;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        return;
    }

    // Initialize logging
    init_logging(&args);

    info!("Sprintscope v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the report
    match run_report(&args).await {
        Ok(report) => {
            if let Err(e) = emit_report(&args, &report) {
                error!("Failed to emit report: {:#}", e);
                eprintln!("Error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Handle --init-config: generate a starter sprintscope.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new("sprintscope.toml");

    if path.exists() {
        eprintln!("sprintscope.toml already exists. Remove it first or edit it manually.");
        std::process::exit(EXIT_CONFIG);
    }

    std::fs::write(path, Config::scaffold_toml()).context("Failed to write sprintscope.toml")?;

    println!("Created sprintscope.toml with starter settings.");
    println!("   Edit it to set your Jira site, credential, board, and engineers.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so the report itself stays clean on stdout.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load configuration, build the client, run the aggregation.
async fn run_report(args: &Args) -> Result<SprintReport, RunError> {
    let mut config = Config::load(&args.config)?;
    config.merge_with_args(args);
    config.validate()?;

    debug!(
        "Board {} on {}, {} engineer(s), recency window {} day(s)",
        config.board.board_id,
        config.jira.base_url,
        config.engineers.len(),
        config.board.recent_days
    );

    let client = JiraClient::new(&config.jira, config.network.timeout_seconds);
    aggregate::run(&client, &config).await
}

/// Render the report and write it to stdout or the requested file.
fn emit_report(args: &Args, report: &SprintReport) -> Result<()> {
    let output = match args.format {
        OutputFormat::Text => report::generate_text_report(report),
        OutputFormat::Json => report::generate_json_report(report)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}
