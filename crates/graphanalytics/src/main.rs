//! graphanalytics CLI - blocking analysis of a package dependency graph.
//!
//! Loads a graph description and prints four ranked reports: the unresolved
//! dependencies blocking the most packages and the SRPMs closest to being
//! buildable, each at one hop and transitively.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use graphanalytics::{AnalysisConfig, DEFAULT_MAX_RESULTS, Report, ReportLine, analyze_file};

mod logging;

use logging::LogLevel;

/// graphanalytics: print analytics of a given dependency graph.
#[derive(Parser)]
#[command(name = "graphanalytics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph file to analyze
    #[arg(short, long)]
    input: PathBuf,

    /// Number of results to print per report (0 prints all)
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (overrides -v)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the reports as JSON on stdout instead of logging them
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let level = cli
        .log_level
        .unwrap_or_else(|| LogLevel::from_verbosity(cli.verbose));
    logging::init(level, cli.log_file.as_deref(), cli.json)?;

    let config = AnalysisConfig::new(cli.max_results);
    let analysis = analyze_file(&cli.input, &config).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    for report in &analysis.reports {
        emit_report(report);
    }

    Ok(())
}

/// Log a report: titles and summaries at info, per-value details at debug.
fn emit_report(report: &Report) {
    tracing::info!("");
    for line in report.banner().into_iter().chain(report.lines()) {
        match line {
            ReportLine::Banner(text) | ReportLine::Summary(text) => tracing::info!("{text}"),
            ReportLine::Detail(text) => tracing::debug!("{text}"),
        }
    }
}
