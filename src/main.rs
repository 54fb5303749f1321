//! CLI entry point for the brand rating report tool.
//!
//! Reads one or more product CSV files and prints the average rating per
//! brand. Skipped rows and unreadable files are logged to stderr; the table
//! goes to stdout.

use anyhow::Result;
use brand_rating::{
    analyzers::analyzer::make_report, config::ReportKind, error::ReportError,
    output::print_table,
};
use clap::Parser;
use std::ffi::OsStr;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "brand_rating")]
#[command(about = "Average product ratings per brand from CSV files", long_about = None)]
struct Cli {
    /// Input CSV files, read in the given order
    #[arg(long, value_name = "FILE", num_args = 1.., required = true)]
    files: Vec<String>,

    /// Report to build; only "average-rating" is available
    #[arg(long)]
    report: String,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let _file_guard = init_logging()?;

    let cli = Cli::parse();

    let kind = match cli.report.parse::<ReportKind>() {
        Ok(kind) => kind,
        Err(e) => return Ok(fail(e)),
    };
    debug!(report = %kind, files = cli.files.len(), "Starting report");

    match kind {
        ReportKind::AverageRating => match make_report(cli.files.as_slice()) {
            Ok(report) => {
                print_table(&report.rows);
                Ok(ExitCode::SUCCESS)
            }
            // already logged by make_report
            Err(e @ ReportError::NoData) => Ok(ExitCode::from(e.exit_code())),
            Err(e) => Ok(fail(e)),
        },
    }
}

fn fail(e: ReportError) -> ExitCode {
    error!("{}", e);
    ExitCode::from(e.exit_code())
}

/// Logging setup: stderr for diagnostics, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set.
fn init_logging() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("brand_rating.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
