//! carryover - carry change log comments over to a regenerated commit message

mod cli;
mod exit_codes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use carryover_core::CarryoverError;

use cli::{output, Cli, StrictModeError};

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose);

    let code = match cli.execute() {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            output::error(&format!("{:#}", err));
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<StrictModeError>().is_some() {
        return exit_codes::DIAGNOSTICS;
    }

    match err.downcast_ref::<CarryoverError>() {
        Some(CarryoverError::Config(_)) => exit_codes::CONFIG_ERROR,
        Some(CarryoverError::Message(_)) | Some(CarryoverError::Io(_)) => exit_codes::INPUT_ERROR,
        _ if err.downcast_ref::<std::io::Error>().is_some() => exit_codes::INPUT_ERROR,
        _ => exit_codes::ERROR,
    }
}

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG (default: warn, debug with --verbose)
/// - File: always debug-level JSON to ~/.carryover/logs/
fn init_tracing(verbose: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_level = if verbose { "debug" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "carryover.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(console_filter),
        )
        .init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".carryover").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
