use civiclens::app::{self, EXIT_STARTUP_FAILURE};
use civiclens::cli::Cli;
use civiclens::logger::{default_log_dir, initialize as LoggerInitialize};

use std::fs::create_dir_all;
use std::io::{IsTerminal, stderr, stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);

    // Ensure log directory exists
    if let Err(e) = create_dir_all(&log_dir) {
        eprintln!(
            "Error: Failed to create log directory {}: {e}",
            log_dir.display()
        );
        return ExitCode::from(EXIT_STARTUP_FAILURE);
    }

    // Initialize logger FIRST
    if let Err(e) = LoggerInitialize(&log_dir, cli.verbose) {
        eprintln!("Error: {e}");
        return ExitCode::from(EXIT_STARTUP_FAILURE);
    }

    info!("CivicLens starting");
    info!("Log directory: {}", log_dir.display());

    let styled = stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    // stderr stays unlocked: the spinner draws to it from its own thread.
    let code = app::run(&cli, stdin().lock(), stdout().lock(), stderr(), styled).await;

    info!("CivicLens exiting with code {code}");
    ExitCode::from(code)
}
