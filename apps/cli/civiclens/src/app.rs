//! Top-level flow: startup, then either the interactive session or one request.

use crate::cli::Cli;
use crate::error::CivicLensError;
use crate::oneshot;
use crate::session::Session;
use crate::startup::{StartupOptions, prepare};

use std::io::{BufRead, Write};

use log::{error, info};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_STARTUP_FAILURE: u8 = 1;
pub const EXIT_REQUEST_FAILURE: u8 = 2;

/// Run the application against the given streams and return the exit code.
///
/// If startup fails the error is the only thing written, to `errors`; no
/// header or pane reaches `output`.
pub async fn run<R, W, E>(cli: &Cli, input: R, mut output: W, mut errors: E, styled: bool) -> u8
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let context = match prepare(&StartupOptions::from(cli)) {
        Ok(context) => context,
        Err(e) => {
            report(&mut errors, &e);
            return EXIT_STARTUP_FAILURE;
        }
    };

    let show_busy = !cli.no_spinner;

    match &cli.command {
        Some(command) => {
            info!("One-shot {} request", command.mode().as_str());
            match oneshot::run(
                &context.dispatcher,
                command,
                &mut output,
                &mut errors,
                show_busy,
            )
            .await
            {
                Ok(true) => EXIT_SUCCESS,
                Ok(false) => EXIT_REQUEST_FAILURE,
                Err(e) => {
                    report(&mut errors, &e);
                    EXIT_REQUEST_FAILURE
                }
            }
        }
        None => {
            info!("Starting interactive session");
            let mut session = Session::new(input, output, &context.dispatcher)
                .with_style(styled)
                .with_busy_indicator(show_busy);

            match session.run().await {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    report(&mut errors, &e);
                    EXIT_STARTUP_FAILURE
                }
            }
        }
    }
}

fn report<E: Write>(errors: &mut E, e: &CivicLensError) {
    error!("{e}");
    // Nowhere left to report a failed write to stderr.
    let _ = writeln!(errors, "Error: {e}");
    let _ = errors.flush();
}
