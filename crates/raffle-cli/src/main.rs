//! Raffle entry point.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session with OS randomness
//! raffle
//!
//! # Reproducible ticket draws, with input failures logged to stderr
//! raffle --seed 42 --debug
//! ```

use std::{io, process::ExitCode};

use clap::Parser;
use raffle_cli::{Args, PromptError, Runtime, SystemEnv};
use raffle_core::SeededEnv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let result = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded ticket draws");
            Runtime::new(stdin, stdout, SeededEnv::with_seed(seed)).run()
        },
        None => Runtime::new(stdin, stdout, SystemEnv::new()).run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if args.debug {
                report(&err);
            }
            ExitCode::FAILURE
        },
    }
}

fn report(err: &PromptError) {
    match err {
        PromptError::Closed => tracing::error!("input stream closed before the raffle was stopped"),
        PromptError::Io(source) => tracing::error!(%source, "console I/O failed"),
        PromptError::UnknownSelection(label) => tracing::error!(label, "menu selection not recognised"),
    }
}
