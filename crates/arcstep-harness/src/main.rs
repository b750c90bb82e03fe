#![forbid(unsafe_code)]

//! Headless step-indicator harness.
//!
//! # Running
//!
//! ```sh
//! cargo run -p arcstep-harness -- --taps 10 --interval-ms 5 --bars
//! ARCSTEP_LOG=debug cargo run -p arcstep-harness
//! ```

use std::io;
use std::process::ExitCode;

use arcstep_harness::args::USAGE;
use arcstep_harness::{Args, run};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ARCSTEP_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    init_tracing();
    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(records) => {
            tracing::debug!(steps = records.len(), "harness finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to write report");
            ExitCode::FAILURE
        }
    }
}
