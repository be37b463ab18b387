//! CLI entry point for sync3c.

use std::process::ExitCode;

use clap::Parser;

mod app;
mod cli;

use app::exit::ProcessExit;
use cli::Args;

// Work is strictly sequential, so a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    match app::run(args).await {
        Ok(outcome) => outcome.into(),
        Err(error) => {
            eprintln!("error: {error:#}");
            ProcessExit::Failure.into()
        }
    }
}
