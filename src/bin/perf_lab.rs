use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use perf_lab::algorithms::growable_buffer::{BufferSimulation, DEFAULT_INITIAL_CAPACITY};
use perf_lab::error::SelfCheckError;
use perf_lab::utils::self_check;

#[derive(Parser)]
#[command(
    name = "perf-lab",
    about = "Run the algorithm self-checks and a buffer resizing demo",
    version
)]
struct Cli {
    /// Number of items to insert in the resizing demo
    #[arg(long, default_value_t = 6)]
    items: usize,
    /// Starting capacity for the resizing demo (raised to at least 1)
    #[arg(long = "initial-capacity", default_value_t = DEFAULT_INITIAL_CAPACITY)]
    initial_capacity: usize,
}

/// Logs the outcome and reports whether the process should exit successfully.
fn report(outcome: &Result<BufferSimulation, SelfCheckError>) -> bool {
    match outcome {
        Ok(demo) => {
            let stats = demo.stats();
            info!(
                items = demo.contents().len(),
                resizes = stats.resizes,
                total_copies = stats.total_copies,
                "DONE"
            );
            true
        }
        Err(e) => {
            error!("{e}");
            false
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if report(&self_check::run(cli.items, cli.initial_capacity)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
