use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::Commands;

const LOG_ENV: &str = "REVDIST_LOG";

#[derive(Parser)]
#[command(name = "revdist", version)]
#[command(
    about = "Measure how much files changed between two git revisions",
    long_about = None
)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    crate::cli_exec::handle_command(cli.command)
}

/// Logs go to stderr. `REVDIST_LOG` overrides the level picked by `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
