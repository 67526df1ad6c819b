mod args;
mod cli;
#[cfg(feature = "tui")]
mod screen;
#[cfg(feature = "tui")]
mod tui;

use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let args = args::Args::parse().unwrap_or_else(|e| e.exit());
    cli::run(args)
}
