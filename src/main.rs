use clap::Parser;

use shopfront::cli::{self, Cli};
use shopfront::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    tracing::debug!(command = ?cli.command, "starting");
    cli::run(cli)
}
