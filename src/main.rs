//! CLI entry point for road map generation

use clap::Parser;
use roadtile::io::cli::{Cli, MapProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> roadtile::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let mut processor = MapProcessor::new(cli);
    processor.process()
}
