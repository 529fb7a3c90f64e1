//! techcolor CLI entry point

use anyhow::{Context, Result};
use clap::Parser;

use techcolor::cli::Cli;

/// Log to stderr at info level so the run summary is shown without mixing
/// with anything written to stdout.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    init_logging();

    let summary = techcolor::transform_file(&config).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            config.input.display(),
            config.output.display()
        )
    })?;
    tracing::info!("{}", summary.message());

    Ok(())
}
