//! ytfetch CLI - interactive video, audio and playlist downloader

use clap::Parser;
use eyre::Result;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use ytfetch::cli::{Cli, run_cli};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    run_cli(cli)
}
