//! CLI argument definitions using clap.

use crate::config::{Config, DEFAULT_ATTEMPTS};
use crate::console::Console;
use crate::engine::YtDlp;
use crate::report::ConsoleReporter;
use crate::session;
use clap::Parser;
use eyre::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Everything else is asked interactively.
#[derive(Debug, Parser)]
#[command(name = "ytfetch")]
#[command(about = "Download a video, an MP3 or a whole playlist, interactively")]
#[command(version)]
pub struct Cli {
    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Show yt-dlp debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Attempts allowed when choosing a resolution
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: u8,

    /// Base directory for new folders and downloads
    #[arg(short = 'C', long, default_value = ".")]
    pub directory: PathBuf,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<ExitCode> {
    tracing::debug!(?cli, "parsed arguments");

    let config = Config::try_from(cli)?;
    let engine = YtDlp::new(&config, Arc::new(ConsoleReporter::new()));
    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout());

    let outcome = session::run(&engine, &mut console, &config)?;
    tracing::info!(?outcome, "run finished");

    Ok(outcome.into())
}
