//! Resolved run configuration.
//!
//! Holds the validated form of [`Cli`]; flag parsing stays in cli.rs.

use crate::cli::Cli;
use eyre::{Result, ensure};
use std::path::PathBuf;

/// Attempts allowed when choosing a resolution.
pub const DEFAULT_ATTEMPTS: u8 = 3;

/// Settings for one interactive run.
#[derive(Clone, Debug)]
pub struct Config {
    /// `User-Agent` override for every engine request
    pub user_agent: Option<String>,
    /// yt-dlp verbose output
    pub verbose: bool,
    /// Resolution selection budget, at least 1
    pub attempts: u8,
    /// Where new folders are created and files are saved
    pub directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: None,
            verbose: false,
            attempts: DEFAULT_ATTEMPTS,
            directory: PathBuf::from("."),
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = eyre::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        ensure!(cli.attempts > 0, "--attempts must be at least 1");
        ensure!(
            cli.directory.is_dir(),
            "directory does not exist: {:?}",
            cli.directory.display()
        );

        let user_agent = cli.user_agent.filter(|ua| !ua.trim().is_empty());

        Ok(Self {
            user_agent,
            verbose: cli.verbose,
            attempts: cli.attempts,
            directory: cli.directory,
        })
    }
}
