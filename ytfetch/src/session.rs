//! One interactive run: input, probe, resolution choice, dispatch.

use crate::config::Config;
use crate::console::Console;
use crate::dispatch::dispatch;
use crate::engine::{DownloadKind, Engine};
use crate::input::{self, Mode};
use crate::resolution::ResolutionMap;
use crate::select::select_resolution;
use eyre::Result;
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// How a run ended without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed { downloads: usize },
    /// Mode was neither video nor mp3; nothing was created or downloaded
    InvalidMode,
    /// Resolution attempts used up; nothing was downloaded
    AttemptsExhausted,
    /// The probe listed no format with a height
    NoResolutions,
}

impl Outcome {
    /// 0 for a completed run, 1 for any abort.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Completed { .. } => 0,
            Self::InvalidMode | Self::AttemptsExhausted | Self::NoResolutions => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

/// Run the whole interactive flow against `engine`.
///
/// Engine failures propagate as errors; user-input dead ends become an [`Outcome`].
pub fn run<E: Engine, R: BufRead, W: Write>(
    engine: &E,
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<Outcome> {
    let url = input::ask_url(console)?;

    let Some(mode) = input::ask_mode(console)? else {
        console.say("Invalid download type. Please run the program again.")?;
        return Ok(Outcome::InvalidMode);
    };

    let output_dir = input::ask_output_dir(console, &config.directory)?;

    let probe = engine.probe(&url)?;

    let kind = match mode {
        Mode::Audio => DownloadKind::Audio,
        Mode::Video => {
            let resolutions = ResolutionMap::from_probe(&probe);

            if resolutions.is_empty() {
                console.say("No video resolutions available.")?;
                return Ok(Outcome::NoResolutions);
            }

            match select_resolution(console, &resolutions, config.attempts)? {
                Some(selection) => DownloadKind::Video {
                    max_height: selection.height,
                },
                None => return Ok(Outcome::AttemptsExhausted),
            }
        }
    };

    let downloads = dispatch(engine, console, &probe, &url, kind, &output_dir)?;

    Ok(Outcome::Completed { downloads })
}
