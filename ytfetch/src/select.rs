//! Resolution selection with a bounded number of attempts.

use crate::console::Console;
use crate::resolution::{ResolutionMap, Selection};
use eyre::Result;
use std::io::{BufRead, Write};

/// Selection loop state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectState {
    Prompting { attempts_left: u8 },
    Accepted(Selection),
    Exhausted,
}

impl SelectState {
    pub fn new(attempts: u8) -> Self {
        if attempts == 0 {
            Self::Exhausted
        } else {
            Self::Prompting {
                attempts_left: attempts,
            }
        }
    }

    /// Apply one answer. Terminal states ignore further input.
    pub fn next(self, map: &ResolutionMap, answer: &str) -> Self {
        match self {
            Self::Prompting { attempts_left } => match map.find(answer) {
                Some(selection) => Self::Accepted(selection),
                None => Self::new(attempts_left.saturating_sub(1)),
            },
            terminal => terminal,
        }
    }
}

fn attempts_word(n: u8) -> &'static str {
    if n == 1 { "attempt" } else { "attempts" }
}

/// Show the available resolutions and ask until one matches or attempts run out.
///
/// Returns `None` when the budget is exhausted.
pub fn select_resolution<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    map: &ResolutionMap,
    attempts: u8,
) -> Result<Option<Selection>> {
    let choices = map.labels().join(", ");

    console.say("\nAvailable video resolutions:")?;
    for label in map.labels() {
        console.say(format_args!("  {label}"))?;
    }

    let mut state = SelectState::new(attempts);

    loop {
        match state {
            SelectState::Prompting { .. } => {
                let answer = console.ask("Enter the resolution (e.g., '720p', '1080p', '480p')")?;
                state = state.next(map, &answer);

                let left = match &state {
                    SelectState::Accepted(_) => continue,
                    SelectState::Prompting { attempts_left } => *attempts_left,
                    SelectState::Exhausted => 0,
                };

                tracing::debug!(answer, left, "invalid resolution");
                console.say(format_args!(
                    "Invalid resolution. {left} {} left.",
                    attempts_word(left)
                ))?;

                if left > 0 {
                    console.say(format_args!("Please choose one of: {choices}"))?;
                }
            }
            SelectState::Accepted(selection) => {
                tracing::info!(
                    format_id = selection.format_id,
                    height = selection.height,
                    "resolution selected"
                );
                return Ok(Some(selection));
            }
            SelectState::Exhausted => {
                console.say("Too many invalid attempts. Exiting.")?;
                return Ok(None);
            }
        }
    }
}
