//! Line-oriented prompt/answer I/O.
//!
//! Generic over the reader and writer so a whole session can be scripted in tests.

use eyre::{Result, bail};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Interactive terminal: asks questions on `output`, reads answers from `input`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt: ` and read one line, trimmed.
    ///
    /// Fails if input is closed, so loops that re-prompt cannot spin forever.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for: {prompt}");
        }

        let answer = line.trim().to_string();
        tracing::trace!(prompt, answer, "read answer");

        Ok(answer)
    }

    /// Print one line.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

impl<R, W> Console<R, W> {
    pub fn output(&self) -> &W {
        &self.output
    }
}
