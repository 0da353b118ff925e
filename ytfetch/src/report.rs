//! Terminal rendering of download progress.

use std::io::{IsTerminal, Write};
use ytfetch_dl::progress::{ProgressEvent, ProgressObserver};

/// Prints progress to stdout.
///
/// On a terminal the current line is rewritten while downloading; redirected output
/// gets one plain line per event.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleReporter {
    terminal: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            terminal: std::io::stdout().is_terminal(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ConsoleReporter {
    fn on_event(&self, event: &ProgressEvent) {
        let mut stdout = std::io::stdout().lock();
        let text = render(event, self.terminal);

        if let Err(e) = stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
        {
            tracing::warn!(error = %e, "failed to print progress");
        }
    }
}

/// Bytes written for `event`. `\r` and erase-to-end only when `terminal` is set.
pub fn render(event: &ProgressEvent, terminal: bool) -> String {
    let line = describe(event);

    match (terminal, event) {
        (true, ProgressEvent::Progress { .. }) => format!("\r{line}\x1b[K"),
        (true, ProgressEvent::Done { .. }) => format!("\r{line}\x1b[K\n"),
        (false, _) => format!("{line}\n"),
    }
}

/// One-line description of an event.
pub fn describe(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::Progress {
            percent,
            speed,
            filename,
        } => {
            let percent = percent.map_or_else(|| "?".to_string(), |p| format!("{p:.1}%"));
            let speed = speed.map_or_else(|| "unknown speed".to_string(), format_rate);
            format!("Downloading: {percent} of {filename} at {speed}")
        }
        ProgressEvent::Done { filename } => format!("Downloaded: {filename}"),
    }
}

/// Bytes per second in binary units, e.g. `1.50MiB/s`.
pub fn format_rate(bytes_per_sec: f64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = bytes_per_sec.max(0.0);
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2}{}/s", UNITS[unit])
}
