//! Logging sink handed to yt-dlp through the `logger` parameter.
//!
//! yt-dlp only needs an object with `debug`, `info`, `warning` and `error` methods.
//! [`EngineLogger`] is such an object, implemented in Rust, and turns every call into a
//! `tracing` event with target `yt_dlp`. Nothing touches Python's global `logging` setup.

use pyo3::prelude::*;

/// Forwards yt-dlp log calls to `tracing`.
#[pyclass(frozen)]
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineLogger;

#[pymethods]
impl EngineLogger {
    /// yt-dlp routes both verbose output (`[debug] ` prefix) and regular screen
    /// messages through `debug`.
    fn debug(&self, msg: &str) {
        match msg.strip_prefix("[debug] ") {
            Some(msg) => tracing::debug!(target: "yt_dlp", "{msg}"),
            None => tracing::info!(target: "yt_dlp", "{msg}"),
        }
    }

    fn info(&self, msg: &str) {
        tracing::info!(target: "yt_dlp", "{msg}");
    }

    fn warning(&self, msg: &str) {
        tracing::warn!(target: "yt_dlp", "{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: "yt_dlp", "{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_yt_dlp_levels() {
        Python::attach(|py| {
            let logger = Bound::new(py, EngineLogger).unwrap();

            for level in ["debug", "info", "warning", "error"] {
                logger.call_method1(level, ("message",)).unwrap();
            }
            logger.call_method1("debug", ("[debug] verbose",)).unwrap();
        });
    }
}
