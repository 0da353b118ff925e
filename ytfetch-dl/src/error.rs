//! Error types for ytfetch-dl.

use pyo3::PyErr;
use thiserror::Error;

/// Errors raised while talking to yt-dlp.
#[derive(Debug, Error)]
pub enum Error {
    /// Python exception raised by yt-dlp (extraction, network, post-processing)
    #[error(transparent)]
    Python(#[from] PyErr),

    /// yt-dlp finished without raising but reported a failure code
    #[error("yt-dlp returned code {code} for {url}")]
    Incomplete { url: String, code: i64 },
}

/// Result type alias for ytfetch-dl operations.
pub type Result<T> = std::result::Result<T, Error>;
