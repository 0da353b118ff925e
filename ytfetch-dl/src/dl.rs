//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters,
//! plus the two operations the CLI needs: a metadata-only [`probe`] and a blocking [`download`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use ytfetch_dl::dl::{download, probe, DownloadOptions};
//! use ytfetch_dl::preset::AudioPreset;
//! use ytfetch_dl::progress::NoProgress;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let info = probe("https://youtube.com/watch?v=example", DownloadOptions::default())?;
//! println!("Found: {}", info.title);
//! download(&info.webpage_url.unwrap(), AudioPreset::mp3().into(), Arc::new(NoProgress))?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::logger::EngineLogger;
use crate::progress::{ProgressObserver, progress_hook};
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::PyList;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }
}

/// Download directories (`home`).
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputPaths(pub Option<HashMap<String, String>>);

impl OutputPaths {
    /// Create with only a home directory.
    pub fn home(home: &Path) -> Self {
        Self::default().with_home(home)
    }

    pub fn with_home(self, home: &Path) -> Self {
        self.with_key("home".to_string(), home)
    }

    fn with_key(self, key: String, value: &Path) -> Self {
        let mut inner = self.0.unwrap_or_default();
        inner.insert(key, value.to_string_lossy().to_string());
        Self(Some(inner))
    }
}

/// Extra HTTP headers sent with every request (`http_headers`).
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct HttpHeaders(pub HashMap<String, String>);

impl HttpHeaders {
    pub fn user_agent(value: String) -> Self {
        Self(HashMap::from([("User-Agent".to_string(), value)]))
    }
}

/// Post-download operation: `key` (e.g., `"FFmpegExtractAudio"`), optional codec and quality.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
    pub preferredquality: Option<String>,
}

/// yt-dlp configuration passed to `YoutubeDL(params)`.
///
/// Used for both [`probe`] and [`download`]. `progress_hooks` is not a field: [`download`]
/// installs the hook itself from the observer it is given.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub paths: Option<OutputPaths>,
    pub outtmpl: Option<OutputTemplates>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub merge_output_format: Option<String>,
    pub http_headers: Option<HttpHeaders>,
    pub logger: Option<EngineLogger>,
    pub verbose: Option<bool>,
    pub noprogress: Option<bool>,
}

impl DownloadOptions {
    /// Send `User-Agent: value` with every request.
    pub fn with_user_agent(mut self, value: Option<String>) -> Self {
        self.http_headers = value.map(HttpHeaders::user_agent);
        self
    }

    /// Route yt-dlp messages to `tracing` instead of stdout.
    pub fn with_logger(mut self, verbose: bool) -> Self {
        self.logger = Some(EngineLogger);
        self.verbose = Some(verbose);
        self
    }
}

/// One encoded stream listed by the extractor.
#[derive(Clone, Debug, FromPyObject)]
#[pyo3(from_item_all)]
pub struct MediaFormat {
    /// Extractor-assigned identifier (e.g., `"137"`)
    pub format_id: String,
    /// Vertical resolution; `None` for audio-only streams
    pub height: Option<u32>,
}

/// Metadata summary returned by [`probe`].
///
/// Built by `dl.py` from the sanitized info dict. A playlist has `entries` set and
/// `formats` unset; a single item is the other way round.
#[derive(Clone, Debug, FromPyObject)]
#[pyo3(from_item_all)]
pub struct ProbeInfo {
    pub id: Option<String>,
    pub title: String,
    pub webpage_url: Option<String>,
    pub formats: Option<Vec<MediaFormat>>,
    pub entries: Option<Vec<ProbeInfo>>,
}

fn load_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    PyModule::from_code(py, c_str!(include_str!("./dl.py")), c"dl.py", c"dl")
}

/// Fetch metadata for a URL without downloading any media.
///
/// Uses `extract_info(url, download=False)`. Playlist entries are resolved in full so each
/// carries its own URL and format list.
pub fn probe(url: &str, opts: DownloadOptions) -> Result<ProbeInfo> {
    let info = Python::attach(|py| -> PyResult<ProbeInfo> {
        let module = load_module(py)?;
        let params = opts.into_pyobject(py)?;

        module.getattr("probe")?.call1((url, params))?.extract()
    })?;

    tracing::debug!(
        url,
        title = info.title,
        entries = info.entries.as_ref().map(Vec::len),
        "probed"
    );

    Ok(info)
}

/// Download a single URL, blocking until yt-dlp returns.
///
/// `observer` receives progress events synchronously from yt-dlp's progress hook.
pub fn download(
    url: &str,
    opts: DownloadOptions,
    observer: Arc<dyn ProgressObserver>,
) -> Result<()> {
    let code = Python::attach(|py| -> PyResult<i64> {
        let module = load_module(py)?;
        let params = opts.into_pyobject(py)?;

        let hooks = PyList::new(py, [progress_hook(py, observer)?])?;
        params.set_item("progress_hooks", hooks)?;

        module.getattr("download")?.call1((url, params))?.extract()
    })?;

    if code != 0 {
        return Err(Error::Incomplete {
            url: url.to_string(),
            code,
        });
    }

    Ok(())
}
