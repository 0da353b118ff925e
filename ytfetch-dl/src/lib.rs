//! Type-safe Rust bindings to the [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers: options, [`dl::probe`], [`dl::download`]
//! - [`preset`] - Capped-resolution video and MP3 presets
//! - [`progress`] - Progress events and the observer trait
//! - [`logger`] - `tracing` sink passed to yt-dlp as its logger
//!
//! ## Quick Start
//!
//! **MP3 preset**:
//! ```no_run
//! use std::sync::Arc;
//! use ytfetch_dl::{dl::download, preset::AudioPreset, progress::NoProgress};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! download("https://youtube.com/watch?v=example", AudioPreset::mp3().into(), Arc::new(NoProgress))?;
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use ytfetch_dl::dl::{download, DownloadOptions, OutputPaths, OutputTemplates};
//! use ytfetch_dl::progress::NoProgress;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestvideo[height<=720]+bestaudio".to_string()),
//!     paths: Some(OutputPaths::home(Path::new("videos"))),
//!     outtmpl: Some(OutputTemplates::simple("%(uploader)s/%(title)s.%(ext)s".to_string())),
//!     merge_output_format: Some("mkv".to_string()),
//!     ..Default::default()
//! }
//! .with_logger(false);
//!
//! download("https://youtube.com/watch?v=example", opts, Arc::new(NoProgress))?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod logger;
pub mod preset;
pub mod progress;

pub use error::{Error, Result};
