//! The download engine seam: metadata probe and per-item download.
//!
//! [`YtDlp`] is the real engine; tests substitute a recording fake.

use crate::config::Config;
use color_eyre::Section;
use eyre::{Result, WrapErr};
use std::path::PathBuf;
use std::sync::Arc;
use ytfetch_dl::dl::{self, DownloadOptions, MediaFormat, OutputPaths, ProbeInfo};
use ytfetch_dl::preset::{AudioPreset, VideoPreset};
use ytfetch_dl::progress::ProgressObserver;

/// One downloadable item as reported by the probe.
#[derive(Clone, Debug, Default)]
pub struct MediaItem {
    pub title: String,
    /// Page URL of the item; always set by yt-dlp for resolved entries
    pub url: Option<String>,
    pub formats: Vec<MediaFormat>,
}

impl From<ProbeInfo> for MediaItem {
    fn from(info: ProbeInfo) -> Self {
        Self {
            title: info.title,
            url: info.webpage_url,
            formats: info.formats.unwrap_or_default(),
        }
    }
}

/// Result of a metadata probe.
#[derive(Clone, Debug)]
pub enum Probe {
    Single(MediaItem),
    Playlist {
        title: String,
        entries: Vec<MediaItem>,
    },
}

impl From<ProbeInfo> for Probe {
    fn from(mut info: ProbeInfo) -> Self {
        match info.entries.take() {
            Some(entries) => Self::Playlist {
                title: info.title,
                entries: entries.into_iter().map(MediaItem::from).collect(),
            },
            None => Self::Single(info.into()),
        }
    }
}

/// Format choice for one download.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadKind {
    /// Best video no taller than `max_height`, with best audio
    Video { max_height: u32 },
    /// Best audio as MP3
    Audio,
}

/// A single dispatch: consumed by one [`Engine::download`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub kind: DownloadKind,
    pub output_dir: PathBuf,
}

impl DownloadRequest {
    /// yt-dlp options for this request, without logging or header settings.
    pub fn options(&self) -> DownloadOptions {
        let opts: DownloadOptions = match self.kind {
            DownloadKind::Video { max_height } => VideoPreset::capped(max_height).into(),
            DownloadKind::Audio => AudioPreset::mp3().into(),
        };

        DownloadOptions {
            paths: Some(OutputPaths::home(&self.output_dir)),
            ..opts
        }
    }
}

/// External media engine.
pub trait Engine {
    /// Fetch metadata without downloading media.
    fn probe(&self, url: &str) -> Result<Probe>;

    /// Download one item, blocking until it completes or fails.
    fn download(&self, request: &DownloadRequest) -> Result<()>;
}

/// yt-dlp embedded through Python.
pub struct YtDlp {
    user_agent: Option<String>,
    verbose: bool,
    observer: Arc<dyn ProgressObserver>,
}

impl YtDlp {
    pub fn new(config: &Config, observer: Arc<dyn ProgressObserver>) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            verbose: config.verbose,
            observer,
        }
    }

    fn configure(&self, opts: DownloadOptions) -> DownloadOptions {
        opts.with_user_agent(self.user_agent.clone())
            .with_logger(self.verbose)
    }
}

impl Engine for YtDlp {
    fn probe(&self, url: &str) -> Result<Probe> {
        tracing::info!(url, "probing");

        let opts = self.configure(DownloadOptions::default());

        let info = dl::probe(url, opts)
            .wrap_err_with(|| format!("failed to read metadata for {url}"))
            .suggestion("check that the URL is correct and publicly reachable")?;

        Ok(info.into())
    }

    fn download(&self, request: &DownloadRequest) -> Result<()> {
        tracing::info!(url = request.url, kind = ?request.kind, "downloading");

        let opts = self.configure(request.options());

        dl::download(&request.url, opts, self.observer.clone())
            .wrap_err_with(|| format!("failed to download {}", request.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(id: &str, height: Option<u32>) -> MediaFormat {
        MediaFormat {
            format_id: id.to_string(),
            height,
        }
    }

    fn info(title: &str, entries: Option<Vec<ProbeInfo>>) -> ProbeInfo {
        ProbeInfo {
            id: None,
            title: title.to_string(),
            webpage_url: Some(format!("https://example.com/{title}")),
            formats: entries.is_none().then(|| vec![format("137", Some(1080))]),
            entries,
        }
    }

    #[test]
    fn single_probe() {
        let probe = Probe::from(info("clip", None));

        assert!(matches!(
            probe,
            Probe::Single(MediaItem { title, url: Some(url), formats })
            if title == "clip" && url == "https://example.com/clip" && formats.len() == 1
        ));
    }

    #[test]
    fn playlist_probe_keeps_entry_order() {
        let probe = Probe::from(info(
            "list",
            Some(vec![info("a", None), info("b", None), info("c", None)]),
        ));

        match probe {
            Probe::Playlist { title, entries } => {
                assert_eq!(title, "list");
                let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
                assert_eq!(titles, ["a", "b", "c"]);
            }
            Probe::Single(_) => panic!("expected playlist"),
        }
    }

    #[test]
    fn empty_playlist_is_still_a_playlist() {
        let probe = Probe::from(info("empty", Some(Vec::new())));
        assert!(matches!(probe, Probe::Playlist { entries, .. } if entries.is_empty()));
    }

    #[test]
    fn video_request_options() {
        let request = DownloadRequest {
            url: "https://example.com/v".to_string(),
            kind: DownloadKind::Video { max_height: 720 },
            output_dir: PathBuf::from("/tmp/out"),
        };

        let opts = request.options();

        assert_eq!(
            opts.format.as_deref(),
            Some("bestvideo[height<=720]+bestaudio/best[height<=720]")
        );
        assert_eq!(opts.merge_output_format.as_deref(), Some("mp4"));
        assert!(matches!(
            opts.paths,
            Some(OutputPaths(Some(ref map))) if map.get("home").map(String::as_str) == Some("/tmp/out")
        ));
    }

    #[test]
    fn audio_request_options() {
        let request = DownloadRequest {
            url: "https://example.com/v".to_string(),
            kind: DownloadKind::Audio,
            output_dir: PathBuf::from("."),
        };

        let opts = request.options();

        assert_eq!(opts.format.as_deref(), Some("bestaudio/best"));
        assert!(matches!(
            opts.postprocessors.as_deref(),
            Some([pp]) if pp.preferredcodec.as_deref() == Some("mp3")
                && pp.preferredquality.as_deref() == Some("192")
        ));
    }
}
