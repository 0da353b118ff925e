//! Download presets: capped-resolution video and transcoded audio.
//!
//! ```no_run
//! use std::sync::Arc;
//! use ytfetch_dl::{dl::download, preset::VideoPreset, progress::NoProgress};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! download("https://youtube.com/watch?v=example", VideoPreset::capped(720).into(), Arc::new(NoProgress))?;
//! # Ok(())
//! # }
//! ```
//!
//! **Output:** `title.ext` in the current directory unless `paths` is set.

use crate::dl::{DownloadOptions, OutputTemplates, PostProcessor};

/// Default output template: `title.ext`.
pub const TITLE_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Best video at or below `max_height`, merged with best audio into mp4.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VideoPreset {
    pub max_height: u32,
}

impl VideoPreset {
    pub fn capped(max_height: u32) -> Self {
        Self { max_height }
    }

    /// yt-dlp format expression, falling back to a pre-muxed stream under the same cap.
    pub fn format(&self) -> String {
        let h = self.max_height;
        format!("bestvideo[height<={h}]+bestaudio/best[height<={h}]")
    }
}

impl From<VideoPreset> for DownloadOptions {
    fn from(preset: VideoPreset) -> Self {
        Self {
            format: Some(preset.format()),
            outtmpl: Some(OutputTemplates::simple(TITLE_TEMPLATE.to_string())),
            merge_output_format: Some("mp4".to_string()),
            noprogress: Some(true),
            ..Default::default()
        }
    }
}

/// Best audio transcoded by FFmpeg to a fixed codec and quality.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AudioPreset {
    pub codec: &'static str,
    /// kbit/s for lossy codecs
    pub quality: u32,
}

impl AudioPreset {
    /// 192 kbit/s MP3.
    pub fn mp3() -> Self {
        Self {
            codec: "mp3",
            quality: 192,
        }
    }
}

impl Default for AudioPreset {
    fn default() -> Self {
        Self::mp3()
    }
}

impl From<AudioPreset> for PostProcessor {
    fn from(preset: AudioPreset) -> Self {
        Self {
            key: "FFmpegExtractAudio".to_string(),
            preferredcodec: Some(preset.codec.to_string()),
            preferredquality: Some(preset.quality.to_string()),
        }
    }
}

impl From<AudioPreset> for DownloadOptions {
    fn from(preset: AudioPreset) -> Self {
        Self {
            format: Some("bestaudio/best".to_string()),
            outtmpl: Some(OutputTemplates::simple(TITLE_TEMPLATE.to_string())),
            postprocessors: Some(vec![preset.into()]),
            noprogress: Some(true),
            ..Default::default()
        }
    }
}
