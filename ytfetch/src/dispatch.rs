//! Download dispatch: one engine call per item, in probe order.

use crate::console::Console;
use crate::engine::{DownloadKind, DownloadRequest, Engine, MediaItem, Probe};
use eyre::{Result, WrapErr, eyre};
use std::io::{BufRead, Write};
use std::path::Path;

/// One item to download. `title` is printed before playlist entries only.
struct Target<'a> {
    title: Option<&'a str>,
    url: &'a str,
}

fn playlist_target(item: &MediaItem) -> Result<Target<'_>> {
    let url = item
        .url
        .as_deref()
        .ok_or_else(|| eyre!("playlist entry {:?} has no URL", item.title))?;

    Ok(Target {
        title: Some(&item.title),
        url,
    })
}

/// Download every item of `probe` with the same format choice.
///
/// A single item is fetched from `source_url`; playlist entries from their own URLs.
/// The first failure stops the run, so later entries are never attempted.
/// Returns the number of completed downloads.
pub fn dispatch<E: Engine, R: BufRead, W: Write>(
    engine: &E,
    console: &mut Console<R, W>,
    probe: &Probe,
    source_url: &str,
    kind: DownloadKind,
    output_dir: &Path,
) -> Result<usize> {
    let targets: Vec<Result<Target>> = match probe {
        Probe::Single(_) => vec![Ok(Target {
            title: None,
            url: source_url,
        })],
        Probe::Playlist { title, entries } => {
            let what = match kind {
                DownloadKind::Audio => "as MP3",
                DownloadKind::Video { .. } => "in selected resolution",
            };
            console.say(format_args!(
                "Downloading playlist '{title}' ({} items) {what}...",
                entries.len()
            ))?;

            entries.iter().map(playlist_target).collect()
        }
    };

    let total = targets.len();

    for (done, target) in targets.into_iter().enumerate() {
        let target = target?;

        if let Some(title) = target.title {
            console.say(format_args!("Downloading: {title}"))?;
        }

        let request = DownloadRequest {
            url: target.url.to_string(),
            kind,
            output_dir: output_dir.to_path_buf(),
        };

        let downloaded = engine.download(&request);

        if matches!(probe, Probe::Playlist { .. }) {
            downloaded.wrap_err_with(|| format!("stopped after {done} of {total} downloads"))?;
        } else {
            downloaded?;
        }
    }

    Ok(total)
}
