//! Interactive collection of the URL, download mode and output folder.

use crate::console::Console;
use crate::shorts;
use eyre::{Result, WrapErr};
use std::io::{BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// What to fetch for each item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Video merged with audio, capped to a chosen resolution
    Video,
    /// Audio only, transcoded to MP3
    Audio,
}

impl Mode {
    /// Accepts `video`, `mp3` or `audio`, ignoring case and surrounding whitespace.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "video" => Some(Self::Video),
            "mp3" | "audio" => Some(Self::Audio),
            _ => None,
        }
    }
}

/// Ask until a non-empty URL is given; Shorts links are normalized.
pub fn ask_url<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    loop {
        let url = console.ask("Enter the YouTube video or playlist URL")?;

        if url.is_empty() {
            console.say("URL cannot be empty. Please try again.")?;
            continue;
        }

        return Ok(shorts::normalize(&url));
    }
}

/// Ask for the download mode once. `None` means the answer was not a known mode.
pub fn ask_mode<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<Mode>> {
    let answer = console.ask("Do you want to download video or mp3? (video/mp3)")?;
    Ok(Mode::parse(&answer))
}

/// Ask whether to use a new folder under `base`; returns the output directory.
pub fn ask_output_dir<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    base: &Path,
) -> Result<PathBuf> {
    let answer = console.ask("Do you want to save in a folder? (y/n)")?;

    if answer.eq_ignore_ascii_case("y") {
        ask_new_folder(console, base)
    } else {
        Ok(base.to_path_buf())
    }
}

/// Ask until the name is non-empty and unused under `base`, then create the folder.
///
/// Existing paths are never reused or overwritten.
pub fn ask_new_folder<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    base: &Path,
) -> Result<PathBuf> {
    loop {
        let name = console.ask("Provide a new folder name to save the files")?;

        if name.is_empty() {
            console.say("Folder name cannot be empty. Please try again.")?;
            continue;
        }

        let path = base.join(&name);

        // Any existing entry counts as taken, dangling symlinks included
        match std::fs::create_dir(&path) {
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                console.say(format_args!(
                    "The folder '{name}' already exists. Please choose a different name."
                ))?;
                continue;
            }
            created => created
                .wrap_err_with(|| format!("failed to create folder: {:?}", path.display()))?,
        }

        tracing::info!(path = %path.display(), "created output folder");
        console.say(format_args!("Folder '{name}' created successfully."))?;

        return Ok(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("ytfetch-input-test").join(name);

        // Clean up previous test run
        if dir.exists() {
            std::fs::remove_dir_all(&dir).ok();
        }
        std::fs::create_dir_all(&dir).expect("failed to create temp dir");

        dir
    }

    fn transcript<R>(console: &Console<R, Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    #[test]
    fn parses_modes() {
        assert_eq!(Mode::parse("video"), Some(Mode::Video));
        assert_eq!(Mode::parse(" MP3 "), Some(Mode::Audio));
        assert_eq!(Mode::parse("audio"), Some(Mode::Audio));
        assert_eq!(Mode::parse("song"), None);
        assert_eq!(Mode::parse(""), None);
    }

    #[test]
    fn url_reprompts_when_empty() {
        let mut console = Console::new("\n  \nhttps://youtu.be/x\n".as_bytes(), Vec::new());

        let url = ask_url(&mut console).unwrap();

        assert_eq!(url, "https://youtu.be/x");
        assert_eq!(transcript(&console).matches("URL cannot be empty").count(), 2);
    }

    #[test]
    fn url_normalizes_shorts() {
        let mut console = Console::new("https://youtube.com/shorts/abc123\n".as_bytes(), Vec::new());

        assert_eq!(
            ask_url(&mut console).unwrap(),
            "https://youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn output_dir_defaults_to_base() {
        let base = scratch_dir("default");
        let mut console = Console::new("n\n".as_bytes(), Vec::new());

        assert_eq!(ask_output_dir(&mut console, &base).unwrap(), base);
    }

    #[test]
    fn creates_new_folder() {
        let base = scratch_dir("create");
        let mut console = Console::new("Y\nclips\n".as_bytes(), Vec::new());

        let dir = ask_output_dir(&mut console, &base).unwrap();

        assert_eq!(dir, base.join("clips"));
        assert!(dir.is_dir());
        assert!(transcript(&console).contains("Folder 'clips' created successfully."));
    }

    #[test]
    fn existing_folder_is_not_reused() {
        let base = scratch_dir("existing");
        let taken = base.join("taken");
        std::fs::create_dir(&taken).unwrap();
        std::fs::write(taken.join("keep.txt"), "keep").unwrap();

        let mut console = Console::new("taken\n\nfresh\n".as_bytes(), Vec::new());
        let dir = ask_new_folder(&mut console, &base).unwrap();

        let out = transcript(&console);
        assert_eq!(dir, base.join("fresh"));
        assert!(out.contains("The folder 'taken' already exists."));
        assert!(out.contains("Folder name cannot be empty."));
        assert_eq!(std::fs::read_to_string(taken.join("keep.txt")).unwrap(), "keep");
    }

    #[test]
    fn existing_file_is_not_reused() {
        let base = scratch_dir("existing-file");
        std::fs::write(base.join("notes"), "keep").unwrap();

        let mut console = Console::new("notes
fresh
".as_bytes(), Vec::new());
        let dir = ask_new_folder(&mut console, &base).unwrap();

        assert_eq!(dir, base.join("fresh"));
        assert!(transcript(&console).contains("The folder 'notes' already exists."));
        assert_eq!(std::fs::read_to_string(base.join("notes")).unwrap(), "keep");
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_reprompted() {
        let base = scratch_dir("dangling");
        std::os::unix::fs::symlink(base.join("gone"), base.join("link")).unwrap();

        let mut console = Console::new("link
fresh
".as_bytes(), Vec::new());
        let dir = ask_new_folder(&mut console, &base).unwrap();

        assert_eq!(dir, base.join("fresh"));
        assert!(transcript(&console).contains("The folder 'link' already exists."));
    }
}
