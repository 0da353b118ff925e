//! Interactive downloader for videos, MP3s and playlists.
//!
//! A run asks for a URL, a mode and an optional new folder, probes the URL through
//! [`engine::Engine`], lets the user pick a resolution for video downloads, then
//! dispatches one download per item. See [`session::run`].

pub mod cli;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod engine;
pub mod input;
pub mod report;
pub mod resolution;
pub mod select;
pub mod session;
pub mod shorts;
