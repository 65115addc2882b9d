//! CLI command handlers

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::playlist::{self, ConvertError, ConvertResult, PlaylistFile};

/// Outcome of a conversion run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub failed: usize,
    pub tracks: usize,
}

/// Handle a conversion run for a file or directory argument
///
/// Fatal errors (no argument, path not found) are returned as [`ConvertError`]
/// after the matching message has been printed. Failures on individual
/// playlists are reported and counted, and the run moves on.
pub async fn convert(path: Option<PathBuf>) -> Result<ConvertSummary> {
    let path = path.unwrap_or_default();

    let playlists = match playlist::resolve(&path).await {
        Ok(p) => p,
        Err(ConvertError::ArgumentMissing) => {
            println!("{}", super::USAGE);
            return Err(ConvertError::ArgumentMissing.into());
        }
        Err(e @ ConvertError::PathNotFound(_)) => {
            println!("{}", e.to_string().red());
            return Err(e.into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to list playlists in {}", path.display()));
        }
    };

    info!("Converting {} playlist(s) from {}", playlists.len(), path.display());

    let progress = if playlists.len() > 1 {
        let bar = ProgressBar::new(playlists.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let summary = convert_all(&playlists, &progress).await;
    progress.finish_and_clear();

    println!("{}", "Done.".green().bold());
    if summary.failed > 0 {
        println!(
            "  Converted: {}  Failed: {}",
            summary.converted,
            summary.failed.to_string().red()
        );
    } else {
        debug!(
            "Converted {} playlist(s), {} track(s)",
            summary.converted, summary.tracks
        );
    }

    Ok(summary)
}

/// Convert playlists one after another, in order
async fn convert_all(playlists: &[PlaylistFile], progress: &ProgressBar) -> ConvertSummary {
    let mut summary = ConvertSummary::default();

    for current in playlists {
        progress.set_message(display_name(current));

        match convert_playlist(current, progress).await {
            Ok(tracks) => {
                summary.converted += 1;
                summary.tracks += tracks;
            }
            Err(e) => {
                warn!("Failed to convert {}: {}", current.path.display(), e);
                progress.suspend(|| println!("  {} {}", "Skipped:".red(), e));
                summary.failed += 1;
            }
        }

        progress.inc(1);
    }

    summary
}

/// Convert a single playlist and return the number of tracks written
async fn convert_playlist(current: &PlaylistFile, progress: &ProgressBar) -> ConvertResult<usize> {
    progress.suspend(|| println!("Currently converting : {}", current.path.display()));

    let document = playlist::parse_playlist_file(&current.path).await?;

    let m3u_path = playlist::m3u_path_for(&current.path);
    progress.suspend(|| println!("File to write out: {}", m3u_path.display()));

    playlist::write_m3u(&current.path, &document.media).await?;
    Ok(document.media.len())
}

fn display_name(current: &PlaylistFile) -> String {
    current
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
