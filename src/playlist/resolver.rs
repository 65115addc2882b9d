//! Input resolution: turn the path argument into a list of playlists

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::error::{ConvertError, ConvertResult};

/// File extension of Windows Media Player playlists
pub const WPL_EXTENSION: &str = ".wpl";

/// One input WPL file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistFile {
    pub path: PathBuf,
}

impl PlaylistFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Resolve a file or directory argument into the playlists to convert
///
/// A regular file is returned as-is whatever its extension. A directory yields
/// every direct entry whose name ends in `.wpl`, in listing order; directories
/// are never descended into.
pub async fn resolve(path: &Path) -> ConvertResult<Vec<PlaylistFile>> {
    if path.as_os_str().is_empty() {
        return Err(ConvertError::ArgumentMissing);
    }

    let metadata = match fs::metadata(path).await {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConvertError::PathNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(ConvertError::io(path, e)),
    };

    if !metadata.is_dir() {
        debug!("Resolved single playlist {}", path.display());
        return Ok(vec![PlaylistFile::new(path)]);
    }

    let mut entries = fs::read_dir(path)
        .await
        .map_err(|e| ConvertError::io(path, e))?;

    let mut playlists = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ConvertError::io(path, e))?
    {
        if !has_wpl_extension(&entry.file_name()) {
            continue;
        }

        let file_type = entry
            .file_type()
            .await
            .map_err(|e| ConvertError::io(entry.path(), e))?;
        if file_type.is_dir() {
            debug!("Skipping directory {}", entry.path().display());
            continue;
        }

        playlists.push(PlaylistFile::new(entry.path()));
    }

    debug!("Found {} playlists in {}", playlists.len(), path.display());
    Ok(playlists)
}

/// Case-sensitive suffix match on the raw file name
fn has_wpl_extension(name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().ends_with(WPL_EXTENSION.as_bytes())
}
