//! Conversion error types

use std::path::PathBuf;

/// Errors that can occur while converting playlists
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// No path argument was given
    #[error("no playlist file or directory given")]
    ArgumentMissing,

    /// The path argument does not exist
    #[error("No such file or directory: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Playlist content is not UTF-8
    #[error("{} is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },

    /// Playlist content is not well-formed XML
    #[error("malformed XML in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// Playlist is XML but not a WPL document
    #[error("{} is not a WPL playlist: {reason}", .path.display())]
    Schema { path: PathBuf, reason: String },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error aborts the whole run rather than a single playlist
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ArgumentMissing | Self::PathNotFound(_))
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
