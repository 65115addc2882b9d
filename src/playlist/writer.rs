//! M3U output writing

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::error::{ConvertError, ConvertResult};
use super::resolver::WPL_EXTENSION;
use super::wpl::MediaReference;

/// File extension of generated playlists
pub const M3U_EXTENSION: &str = ".m3u";

/// Derive the M3U path that sits next to a WPL file
///
/// The first `.wpl` in the file name becomes `.m3u`. Only the file name is
/// rewritten on purpose: a `.wpl` inside a directory component must not
/// redirect the output into a directory that does not exist. A name without
/// `.wpl` gets `.m3u` appended so the input is never overwritten.
pub fn m3u_path_for(playlist_path: &Path) -> PathBuf {
    let Some(name) = playlist_path.file_name() else {
        let mut path = playlist_path.as_os_str().to_owned();
        path.push(M3U_EXTENSION);
        return PathBuf::from(path);
    };

    // Matched on raw bytes so non-UTF-8 names behave like the directory scan
    let bytes = name.as_encoded_bytes();
    let new_name = match bytes
        .windows(WPL_EXTENSION.len())
        .position(|w| w == WPL_EXTENSION.as_bytes())
    {
        Some(pos) => {
            let mut renamed = Vec::with_capacity(bytes.len());
            renamed.extend_from_slice(&bytes[..pos]);
            renamed.extend_from_slice(M3U_EXTENSION.as_bytes());
            renamed.extend_from_slice(&bytes[pos + WPL_EXTENSION.len()..]);
            // SAFETY: an ASCII run was swapped for another ASCII run, so every
            // split point is a valid boundary of the original encoding.
            unsafe { OsString::from_encoded_bytes_unchecked(renamed) }
        }
        None => {
            let mut renamed = name.to_owned();
            renamed.push(M3U_EXTENSION);
            renamed
        }
    };

    playlist_path.with_file_name(new_name)
}

/// Write an M3U file for a parsed playlist and return its path
pub async fn write_m3u(playlist_path: &Path, media: &[MediaReference]) -> ConvertResult<PathBuf> {
    let m3u_path = m3u_path_for(playlist_path);
    let content = crate::utils::generate_m3u(media);

    fs::write(&m3u_path, content)
        .await
        .map_err(|e| ConvertError::io(&m3u_path, e))?;

    debug!("Wrote M3U: {} ({} tracks)", m3u_path.display(), media.len());
    Ok(m3u_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_m3u_path_simple() {
        assert_eq!(m3u_path_for(Path::new("playlist.wpl")), PathBuf::from("playlist.m3u"));
        assert_eq!(
            m3u_path_for(Path::new("/music/lists/road trip.wpl")),
            PathBuf::from("/music/lists/road trip.m3u")
        );
    }

    #[test]
    fn test_m3u_path_first_occurrence_only() {
        assert_eq!(
            m3u_path_for(Path::new("my.wpl.backup.wpl")),
            PathBuf::from("my.m3u.backup.wpl")
        );
    }

    #[test]
    fn test_m3u_path_ignores_directory_names() {
        assert_eq!(
            m3u_path_for(Path::new("old.wpl.d/mix.wpl")),
            PathBuf::from("old.wpl.d/mix.m3u")
        );
    }

    #[test]
    fn test_m3u_path_without_extension() {
        assert_eq!(m3u_path_for(Path::new("list.txt")), PathBuf::from("list.txt.m3u"));
        assert_eq!(m3u_path_for(Path::new("mix.WPL")), PathBuf::from("mix.WPL.m3u"));
    }

    #[test]
    fn test_m3u_path_bare_extension() {
        assert_eq!(m3u_path_for(Path::new("dir/.wpl")), PathBuf::from("dir/.m3u"));
    }

    #[cfg(unix)]
    #[test]
    fn test_m3u_path_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new("lists").join(OsStr::from_bytes(b"caf\xe9.wpl"));
        let output = m3u_path_for(&input);
        assert_eq!(output.file_name().unwrap().as_bytes(), b"caf\xe9.m3u");
        assert_eq!(output.parent(), Some(Path::new("lists")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_resolved_non_utf8_playlist_gets_m3u_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.wpl");
        if std::fs::write(dir.path().join(name), "").is_err() {
            // Filesystem refuses non-UTF-8 names
            return;
        }

        let resolved = crate::playlist::resolve(dir.path()).await.unwrap();
        assert_eq!(resolved.len(), 1);
        let output = m3u_path_for(&resolved[0].path);
        assert_eq!(output, dir.path().join(OsStr::from_bytes(b"caf\xe9.m3u")));
    }

    #[tokio::test]
    async fn test_write_m3u() {
        let dir = tempfile::tempdir().unwrap();
        let wpl = dir.path().join("a.wpl");
        let media = vec![MediaReference::new(r"songs\1.mp3"), MediaReference::new("songs/2.mp3")];

        let written = write_m3u(&wpl, &media).await.unwrap();
        assert_eq!(written, dir.path().join("a.m3u"));

        let content = std::fs::read_to_string(&written).unwrap();
        assert_eq!(
            content,
            "#EXTM3U\n#EXTINF:0,1.mp3\nsongs\\1.mp3\n\n#EXTINF:0,2.mp3\nsongs/2.mp3\n\n"
        );
    }

    #[tokio::test]
    async fn test_write_m3u_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let wpl = dir.path().join("a.wpl");
        std::fs::write(dir.path().join("a.m3u"), "stale content that is longer").unwrap();

        write_m3u(&wpl, &[]).await.unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join("a.m3u")).unwrap(), "#EXTM3U\n");
    }

    #[tokio::test]
    async fn test_write_m3u_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let wpl = dir.path().join("gone").join("a.wpl");

        let err = write_m3u(&wpl, &[]).await.unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
