//! M3U playlist generation

use crate::playlist::MediaReference;

/// Header line of an extended M3U file
pub const M3U_HEADER: &str = "#EXTM3U";

/// Build the `#EXTINF` line for a track, including the trailing newline
///
/// Windows separators are normalized first so the file name is found no
/// matter which style the playlist used. Duration is unknown and always `0`.
pub fn track_info_line(source: &str) -> String {
    let normalized = source.replace('\\', "/");
    let filename = normalized.rsplit('/').next().unwrap_or_default();
    format!("#EXTINF:0,{}\n", filename)
}

/// Generate extended M3U content for a list of tracks
///
/// Each track gets an info line, its source path verbatim, and a blank line.
pub fn generate_m3u(tracks: &[MediaReference]) -> String {
    let mut content = String::from(M3U_HEADER);
    content.push('\n');
    for track in tracks {
        content.push_str(&track_info_line(&track.src));
        content.push_str(&track.src);
        content.push_str("\n\n");
    }
    content
}
