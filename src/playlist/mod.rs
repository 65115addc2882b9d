//! WPL playlist discovery, parsing and M3U output

pub mod error;
pub mod resolver;
pub mod wpl;
pub mod writer;

pub use error::{ConvertError, ConvertResult};
pub use resolver::{PlaylistFile, resolve};
pub use wpl::{MediaReference, parse_playlist_file};
pub use writer::{m3u_path_for, write_m3u};
