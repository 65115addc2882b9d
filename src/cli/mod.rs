//! CLI module for wpl2m3u

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

/// Usage line printed when no path is given
pub const USAGE: &str = "Usage: wpl2m3u <path to wpl file or directory containing wpl files>";

#[derive(Parser, Debug)]
#[command(name = "wpl2m3u", about = "Convert Windows Media Player playlists to M3U")]
#[command(version, author)]
pub struct Cli {
    /// WPL file, or directory containing WPL files
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, env = "WPL2M3U_VERBOSE")]
    pub verbose: bool,
}
