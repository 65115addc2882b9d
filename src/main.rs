//! wpl2m3u - Convert Windows Media Player playlists to M3U

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod playlist;
mod utils;

use cli::Cli;
use playlist::ConvertError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "wpl2m3u=debug"
    } else {
        "wpl2m3u=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = cli::commands::convert(cli.path).await {
        if let Some(code) = fatal_exit_code(&e) {
            std::process::exit(code);
        }
        return Err(e);
    }

    Ok(())
}

/// Exit status for errors that end the run before any playlist is touched
fn fatal_exit_code(err: &anyhow::Error) -> Option<i32> {
    err.downcast_ref::<ConvertError>()
        .is_some_and(ConvertError::is_fatal)
        .then_some(-1)
}
