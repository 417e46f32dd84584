//! File logging for the binary.
//!
//! The terminal belongs to the game, so events go to a file only.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "ghost-grid.log";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default `info` level. The returned guard must be
/// held until exit or buffered lines are lost.
pub fn init(log_dir: Option<PathBuf>) -> Result<(WorkerGuard, PathBuf)> {
    let dir = log_dir.unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    let path = dir.join(LOG_FILE);
    tracing::info!(path = %path.display(), "logging initialized");
    Ok((guard, path))
}

/// `$XDG_CACHE_HOME/ghost-grid/logs`, then `$HOME/.cache/ghost-grid/logs`,
/// then the temp dir.
fn default_log_dir() -> PathBuf {
    let base = std::env::var_os("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))
        .unwrap_or_else(std::env::temp_dir);
    base.join("ghost-grid").join("logs")
}
