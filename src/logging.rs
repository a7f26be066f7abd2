//! File logging for the terminal host.
//!
//! The widget core only emits `tracing` events; the binary decides where they
//! go. Writing to stdout would tear the alternate screen, so everything lands
//! in a daily-rotated file instead.

use std::path::PathBuf;

use anyhow::anyhow;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Used when `RUST_LOG` is unset. `taginput=debug` adds lookups and
/// collection changes; `taginput=trace` adds ranking and list navigation.
const DEFAULT_FILTER: &str = "taginput=info,warn";

const LOG_FILE_PREFIX: &str = "taginput.log";

/// Install the global subscriber writing to [`log_directory`].
pub fn init() -> anyhow::Result<()> {
    let dir = resolve_log_dir()?;
    std::fs::create_dir_all(&dir)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        ),
    )?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), dir = %dir.display(), "Logging started");
    Ok(())
}

fn resolve_log_dir() -> anyhow::Result<PathBuf> {
    let data = dirs::data_local_dir().ok_or_else(|| anyhow!("no local data directory"))?;
    Ok(data.join("taginput").join("logs"))
}

/// Where log files are written, if the platform has a data directory.
pub fn log_directory() -> Option<PathBuf> {
    resolve_log_dir().ok()
}

pub fn shutdown() {
    tracing::info!("Logging stopped");
}
