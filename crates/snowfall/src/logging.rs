//! File logging. The terminal belongs to the UI, so logs go to disk.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE: &str = "snowfall.log";

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "snowfall=info";

/// Install the global subscriber. Returns the log file path, or `None` when
/// the platform has no data directory.
pub fn init() -> color_eyre::Result<Option<PathBuf>> {
    let Some(dir) = snowfall_config::data_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()?;

    Ok(Some(path))
}
