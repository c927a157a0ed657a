//! Configuration for the snowfall terminal app.
//!
//! Settings live in `config.toml` under the platform configuration directory.
//! A missing file means defaults. The simulation itself has no settings; these
//! only control how the terminal host paces and presents frames.

mod color;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use color::{ParseColorError, Rgb};

/// Default delay between frames (about 60 fps).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Default raster pixels per half-cell edge.
pub const DEFAULT_SUPERSAMPLE: u8 = 4;

/// Largest accepted supersample factor.
pub const MAX_SUPERSAMPLE: u8 = 8;

/// Default night-sky background.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x0b, 0x10, 0x20);

const CONFIG_FILE: &str = "config.toml";

/// Errors from loading, saving or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowfallConfig {
    /// Delay between animation frames in milliseconds.
    pub frame_interval_ms: u64,
    /// Raster pixels per half-cell edge.
    pub supersample: u8,
    /// Color behind the snow.
    pub background: Rgb,
    /// Fixed random seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            supersample: DEFAULT_SUPERSAMPLE,
            background: DEFAULT_BACKGROUND,
            seed: None,
        }
    }
}

impl SnowfallConfig {
    /// Load from the default location, or defaults if there is none.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "frame_interval_ms",
                reason: "must be at least 1".into(),
            });
        }
        if !(1..=MAX_SUPERSAMPLE).contains(&self.supersample) {
            return Err(ConfigError::Invalid {
                field: "supersample",
                reason: format!("must be between 1 and {MAX_SUPERSAMPLE}"),
            });
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "snowfall")
}

/// Default configuration file location.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Directory for local data such as log files.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}
