//! FILENAME: app/src/config.rs
//! PURPOSE: Dashboard settings loaded from `dashboard.toml`.
//! CONTEXT: Every field has a default, so a missing file or a partial file
//! is valid. Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

pub const DEFAULT_MAX_VIEW_ROWS: usize = 500;
pub const DEFAULT_SAMPLE_ROWS: usize = 5;
pub const DEFAULT_EXPORT_DIR: &str = "downloads";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dataset loaded when no file is supplied.
    pub default_dataset: PathBuf,
    /// Unified log file; console only when unset.
    pub log_file: Option<PathBuf>,
    /// `debug`, `info`, `warn` or `error`.
    pub log_level: String,
    /// Rows of the filtered data shown in the data viewer.
    pub max_view_rows: usize,
    /// Rows of the date-filtered data shown as the sample table.
    pub sample_rows: usize,
    /// Directory that receives the CSV downloads.
    pub export_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            default_dataset: PathBuf::from(persistence::DEFAULT_DATASET_FILE),
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            max_view_rows: DEFAULT_MAX_VIEW_ROWS,
            sample_rows: DEFAULT_SAMPLE_ROWS,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path`. An explicitly requested file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Reads `path` when given, otherwise `dashboard.toml` if it exists,
    /// otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
