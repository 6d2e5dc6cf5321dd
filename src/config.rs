use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::{app_dirs::AppDirs, logging::init_logging, study::Direction};

/// On-disk preferences. Every field is optional; the file is only read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub direction: Option<Direction>,
    pub words_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait ConfigStore {
    /// A store with nothing saved yet yields `Config::default()`.
    fn load(&self) -> Result<Config, ConfigError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| ConfigError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

/// Resolves settings, installs logging from them, and only then reports an
/// unusable config file, so the warning lands in a `--log-file` given on the
/// command line.
pub fn init_settings<S: ConfigStore>(
    store: &S,
    overrides: Overrides,
) -> Result<Settings, Box<dyn std::error::Error>> {
    let (config, config_err) = match store.load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let settings = Settings::resolve(config, overrides);
    init_logging(settings.log_file.as_deref())?;

    if let Some(err) = config_err {
        warn!(%err, "ignoring unusable config file, using defaults");
    }

    Ok(settings)
}

/// Effective settings after command-line flags are laid over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub direction: Direction,
    pub words_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub direction: Option<Direction>,
    pub words_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(config: Config, overrides: Overrides) -> Self {
        Self {
            direction: overrides
                .direction
                .or(config.direction)
                .unwrap_or_default(),
            words_file: overrides.words_file.or(config.words_file),
            log_file: overrides.log_file.or(config.log_file),
        }
    }
}
