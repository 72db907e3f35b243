//! Configuration loading and dataset path resolution
//!
//! Bootstrap settings live in an optional TOML file. A missing file is not
//! an error: compiled defaults are used.
//!
//! Dataset path priority:
//! 1. Command-line argument (highest priority)
//! 2. `TAXO_DATASET` environment variable
//! 3. TOML `dataset_path`
//! 4. `<data_local_dir>/taxo/t.json` if it exists
//! 5. `./t.json` (fallback)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Error, Result};

/// Environment variable overriding the dataset location
pub const DATASET_ENV_VAR: &str = "TAXO_DATASET";

/// Dataset file name used by the compiled defaults
pub const DATASET_FILE_NAME: &str = "t.json";

const APP_DIR: &str = "taxo";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Path to the taxonomy dataset file
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Search input settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Debounce window applied to interactive query input
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

/// Parse a TOML configuration file
///
/// # Errors
/// `Error::Config` if the file cannot be read or is not valid TOML.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Configuration together with the file it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    /// None when compiled defaults are in use
    pub path: Option<PathBuf>,
}

/// Load configuration from an explicit path or the platform default
///
/// An explicit path must exist (`Error::NotFound` otherwise). Without one, the default location is tried
/// and its absence yields defaults. Nothing is logged here: this runs before
/// the tracing subscriber is installed.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(Error::NotFound(format!("config file {}", path.display())));
        }
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(LoadedConfig::default()),
        },
    };

    let config = load_toml_config(&path)?;
    Ok(LoadedConfig {
        config,
        path: Some(path),
    })
}

/// Platform configuration file path
///
/// On Linux the user file (`~/.config/taxo/config.toml`) wins over
/// `/etc/taxo/config.toml`; when neither exists the user path is returned.
pub fn default_config_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE_NAME));

    if cfg!(target_os = "linux") {
        if let Some(path) = &user_config {
            if path.exists() {
                return user_config;
            }
        }
        let system_config = PathBuf::from("/etc").join(APP_DIR).join(CONFIG_FILE_NAME);
        if system_config.exists() {
            return Some(system_config);
        }
    }

    user_config
}

/// Resolve the dataset file location
pub fn resolve_dataset_path(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATASET_ENV_VAR) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.dataset_path {
        return path.clone();
    }

    // Priority 4/5: compiled defaults
    default_dataset_path()
}

fn default_dataset_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR).join(DATASET_FILE_NAME))
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from(DATASET_FILE_NAME))
}
