use crate::error::{ReleaseDateError, Result};
use crate::scheme::SchemeMode;
use crate::version::DEFAULT_TAG_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "releasedate.toml";

/// Configuration file looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".releasedate.toml";

fn default_main_branch() -> String {
    "master".to_string()
}

fn default_develop_branch() -> String {
    "develop".to_string()
}

fn default_tag_prefix() -> String {
    DEFAULT_TAG_PREFIX.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Represents the complete configuration for git-release-date.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Branch whose tip anchors the merge-base
    #[serde(default = "default_main_branch")]
    pub main_branch: String,

    /// Branch whose absence selects the simplified scheme in `auto` mode
    #[serde(default = "default_develop_branch")]
    pub develop_branch: String,

    #[serde(default)]
    pub scheme: SchemeMode,

    /// Regex stripped from the front of tag names before parsing
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default)]
    pub log: LogConfig,
}

/// Logging defaults, used when `RUST_LOG` is unset
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            main_branch: default_main_branch(),
            develop_branch: default_develop_branch(),
            scheme: SchemeMode::default(),
            tag_prefix: default_tag_prefix(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ReleaseDateError::config(e.to_string()))
    }
}

/// Path of the configuration file that [load_config] would read
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `releasedate.toml` in current directory
/// 3. `.releasedate.toml` in the user config directory
pub fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists (or was named explicitly) but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            Config::from_toml(&text).map_err(|e| {
                ReleaseDateError::config(format!("{}: {}", path.display(), e))
            })
        }
        None => Ok(Config::default()),
    }
}
