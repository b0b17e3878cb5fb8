//! Layered configuration: defaults < config file < environment < CLI flags.
//!
//! Environment variables are folded into the CLI layer by clap, so this
//! module only has to merge the parsed arguments over the TOML file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cli::CliConfig;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";
const APP_DIR: &str = "watchsac";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "watchsac.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("api url must not be empty")]
    EmptyBaseUrl,
    #[error("api url must use http:// or https:// and include a host: {0}")]
    InvalidBaseUrl(String),
}

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Resolve configuration from parsed arguments. A missing default config
    /// file is ignored; a missing file named with `--config` is an error.
    pub fn load(args: &CliConfig) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => FileConfig::load(&path)?,
                _ => FileConfig::default(),
            },
        };
        Self::merge(args, file)
    }

    pub fn merge(args: &CliConfig, file: FileConfig) -> Result<Self, ConfigError> {
        let api_url = args
            .api_url
            .clone()
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let log_file = args
            .log_file
            .clone()
            .or(file.log_file)
            .unwrap_or_else(default_log_path);
        let log_level = args
            .log_level
            .clone()
            .or(file.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            api_url: normalize_base_url(&api_url)?,
            log_file,
            log_level,
        })
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(LOG_FILE)
}

/// Trim, drop trailing slashes, and require an http(s) scheme with a host
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    let Some((scheme, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidBaseUrl(trimmed.to_string()));
    };
    if !(scheme == "http" || scheme == "https") {
        return Err(ConfigError::InvalidBaseUrl(trimmed.to_string()));
    }
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(ConfigError::InvalidBaseUrl(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}
