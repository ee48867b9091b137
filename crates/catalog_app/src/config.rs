//! Application configuration: optional RON file, then environment overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use catalog_engine::{ApiError, ApiSettings};
use catalog_logging::catalog_info;
use log::LevelFilter;
use serde::Deserialize;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "catalog.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid api settings: {0}")]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:1337".to_string(),
            api_token: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Reads `explicit` if given (it must exist), else `catalog.ron` if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_ron(&text).map_err(|message| ConfigError::Parse {
            path: path.clone(),
            message,
        })?;
        catalog_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_ron(text: &str) -> Result<Self, String> {
        ron::from_str(text).map_err(|err| err.to_string())
    }

    /// Applies `API_URL`, `API_TOKEN` and `CATALOG_LOG` from `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("API_URL").filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(token) = lookup("API_TOKEN").filter(|v| !v.trim().is_empty()) {
            self.api_token = Some(token);
        }
        if let Some(level) = lookup("CATALOG_LOG").filter(|v| !v.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }

    pub fn level(&self) -> LevelFilter {
        catalog_logging::level_from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn api_settings(&self) -> Result<ApiSettings, ConfigError> {
        let mut settings = ApiSettings::new(&self.api_url)?.with_token(self.api_token.clone());
        settings.connect_timeout = Duration::from_secs(self.connect_timeout_secs.max(1));
        settings.request_timeout = Duration::from_secs(self.request_timeout_secs.max(1));
        Ok(settings)
    }
}
