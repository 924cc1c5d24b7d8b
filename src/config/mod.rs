//! User-level configuration for heartwatch
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/heartwatch/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base URL of the remote scoring service when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the remote scoring service URL.
pub const API_URL_ENV: &str = "HEARTWATCH_API_URL";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Base URL of the scoring service (default: http://localhost:8000)
    pub api_url: Option<String>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/heartwatch/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = match Self::user_config_path().filter(|p| p.exists()) {
            Some(path) => Self::load_from(&path)?,
            None => UserConfig::default(),
        };

        // Environment variables override everything
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.remote.api_url = Some(url);
        }

        Ok(config)
    }

    /// Load config from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("heartwatch").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: UserConfig) {
        if other.remote.api_url.is_some() {
            self.remote.api_url = other.remote.api_url;
        }
    }

    /// Base URL of the remote scoring service
    pub fn api_url(&self) -> &str {
        self.remote.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
