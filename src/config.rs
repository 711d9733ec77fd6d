//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which includes an optional API base URL override and the last email
//! address used to log in (pre-filled on the login form).
//!
//! Configuration is stored at `~/.config/careportal/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "careportal";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default API base URL, baked in at build time.
/// Can be overridden per-deployment via `CAREPORTAL_API_URL` or the config file.
const DEFAULT_API_BASE_URL: &str = "https://care-ai-analytics-capstone.vercel.app";

/// Environment variable that overrides the API base URL
const API_URL_ENV: &str = "CAREPORTAL_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve the API base URL: env var, then config file, then the
    /// built-in default. Trailing slashes are always stripped so endpoint
    /// paths can be joined with a single `/`.
    pub fn api_base_url(&self) -> String {
        let url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        normalize_base_url(&url)
    }
}

/// Strip whitespace and trailing slashes from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
