use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "masters.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every resource path is appended to.
    pub api_url: String,
    /// Suppresses developer-console error logging when set.
    pub production: bool,
    pub app_name: String,
    pub version: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub notification_life_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: "http://localhost:3000/api".to_string(),
            production: false,
            app_name: "Inventory Management System".to_string(),
            version: "1.0.0".to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            notification_life_ms: 5000,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `masters.toml` with environment variable overrides
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::load_from_file(path).unwrap_or_else(|e| {
            log::warn!("{}, using defaults", e);
            ClientConfig::default()
        });

        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        ClientConfig {
            api_url: api_url.into(),
            ..ClientConfig::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Default toast life; success toasts keep their shorter fixed life.
    pub fn notification_life(&self) -> Duration {
        Duration::from_millis(self.notification_life_ms)
    }

    fn load_from_file(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Err(format!("{} not found", path.display()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Apply overrides looked up by variable name
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("MASTERS_API_URL") {
            self.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(production) = lookup("MASTERS_PRODUCTION") {
            self.production = production.to_lowercase() == "true" || production == "1";
        }
        if let Some(timeout) = lookup("MASTERS_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                self.request_timeout_secs = secs;
            }
        }
    }
}
