use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Local development default; a deployed install points this at the real
/// analysis service.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Environment override for the backend base URL.
pub const BACKEND_URL_ENV: &str = "SCAMWATCH_BACKEND_URL";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend_url: String,
    /// Default result language for reports; the CLI flag overrides it.
    pub response_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            response_language: "auto".to_string(),
        }
    }
}

impl Config {
    /// Directory: ~/.config/scamwatch/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("scamwatch");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk, returning defaults if the file doesn't exist or is
    /// invalid. The environment override beats the file value.
    pub fn load() -> Self {
        let path = Self::path();
        let mut config: Self = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                config.backend_url = url;
            }
        }
        config
    }
}
