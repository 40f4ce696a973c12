use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::mapper::AnalysisResult;

/// A single completed analysis with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// File name, or "text" for pasted input.
    pub source: String,
    pub scam_detected: bool,
    pub risk_level: String,
    pub timestamp: String,
}

/// Persistent usage statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total_analyses: usize,
    pub scams_flagged: usize,
    #[serde(default)]
    pub history: Vec<AnalysisRecord>,
}

impl Stats {
    /// Directory: ~/.local/share/scamwatch/
    fn dir() -> PathBuf {
        let mut p = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("scamwatch");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("stats.json")
    }

    /// Load from disk, returning defaults if missing.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }

    /// Record a completed analysis.
    pub fn record_analysis(&mut self, source: &str, result: &AnalysisResult) {
        self.total_analyses += 1;
        if result.scam_detected {
            self.scams_flagged += 1;
        }
        self.history.push(AnalysisRecord {
            source: source.to_string(),
            scam_detected: result.scam_detected,
            risk_level: result.risk_level.as_str().to_string(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
    }
}
