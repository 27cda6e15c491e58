// src/config.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Application settings. `Config::new` is the stock setup; a JSON file with
/// the same keys overrides any subset of it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the roster is saved and loaded.
    pub data_file: PathBuf,
    /// How many subject marks the auto-GPA entry asks for.
    pub subjects: usize,
    /// The full mark for a single subject.
    pub full_marks: f64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            data_file: PathBuf::from("students.txt"),
            subjects: 5,
            full_marks: 100.0,
        }
    }

    /// Reads settings from `path`, or returns the defaults when no such file
    /// exists.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::new());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad config: {0}")]
    Parse(#[from] serde_json::Error),
}
