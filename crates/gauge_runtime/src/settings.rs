//! Settings management

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading settings from disk.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runtime settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Total readings to stream through the accumulator.
    pub samples: u32,
    /// Readings per reporting interval; the interval average restarts after
    /// each report while the all-time extrema keep running.
    pub report_every: u32,
    pub source: SourceSettings,
}

/// Shape of the synthetic reading stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    pub baseline: f32,
    pub swing: f32,
    pub period: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            samples: 120,
            report_every: 20,
            source: SourceSettings {
                baseline: 21.5,
                swing: 3.0,
                period: 16,
            },
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::parse(&fs::read_to_string(path)?)
    }

    fn parse(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }
}
