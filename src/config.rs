//! Runtime configuration
//!
//! Loaded from an optional JSON file; missing fields fall back to the
//! constants in `lib.rs`. CLI flags override whatever the file sets.

use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::types::Thresholds;
use crate::{Result, DEFAULT_WINDOW_DAYS};

/// Default API bind address
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engine cutoffs
    pub thresholds: Thresholds,
    /// Days back from the window end that are analyzed
    pub window_days: u32,
    /// HTTP API bind address
    pub addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            window_days: DEFAULT_WINDOW_DAYS,
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from a file when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
