//! Configuration Types
//!
//! Only run-environment settings live here. The target extension, the
//! extraction patterns and the report file are constants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::config::LOG_LEVELS;
use crate::constants::scan::DEFAULT_ROOT;
use crate::types::{Result, SummaryError};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Scan settings
    pub scan: ScanConfig,

    /// Logging settings
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            scan: ScanConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `SummaryError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.scan.root.as_os_str().is_empty() {
            return Err(SummaryError::Config(
                "scan.root must not be empty".to_string(),
            ));
        }

        let level = self.log.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(SummaryError::Config(format!(
                "Invalid log.level '{}'. Valid values: {}",
                self.log.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory to summarize (the report is still written to the cwd)
    pub root: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default tracing filter when neither flags nor RUST_LOG are given
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
