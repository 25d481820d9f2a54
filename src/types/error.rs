//! Unified Error Type
//!
//! Every failure aborts the run. Errors carry the path they concern so the
//! operator can tell which file stopped the scan.
//!
//! ## Failure Stages
//!
//! - **Traversal**: a directory could not be walked
//! - **Read**: a source file could not be read or is not valid UTF-8
//! - **Write**: the report could not be written
//! - **Setup**: configuration or pattern compilation failed before scanning

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

// =============================================================================
// Failure Stage
// =============================================================================

/// Pipeline stage an error was raised in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Traversal,
    Read,
    Write,
    Setup,
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Traversal => write!(f, "TRAVERSAL"),
            Self::Read => write!(f, "READ"),
            Self::Write => write!(f, "WRITE"),
            Self::Setup => write!(f, "SETUP"),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum SummaryError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("Traversal error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Pipeline Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SummaryError>;

impl SummaryError {
    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Stage of the pipeline this error aborted
    pub fn stage(&self) -> FailureStage {
        match self {
            Self::Walk(_) => FailureStage::Traversal,
            Self::Read { .. } | Self::Decode { .. } => FailureStage::Read,
            Self::Write { .. } => FailureStage::Write,
            Self::Pattern(_) | Self::Json(_) | Self::Config(_) => FailureStage::Setup,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
