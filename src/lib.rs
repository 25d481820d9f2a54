//! flutter-summary - Dart/Flutter Codebase Summary
//!
//! Walks a directory tree, picks every `.dart` file, pulls class names and
//! function-like signatures out of each file with two regular expressions,
//! and writes a flat plain-text report.
//!
//! ## Quick Start
//!
//! ```ignore
//! use flutter_summary::Summarizer;
//!
//! let report = Summarizer::new(".")?.run("flutter_code_summary.txt")?;
//! println!("{} files scanned", report.files_scanned());
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: File scanning, source reading, signature extraction
//! - [`report`]: Report accumulation and rendering
//! - [`config`]: Layered configuration
//! - [`cli`]: Command handlers and console output

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod report;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use analyzer::{FileScanner, ScannedFile, SignatureExtractor, Summarizer, run};
pub use config::{Config, ConfigLoader};
pub use report::{Report, ReportBlock};
pub use types::{FailureStage, FileMatchRecord, Result, SummaryError};
