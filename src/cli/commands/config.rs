//! Config Command
//!
//! Inspect flutter-summary configuration.
//!
//! Usage:
//!   flutter-summary config show [-f json]
//!   flutter-summary config path

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show merged effective configuration
pub fn show(format: &str) -> Result<()> {
    if format != "json" {
        Output::new().header("Effective configuration");
    }
    ConfigLoader::show_config(format == "json")
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}
