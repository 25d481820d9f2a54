//! Scan Command
//!
//! Summarizes every `.dart` file under the root into the report file in the
//! current working directory.

use std::path::PathBuf;

use crate::analyzer::Summarizer;
use crate::cli::ui::Output;
use crate::config::Config;
use crate::constants::report::OUTPUT_FILE;
use crate::types::Result;

pub fn run(path: Option<PathBuf>, config: &Config) -> Result<()> {
    let root = path.unwrap_or_else(|| config.scan.root.clone());
    tracing::debug!(root = %root.display(), "Starting scan");

    Summarizer::new(&root)?.run(OUTPUT_FILE)?;

    Output::new().success(&format!("Code summary saved to {}", OUTPUT_FILE));

    Ok(())
}
