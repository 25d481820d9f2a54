//! Configuration Management
//!
//! Hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/flutter-summary/config.toml)
//! 3. Project config (./.flutter-summary.toml)
//! 4. Environment variables (FLUTTER_SUMMARY_*)
//! 5. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
