//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/flutter-summary/config.toml)
//! 3. Project config (./.flutter-summary.toml)
//! 4. Environment variables (FLUTTER_SUMMARY_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::constants::config::{APP_DIR, ENV_PREFIX, PROJECT_FILE};
use crate::types::{Result, SummaryError};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for source in Self::sources() {
            figment = figment.merge(Toml::file(&source));
        }

        // e.g. FLUTTER_SUMMARY_LOG_LEVEL -> log.level
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split('_').lowercase(true));

        Self::extract(figment)
    }

    /// Config files that exist, in merge order (global, then project)
    pub fn sources() -> Vec<PathBuf> {
        existing_sources(Self::global_config_path(), Self::project_config_path())
    }

    /// Log the config files `load` merged. The subscriber is installed after
    /// loading, so this runs once logging is up.
    pub fn log_sources() {
        for source in Self::sources() {
            debug!("Loaded config from: {}", source.display());
        }
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path));

        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| SummaryError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/flutter-summary/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join(APP_DIR))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Render a configuration as pretty JSON or TOML
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| SummaryError::Config(e.to_string()))
        }
    }

    /// Show current effective configuration
    pub fn show_config(as_json: bool) -> Result<()> {
        let config = Self::load()?;
        println!("{}", Self::render(&config, as_json)?);
        Ok(())
    }
}

fn existing_sources(global: Option<PathBuf>, project: PathBuf) -> Vec<PathBuf> {
    global
        .into_iter()
        .chain(std::iter::once(project))
        .filter(|path| path.exists())
        .collect()
}
