//! Configuration management for rosterdb
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    DATABASE_FILE, DATA_DIR, DEFAULT_LOG_LEVEL, DEFAULT_PAGE_SIZE, LOCAL_CONFIG_FILE,
    MAX_PAGE_SIZE, XDG_CONFIG_DIR, XDG_CONFIG_FILE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub paging: PagingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite file; the XDG data directory is used when unset
    pub path: Option<PathBuf>,
    /// Keep the roster in memory only (nothing is persisted)
    pub in_memory: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, error or off
    pub level: String,
    /// Log file path; stderr is used when unset
    pub file: Option<PathBuf>,
}

/// Paging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when a caller does not ask for one
    pub default_page_size: u64,
    /// Upper bound applied to requested page sizes
    pub max_page_size: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl DatabaseConfig {
    /// Resolved location of the SQLite file for file-backed stores.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DATA_DIR)
                .join(DATABASE_FILE)
        })
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(XDG_CONFIG_DIR).join(XDG_CONFIG_FILE);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.paging.default_page_size == 0 {
            anyhow::bail!("default_page_size must be at least 1");
        }

        if self.paging.max_page_size < self.paging.default_page_size {
            anyhow::bail!(
                "max_page_size ({}) cannot be smaller than default_page_size ({})",
                self.paging.max_page_size,
                self.paging.default_page_size
            );
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        Ok(())
    }
}
