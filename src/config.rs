// src/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote dataset and HTTP behavior settings
    #[serde(default)]
    pub source: SourceConfig,

    /// In-memory dataset cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Windowing (page / infinite scroll) settings
    #[serde(default)]
    pub view: ViewConfig,

    /// Export output settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.base_url.trim().is_empty() {
            return Err(AppError::validation("source.base_url is empty"));
        }
        if !self.source.base_url.starts_with("http") {
            return Err(AppError::validation("source.base_url must be an HTTP URL"));
        }
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        if self.source.max_pages == 0 {
            return Err(AppError::validation("source.max_pages must be > 0"));
        }
        if self.view.page_size == 0 {
            return Err(AppError::validation("view.page_size must be > 0"));
        }
        if self.view.infinite_batch == 0 {
            return Err(AppError::validation("view.infinite_batch must be > 0"));
        }
        if self.export.csv_basename.trim().is_empty() {
            return Err(AppError::validation("export.csv_basename is empty"));
        }
        Ok(())
    }
}

/// Remote dataset endpoint and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the paginated job listing endpoint
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Hard ceiling on pages fetched per ingestion (runaway-source guard)
    #[serde(default = "defaults::max_pages")]
    pub max_pages: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_pages: defaults::max_pages(),
        }
    }
}

/// Dataset cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live for the cached dataset, in seconds
    #[serde(default = "defaults::cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: defaults::cache_ttl(),
        }
    }
}

/// Windowing settings for both view modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Records per page in pagination mode
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// Increment for the growable prefix in infinite mode
    #[serde(default = "defaults::infinite_batch")]
    pub infinite_batch: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
            infinite_batch: defaults::infinite_batch(),
        }
    }
}

/// Export output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Basename for the delimited text export (extension is appended)
    #[serde(default = "defaults::csv_basename")]
    pub csv_basename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_basename: defaults::csv_basename(),
        }
    }
}

mod defaults {
    // Source defaults
    pub fn base_url() -> String {
        "https://jsonfakery.com/jobs/paginated".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; Windmark/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_pages() -> u32 {
        10
    }

    // Cache defaults
    pub fn cache_ttl() -> u64 {
        5 * 60
    }

    // View defaults
    pub fn page_size() -> usize {
        9
    }
    pub fn infinite_batch() -> usize {
        9
    }

    // Export defaults
    pub fn csv_basename() -> String {
        "filtered-jobs".into()
    }
}
