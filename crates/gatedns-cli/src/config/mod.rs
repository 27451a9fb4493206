//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Registry (Gate) API base URL.
    pub registry_url: Option<String>,

    /// DNS provider API base URL.
    pub dns_url: Option<String>,

    /// Organization DNS domain.
    pub domain: Option<String>,

    /// TTL for created CNAME records, in seconds.
    pub record_ttl: Option<u32>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "gogoair", "gatedns")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }
}
