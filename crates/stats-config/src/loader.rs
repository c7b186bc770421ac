//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use stats_common::{Result, StatsError};
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Environment variable overriding `backend.base_url`.
pub const ENV_BACKEND_URL: &str = "STATS_BACKEND_URL";

/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "STATS_LOG_LEVEL";

/// On-disk configuration format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            other => Err(StatsError::config(format!(
                "unsupported config file extension {other:?} for {}",
                path.display()
            ))),
        }
    }

    /// Parses configuration text in this format.
    pub fn parse(self, text: &str) -> Result<Config> {
        match self {
            Self::Toml => toml::from_str(text)
                .map_err(|e| StatsError::config_with_source("invalid TOML configuration", e)),
            Self::Yaml => serde_yaml::from_str(text)
                .map_err(|e| StatsError::config_with_source("invalid YAML configuration", e)),
            Self::Json => Ok(serde_json::from_str(text)?),
        }
    }

    /// Renders configuration in this format.
    pub fn render(self, config: &Config) -> Result<String> {
        match self {
            Self::Toml => toml::to_string_pretty(config)
                .map_err(|e| StatsError::config_with_source("failed to render TOML", e)),
            Self::Yaml => serde_yaml::to_string(config)
                .map_err(|e| StatsError::config_with_source("failed to render YAML", e)),
            Self::Json => Ok(serde_json::to_string_pretty(config)?),
        }
    }
}

/// Configuration loader with atomic file operations.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads and validates configuration from file.
    pub async fn load(&self) -> Result<Config> {
        let format = ConfigFormat::from_path(&self.path)?;
        let text = tokio::fs::read_to_string(&self.path).await?;
        let config = format.parse(&text)?;
        config.validate()?;
        info!(path = %self.path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Saves configuration to file atomically.
    ///
    /// The file is written next to its destination and renamed into place.
    pub async fn save(&self, config: &Config) -> Result<()> {
        let format = ConfigFormat::from_path(&self.path)?;
        let text = format.render(config)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, text.as_bytes()))
            .await
            .map_err(|e| StatsError::config_with_source("config writer task failed", e))??;

        debug!(path = %self.path.display(), "Saved configuration");
        Ok(())
    }

    /// Applies environment overrides from the process environment.
    pub fn apply_env_overrides(config: &mut Config) {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL) {
            debug!(%url, "Overriding backend URL from environment");
            config.backend.base_url = url;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StatsError::Io(e.error))?;
    Ok(())
}
