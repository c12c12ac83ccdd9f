use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Complete configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub explore: ExploreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where listings come from
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Mock,
    File,
    Remote,
}

/// Catalog source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: SourceKind,
    /// JSON catalog on disk, used by the `file` source
    #[serde(default)]
    pub path: Option<String>,
    /// JSON catalog endpoint, used by the `remote` source
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            path: None,
            url: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Sizes of the derived views and session limits
#[derive(Debug, Clone, Deserialize)]
pub struct ExploreConfig {
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
    #[serde(default = "default_hot_deals_limit")]
    pub hot_deals_limit: usize,
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Hot deals carousel auto-advance period
    #[serde(default = "default_carousel_interval_ms")]
    pub carousel_interval_ms: u64,
}

fn default_featured_limit() -> usize {
    3
}

fn default_hot_deals_limit() -> usize {
    8
}

fn default_similar_limit() -> usize {
    3
}

fn default_history_capacity() -> usize {
    10
}

fn default_carousel_interval_ms() -> u64 {
    3_500
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
            hot_deals_limit: default_hot_deals_limit(),
            similar_limit: default_similar_limit(),
            history_capacity: default_history_capacity(),
            carousel_interval_ms: default_carousel_interval_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "listing_scout=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ScoutConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ScoutConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}
