use crate::catalog::{Catalog, CatalogSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Catalog stored as a JSON document on disk
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Catalog> {
        info!("Reading catalog from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        debug!("Read {} bytes of catalog JSON", json.len());

        let catalog: Catalog = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        info!("✅ Loaded {} properties from file", catalog.len());
        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
