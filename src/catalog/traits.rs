use crate::catalog::Catalog;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply a catalog.
/// The explore engine never cares where the listings came from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full catalog
    async fn load(&self) -> Result<Catalog>;

    /// Short name used in logs
    fn source_name(&self) -> &'static str;
}
