use async_trait::async_trait;

use super::errors::ProductError;

/// A concrete product variant as known to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductConcrete {
    pub sku: String,
    pub abstract_product_id: i64,
}

/// Service port for resolving concrete products by SKU.
///
/// The catalog itself lives outside this crate; the aggregation engine
/// only calls this when a brand-new line item has to be created.
#[async_trait]
pub trait ProductLookupService: Send + Sync {
    async fn find_by_sku(&self, sku: &str) -> Result<ProductConcrete, ProductError>;
}
