use async_trait::async_trait;

use super::catalog::{CatalogEndpoint, CatalogResponse};
use super::errors::CatalogError;

/// Service port for fetching one catalog endpoint.
///
/// Implementations issue a single GET bounded by their timeout and never retry.
#[async_trait]
pub trait ProductCatalogClient: Send + Sync {
    async fn fetch(
        &self,
        endpoint: CatalogEndpoint,
        barcode: &str,
    ) -> Result<CatalogResponse, CatalogError>;
}
