use async_trait::async_trait;

use business::domain::product::catalog::{CatalogEndpoint, CatalogResponse};
use business::domain::product::errors::CatalogError;
use business::domain::product::services::ProductCatalogClient;

use crate::client::OpenFoodFactsClient;
use crate::response::OpenFoodFactsResponse;

pub struct ProductCatalogOpenFoodFacts {
    client: OpenFoodFactsClient,
}

impl ProductCatalogOpenFoodFacts {
    pub fn new(client: OpenFoodFactsClient) -> Self {
        Self { client }
    }

    fn map_error(err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout
        } else if err.is_decode() {
            CatalogError::InvalidJson(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ProductCatalogClient for ProductCatalogOpenFoodFacts {
    /// The HTTP status is not inspected: the catalog answers misses with a
    /// JSON body too, and the body alone decides whether it matched. Bodies
    /// that are not JSON objects count as invalid JSON.
    async fn fetch(
        &self,
        endpoint: CatalogEndpoint,
        barcode: &str,
    ) -> Result<CatalogResponse, CatalogError> {
        let url = self.client.endpoint_url(endpoint, barcode)?;

        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::map_error)?;

        let body = response
            .json::<OpenFoodFactsResponse>()
            .await
            .map_err(Self::map_error)?;

        Ok(body.into())
    }
}
