use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::product::catalog::CatalogEndpoint;
use business::domain::product::errors::CatalogError;

pub const DEFAULT_WORLD_BASE_URL: &str = "https://world.openfoodfacts.org";
pub const DEFAULT_INDIA_BASE_URL: &str = "https://in.openfoodfacts.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared Open Food Facts HTTP client configuration.
pub struct OpenFoodFactsClient {
    pub client: Client,
    pub world_base_url: String,
    pub india_base_url: String,
}

impl OpenFoodFactsClient {
    /// Every request made through this client is bounded by `timeout`.
    pub fn new(
        world_base_url: String,
        india_base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            world_base_url,
            india_base_url,
        })
    }

    /// Returns the URL of `endpoint` for `barcode`.
    pub fn endpoint_url(
        &self,
        endpoint: CatalogEndpoint,
        barcode: &str,
    ) -> Result<Url, CatalogError> {
        match endpoint {
            CatalogEndpoint::ProductV2 => {
                with_segments(&self.world_base_url, &["api", "v2", "product", barcode])
            }
            CatalogEndpoint::ProductV0 => with_segments(
                &self.world_base_url,
                &["api", "v0", "product", &format!("{}.json", barcode)],
            ),
            CatalogEndpoint::Search => {
                let mut url = with_segments(&self.world_base_url, &["cgi", "search.pl"])?;
                url.query_pairs_mut()
                    .append_pair("search_terms", barcode)
                    .append_pair("search_simple", "1")
                    .append_pair("action", "process")
                    .append_pair("json", "1");
                Ok(url)
            }
            CatalogEndpoint::RegionalIndia => with_segments(
                &self.india_base_url,
                &["api", "v0", "product", &format!("{}.json", barcode)],
            ),
        }
    }
}

fn with_segments(base: &str, segments: &[&str]) -> Result<Url, CatalogError> {
    let mut url = Url::parse(base).map_err(|e| CatalogError::Transport(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| CatalogError::Transport(format!("{} cannot be a base url", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenFoodFactsClient {
        OpenFoodFactsClient::new(
            DEFAULT_WORLD_BASE_URL.to_string(),
            DEFAULT_INDIA_BASE_URL.to_string(),
            DEFAULT_TIMEOUT,
        )
        .unwrap()
    }

    #[test]
    fn should_build_each_endpoint_url() {
        let client = client();
        let url = |endpoint| client.endpoint_url(endpoint, "3017620422003").unwrap().to_string();

        assert_eq!(
            url(CatalogEndpoint::ProductV2),
            "https://world.openfoodfacts.org/api/v2/product/3017620422003"
        );
        assert_eq!(
            url(CatalogEndpoint::ProductV0),
            "https://world.openfoodfacts.org/api/v0/product/3017620422003.json"
        );
        assert_eq!(
            url(CatalogEndpoint::Search),
            "https://world.openfoodfacts.org/cgi/search.pl?search_terms=3017620422003&search_simple=1&action=process&json=1"
        );
        assert_eq!(
            url(CatalogEndpoint::RegionalIndia),
            "https://in.openfoodfacts.org/api/v0/product/3017620422003.json"
        );
    }

    #[test]
    fn should_percent_encode_barcode_text() {
        let client = client();

        let product = client
            .endpoint_url(CatalogEndpoint::ProductV2, "a/b c")
            .unwrap();
        let search = client
            .endpoint_url(CatalogEndpoint::Search, "a&b")
            .unwrap();

        assert_eq!(product.path(), "/api/v2/product/a%2Fb%20c");
        assert_eq!(search.query(), Some("search_terms=a%26b&search_simple=1&action=process&json=1"));
    }

    #[test]
    fn should_reject_unusable_base_url() {
        let client = OpenFoodFactsClient::new(
            "not a url".to_string(),
            DEFAULT_INDIA_BASE_URL.to_string(),
            DEFAULT_TIMEOUT,
        )
        .unwrap();

        let result = client.endpoint_url(CatalogEndpoint::ProductV0, "123");

        assert!(matches!(result, Err(CatalogError::Transport(_))));
    }
}
