use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::{CatalogEndpoint, LookupAttempt};
use crate::domain::product::model::ProductInfo;
use crate::domain::product::services::ProductCatalogClient;
use crate::domain::product::use_cases::lookup::{LookupProductParams, LookupProductUseCase};

pub struct LookupProductUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalogClient>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LookupProductUseCase for LookupProductUseCaseImpl {
    async fn execute(&self, params: LookupProductParams) -> ProductInfo {
        let barcode = params.barcode;
        self.logger
            .info(&format!("Looking up product for barcode: {}", barcode));

        for endpoint in CatalogEndpoint::FALLBACK_ORDER {
            let response = self.catalog.fetch(endpoint, &barcode).await;

            match LookupAttempt::from_response(endpoint, response) {
                LookupAttempt::Matched(payload) => {
                    let info = payload.into_product_info(&barcode);
                    self.logger.info(&format!(
                        "Product found for barcode {} via {}: {}",
                        barcode, endpoint, info.name
                    ));
                    return info;
                }
                LookupAttempt::NoMatch => {
                    self.logger.debug(&format!(
                        "No product match for barcode {} via {}",
                        barcode, endpoint
                    ));
                }
                LookupAttempt::Failed(err) => {
                    self.logger.warn(&format!(
                        "Catalog request for barcode {} via {} failed: {}",
                        barcode, endpoint, err
                    ));
                }
            }
        }

        self.logger
            .info(&format!("Product not found for barcode: {}", barcode));
        ProductInfo::not_found(barcode)
    }
}
