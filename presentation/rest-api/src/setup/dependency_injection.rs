use std::sync::Arc;

use logger::TracingLogger;
use openfoodfacts::client::OpenFoodFactsClient;
use openfoodfacts::product_catalog::ProductCatalogOpenFoodFacts;
use vision::decoder::{DecoderChain, QrDecoder};
use vision::preprocessor::FilterPreprocessor;
use vision::reader::ImageCrateReader;
use vision::rxing_decoder::RxingDecoder;

use business::application::product::lookup::LookupProductUseCaseImpl;
use business::application::scan::detect::DetectBarcodesUseCaseImpl;
use business::application::scan::scan_image::ScanImageUseCaseImpl;
use business::domain::scan::services::BarcodeDecoder;

use crate::config::openfoodfacts_config::OpenFoodFactsConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub scan_api: crate::api::scan::routes::ScanApi,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(catalog_config: &OpenFoodFactsConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog_client = OpenFoodFactsClient::new(
            catalog_config.world_base_url.clone(),
            catalog_config.india_base_url.clone(),
            catalog_config.timeout,
        )?;
        let catalog = Arc::new(ProductCatalogOpenFoodFacts::new(catalog_client));
        let preprocessor = Arc::new(FilterPreprocessor);
        // rxing covers the retail 1D symbologies; rqrr is a second QR reader.
        let decoders: Vec<Arc<dyn BarcodeDecoder>> =
            vec![Arc::new(RxingDecoder), Arc::new(QrDecoder)];
        let decoder = Arc::new(DecoderChain::new(decoders));
        let reader = Arc::new(ImageCrateReader);

        // Product use cases
        let lookup_use_case = Arc::new(LookupProductUseCaseImpl {
            catalog,
            logger: logger.clone(),
        });

        // Scan use cases
        let detect_use_case = Arc::new(DetectBarcodesUseCaseImpl {
            preprocessor,
            decoder,
            logger: logger.clone(),
        });
        let scan_use_case = Arc::new(ScanImageUseCaseImpl {
            reader,
            detector: detect_use_case,
            lookup: lookup_use_case.clone(),
            logger,
        });

        let scan_api = crate::api::scan::routes::ScanApi::new(scan_use_case);
        let product_api = crate::api::product::routes::ProductApi::new(lookup_use_case);

        Ok(Self {
            health_api,
            scan_api,
            product_api,
        })
    }
}
