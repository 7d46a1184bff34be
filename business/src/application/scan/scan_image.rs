use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::use_cases::lookup::{LookupProductParams, LookupProductUseCase};
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::{ScanReport, ScannedProduct};
use crate::domain::scan::services::ImageReader;
use crate::domain::scan::use_cases::detect::{DetectBarcodesParams, DetectBarcodesUseCase};
use crate::domain::scan::use_cases::scan_image::{ScanImageParams, ScanImageUseCase};

pub struct ScanImageUseCaseImpl {
    pub reader: Arc<dyn ImageReader>,
    pub detector: Arc<dyn DetectBarcodesUseCase>,
    pub lookup: Arc<dyn LookupProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanImageUseCase for ScanImageUseCaseImpl {
    async fn execute(&self, params: ScanImageParams) -> Result<ScanReport, ScanError> {
        self.logger.info(&format!(
            "Scanning image ({} bytes)",
            params.image.len()
        ));

        let reader = Arc::clone(&self.reader);
        let detector = Arc::clone(&self.detector);
        let image = params.image;
        // Decoding and the variant sweep are CPU-bound; keep them off the async workers.
        let barcodes = tokio::task::spawn_blocking(move || {
            let frame = reader.read(&image)?;
            detector.execute(DetectBarcodesParams { frame })
        })
        .await
        .map_err(|err| {
            self.logger
                .error(&format!("Barcode detection task failed: {}", err));
            ScanError::DetectionAborted
        })??;

        if barcodes.is_empty() {
            self.logger.info("No barcode detected");
            return Ok(ScanReport::NoBarcodeDetected);
        }

        // Lookups run one after another, never concurrently.
        let mut results = Vec::with_capacity(barcodes.len());
        for barcode in barcodes {
            let product = self
                .lookup
                .execute(LookupProductParams {
                    barcode: barcode.text.clone(),
                })
                .await;
            results.push(ScannedProduct { barcode, product });
        }

        Ok(ScanReport::Detected(results))
    }
}
