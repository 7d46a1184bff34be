use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::DecodedBarcode;
use crate::domain::scan::services::{BarcodeDecoder, ImagePreprocessor};
use crate::domain::scan::use_cases::detect::{DetectBarcodesParams, DetectBarcodesUseCase};

pub struct DetectBarcodesUseCaseImpl {
    pub preprocessor: Arc<dyn ImagePreprocessor>,
    pub decoder: Arc<dyn BarcodeDecoder>,
    pub logger: Arc<dyn Logger>,
}

impl DetectBarcodesUseCase for DetectBarcodesUseCaseImpl {
    fn execute(&self, params: DetectBarcodesParams) -> Result<Vec<DecodedBarcode>, ScanError> {
        let variants = self.preprocessor.preprocess(&params.frame)?;

        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut barcodes = Vec::new();

        for variant in &variants {
            let detections = self.decoder.decode(variant);
            self.logger.debug(&format!(
                "Variant {} yielded {} symbol(s)",
                variant.label,
                detections.len()
            ));

            for detection in detections {
                let barcode = DecodedBarcode::from_detection(detection, variant.label);
                let (symbol_type, text) = barcode.identity();
                // First variant to decode a symbol keeps it.
                if seen.insert((symbol_type.to_string(), text.to_string())) {
                    barcodes.push(barcode);
                }
            }
        }

        self.logger.info(&format!(
            "Detected {} unique barcode(s) across {} variants",
            barcodes.len(),
            variants.len()
        ));

        Ok(barcodes)
    }
}
