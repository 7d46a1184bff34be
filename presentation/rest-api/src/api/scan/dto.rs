use poem_openapi::Object;

use business::domain::scan::model::{ScanReport, ScannedProduct};

use crate::api::product::dto::ProductInfoResponse;

pub const NO_BARCODE_DETECTED: &str = "No barcode detected";

/// Request to scan an image for barcodes.
#[derive(Debug, Clone, Object)]
pub struct ScanImageRequest {
    /// Base64-encoded image, optionally as a `data:image/...;base64,` URL
    pub image_base64: String,
}

/// One decoded barcode together with its catalog lookup.
#[derive(Debug, Clone, Object)]
pub struct ScanResultResponse {
    /// Decoded payload
    pub barcode: String,
    /// Symbology reported by the decoder, e.g. "QRCODE"
    pub symbol_type: String,
    /// Preprocessing variant that first decoded the symbol
    pub variant: String,
    pub product: ProductInfoResponse,
}

impl From<ScannedProduct> for ScanResultResponse {
    fn from(scanned: ScannedProduct) -> Self {
        Self {
            barcode: scanned.barcode.text,
            symbol_type: scanned.barcode.symbol_type,
            variant: scanned.barcode.variant.to_string(),
            product: scanned.product.into(),
        }
    }
}

/// Scan outcome.
#[derive(Debug, Clone, Object)]
pub struct ScanResponse {
    pub detected: bool,
    pub message: String,
    pub results: Vec<ScanResultResponse>,
}

impl From<ScanReport> for ScanResponse {
    fn from(report: ScanReport) -> Self {
        match report {
            ScanReport::NoBarcodeDetected => Self {
                detected: false,
                message: NO_BARCODE_DETECTED.to_string(),
                results: Vec::new(),
            },
            ScanReport::Detected(results) => Self {
                detected: true,
                message: format!("Detected {} barcode(s)", results.len()),
                results: results.into_iter().map(|r| r.into()).collect(),
            },
        }
    }
}
