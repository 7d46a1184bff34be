use std::sync::Arc;

use rqrr::PreparedImage;

use business::domain::scan::model::{ImageVariant, RawDetection};
use business::domain::scan::services::BarcodeDecoder;

use crate::convert::frame_to_gray;

pub const QR_SYMBOL_TYPE: &str = "QRCODE";

/// QR decoder backed by rqrr. Every grid found in the variant is decoded;
/// grids that fail error correction are skipped.
pub struct QrDecoder;

impl BarcodeDecoder for QrDecoder {
    fn decode(&self, variant: &ImageVariant) -> Vec<RawDetection> {
        let Ok(gray) = frame_to_gray(&variant.frame) else {
            return Vec::new();
        };
        if gray.width() == 0 || gray.height() == 0 {
            return Vec::new();
        }

        let mut prepared = PreparedImage::prepare(gray);
        prepared
            .detect_grids()
            .into_iter()
            .filter_map(|grid| {
                let mut payload = Vec::new();
                grid.decode_to(&mut payload).ok()?;
                Some(RawDetection {
                    symbol_type: QR_SYMBOL_TYPE.to_string(),
                    payload,
                })
            })
            .collect()
    }
}

/// Runs several decoders over the same variant and concatenates their
/// detections in decoder order. Duplicates are left to the caller.
pub struct DecoderChain {
    decoders: Vec<Arc<dyn BarcodeDecoder>>,
}

impl DecoderChain {
    pub fn new(decoders: Vec<Arc<dyn BarcodeDecoder>>) -> Self {
        Self { decoders }
    }
}

impl BarcodeDecoder for DecoderChain {
    fn decode(&self, variant: &ImageVariant) -> Vec<RawDetection> {
        self.decoders
            .iter()
            .flat_map(|decoder| decoder.decode(variant))
            .collect()
    }
}
