use super::errors::ScanError;
use super::model::{Frame, ImageVariant, RawDetection};

/// Service port producing the fixed sequence of preprocessed variants.
pub trait ImagePreprocessor: Send + Sync {
    fn preprocess(&self, frame: &Frame) -> Result<Vec<ImageVariant>, ScanError>;
}

/// Service port for the symbol decoder. Treated as a black box.
pub trait BarcodeDecoder: Send + Sync {
    fn decode(&self, variant: &ImageVariant) -> Vec<RawDetection>;
}

/// Service port turning encoded image bytes (PNG, JPEG, ...) into a frame.
pub trait ImageReader: Send + Sync {
    fn read(&self, bytes: &[u8]) -> Result<Frame, ScanError>;
}
