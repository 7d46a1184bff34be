use crate::domain::product::model::ProductInfo;

use super::errors::ScanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Luma8,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Luma8 => 1,
        }
    }
}

/// Packed row-major pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self, ScanError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(format.channels()))
            .ok_or(ScanError::InvalidFrame)?;

        if pixels.len() != expected {
            return Err(ScanError::InvalidFrame);
        }

        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Preprocessing variants, in the order they are produced and decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantLabel {
    Original,
    Grayscale,
    Blurred,
    AdaptiveThreshold,
    Binary,
    Otsu,
    Clahe,
    Sharpened,
}

impl VariantLabel {
    pub const ALL: [VariantLabel; 8] = [
        VariantLabel::Original,
        VariantLabel::Grayscale,
        VariantLabel::Blurred,
        VariantLabel::AdaptiveThreshold,
        VariantLabel::Binary,
        VariantLabel::Otsu,
        VariantLabel::Clahe,
        VariantLabel::Sharpened,
    ];
}

impl std::fmt::Display for VariantLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantLabel::Original => write!(f, "original"),
            VariantLabel::Grayscale => write!(f, "grayscale"),
            VariantLabel::Blurred => write!(f, "blurred"),
            VariantLabel::AdaptiveThreshold => write!(f, "adaptive_threshold"),
            VariantLabel::Binary => write!(f, "binary"),
            VariantLabel::Otsu => write!(f, "otsu"),
            VariantLabel::Clahe => write!(f, "clahe"),
            VariantLabel::Sharpened => write!(f, "sharpened"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageVariant {
    pub label: VariantLabel,
    pub frame: Frame,
}

/// One symbol as reported by the decoder, before text conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDetection {
    pub symbol_type: String,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBarcode {
    pub symbol_type: String,
    pub text: String,
    /// Variant the barcode was first decoded from.
    pub variant: VariantLabel,
}

impl DecodedBarcode {
    pub fn from_detection(detection: RawDetection, variant: VariantLabel) -> Self {
        Self {
            symbol_type: detection.symbol_type,
            text: decode_payload(&detection.payload),
            variant,
        }
    }

    pub fn identity(&self) -> (&str, &str) {
        (&self.symbol_type, &self.text)
    }
}

/// Converts a payload to text, dropping byte sequences that are not valid UTF-8.
pub fn decode_payload(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[derive(Debug, Clone)]
pub struct ScannedProduct {
    pub barcode: DecodedBarcode,
    pub product: ProductInfo,
}

#[derive(Debug, Clone)]
pub enum ScanReport {
    NoBarcodeDetected,
    Detected(Vec<ScannedProduct>),
}
