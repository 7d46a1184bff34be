use rxing::BarcodeFormat;

use business::domain::scan::model::{ImageVariant, RawDetection};
use business::domain::scan::services::BarcodeDecoder;

use crate::convert::frame_to_gray;

/// Multi-format decoder backed by rxing: EAN/UPC, Code 39/93/128, ITF and
/// the 2D symbologies. Symbol types use the zbar-style names ("EAN13",
/// "UPCA", "CODE128", "QRCODE", ...).
pub struct RxingDecoder;

impl BarcodeDecoder for RxingDecoder {
    fn decode(&self, variant: &ImageVariant) -> Vec<RawDetection> {
        let Ok(gray) = frame_to_gray(&variant.frame) else {
            return Vec::new();
        };
        let (width, height) = gray.dimensions();
        if width == 0 || height == 0 {
            return Vec::new();
        }

        // rxing reports "nothing found" as an error.
        let Ok(results) = rxing::helpers::detect_multiple_in_luma(gray.into_raw(), width, height)
        else {
            return Vec::new();
        };

        results
            .iter()
            .map(|result| RawDetection {
                symbol_type: symbol_type(result.getBarcodeFormat()),
                payload: result.getText().as_bytes().to_vec(),
            })
            .collect()
    }
}

fn symbol_type(format: &BarcodeFormat) -> String {
    let name = match format {
        BarcodeFormat::EAN_13 => "EAN13",
        BarcodeFormat::EAN_8 => "EAN8",
        BarcodeFormat::UPC_A => "UPCA",
        BarcodeFormat::UPC_E => "UPCE",
        BarcodeFormat::CODE_128 => "CODE128",
        BarcodeFormat::CODE_93 => "CODE93",
        BarcodeFormat::CODE_39 => "CODE39",
        BarcodeFormat::CODABAR => "CODABAR",
        BarcodeFormat::ITF => "I25",
        BarcodeFormat::QR_CODE => "QRCODE",
        BarcodeFormat::DATA_MATRIX => "DATAMATRIX",
        BarcodeFormat::PDF_417 => "PDF417",
        other => return format!("{:?}", other).replace('_', ""),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{DecoderChain, QrDecoder};
    use crate::preprocessor::FilterPreprocessor;
    use business::domain::scan::model::{Frame, PixelFormat, VariantLabel};
    use business::domain::scan::services::ImagePreprocessor;
    use image::{GrayImage, Luma};
    use std::sync::Arc;

    const L_CODES: [&str; 10] = [
        "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
        "0110111", "0001011",
    ];
    const G_CODES: [&str; 10] = [
        "0100111", "0110011", "0011011", "0100001", "0011101", "0111001", "0000101", "0010001",
        "0001001", "0010111",
    ];
    const R_CODES: [&str; 10] = [
        "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
        "1001000", "1110100",
    ];
    /// Left-half parity per leading digit, `G` marks even parity.
    const PARITY: [&str; 10] = [
        "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
        "LGGLGL",
    ];

    /// The 95 modules of an EAN-13 symbol, `1` for a bar.
    fn ean13_modules(code: &str) -> String {
        let digits: Vec<usize> = code
            .chars()
            .map(|c| c.to_digit(10).unwrap() as usize)
            .collect();
        let parity = PARITY[digits[0]].as_bytes();

        let mut modules = String::from("101");
        for (i, &d) in digits[1..7].iter().enumerate() {
            modules.push_str(if parity[i] == b'G' { G_CODES[d] } else { L_CODES[d] });
        }
        modules.push_str("01010");
        for &d in &digits[7..13] {
            modules.push_str(R_CODES[d]);
        }
        modules.push_str("101");
        modules
    }

    /// Black bars on white, `module` px per module and `quiet` px margins.
    fn render_ean13(code: &str, module: u32, quiet: u32, height: u32) -> Frame {
        let modules = ean13_modules(code).into_bytes();
        let width = modules.len() as u32 * module + 2 * quiet;
        let image = GrayImage::from_fn(width, height, |x, _| {
            let bar = x >= quiet
                && x < width - quiet
                && modules[((x - quiet) / module) as usize] == b'1';
            Luma([if bar { 0 } else { 255 }])
        });
        Frame::new(width, height, PixelFormat::Luma8, image.into_raw()).unwrap()
    }

    #[test]
    fn should_render_ean13_with_95_modules() {
        assert_eq!(ean13_modules("5449000000996").len(), 95);
    }

    #[test]
    fn should_decode_rendered_ean13() {
        let variant = ImageVariant {
            label: VariantLabel::Original,
            frame: render_ean13("5449000000996", 4, 40, 200),
        };

        let detections = RxingDecoder.decode(&variant);

        assert!(detections.iter().any(|d| d.symbol_type == "EAN13"
            && d.payload == b"5449000000996"));
    }

    #[test]
    fn should_find_ean13_in_preprocessed_variants_through_the_chain() {
        let frame = render_ean13("5449000000996", 4, 40, 200);
        let chain = DecoderChain::new(vec![Arc::new(RxingDecoder), Arc::new(QrDecoder)]);

        let variants = FilterPreprocessor.preprocess(&frame).unwrap();
        let hits = variants
            .iter()
            .filter(|variant| {
                chain
                    .decode(variant)
                    .iter()
                    .any(|d| d.symbol_type == "EAN13" && d.payload == b"5449000000996")
            })
            .count();

        assert!(hits > 0);
    }

    #[test]
    fn should_find_nothing_in_a_blank_image() {
        let variant = ImageVariant {
            label: VariantLabel::Grayscale,
            frame: Frame::new(64, 64, PixelFormat::Luma8, vec![255; 64 * 64]).unwrap(),
        };

        assert!(RxingDecoder.decode(&variant).is_empty());
    }

    #[test]
    fn should_name_symbologies_like_zbar() {
        assert_eq!(symbol_type(&BarcodeFormat::EAN_13), "EAN13");
        assert_eq!(symbol_type(&BarcodeFormat::UPC_A), "UPCA");
        assert_eq!(symbol_type(&BarcodeFormat::CODE_128), "CODE128");
        assert_eq!(symbol_type(&BarcodeFormat::QR_CODE), "QRCODE");
    }
}
