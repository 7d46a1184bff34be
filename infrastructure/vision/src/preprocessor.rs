use business::domain::scan::errors::ScanError;
use business::domain::scan::model::{Frame, ImageVariant, VariantLabel};
use business::domain::scan::services::ImagePreprocessor;

use crate::convert::{frame_to_gray, gray_to_frame};
use crate::filters;

const BINARY_LEVEL: u8 = 127;
const ADAPTIVE_BLOCK_SIZE: usize = 11;
const ADAPTIVE_OFFSET: i32 = 2;
const CLAHE_TILES: u32 = 8;
const CLAHE_CLIP_LIMIT: f32 = 2.0;

/// Builds the eight variants, each filter applied once to the grayscale image.
pub struct FilterPreprocessor;

impl ImagePreprocessor for FilterPreprocessor {
    fn preprocess(&self, frame: &Frame) -> Result<Vec<ImageVariant>, ScanError> {
        let gray = frame_to_gray(frame)?;

        let filtered = [
            (VariantLabel::Blurred, filters::gaussian_blur_5x5(&gray)),
            (
                VariantLabel::AdaptiveThreshold,
                filters::adaptive_threshold_gaussian(&gray, ADAPTIVE_BLOCK_SIZE, ADAPTIVE_OFFSET),
            ),
            (
                VariantLabel::Binary,
                filters::binary_threshold(&gray, BINARY_LEVEL),
            ),
            (VariantLabel::Otsu, filters::otsu_threshold(&gray)),
            (
                VariantLabel::Clahe,
                filters::clahe(&gray, CLAHE_TILES, CLAHE_CLIP_LIMIT),
            ),
            (VariantLabel::Sharpened, filters::sharpen(&gray)),
        ];

        let mut variants = Vec::with_capacity(VariantLabel::ALL.len());
        variants.push(ImageVariant {
            label: VariantLabel::Original,
            frame: frame.clone(),
        });
        variants.push(ImageVariant {
            label: VariantLabel::Grayscale,
            frame: gray_to_frame(gray)?,
        });
        for (label, image) in filtered {
            variants.push(ImageVariant {
                label,
                frame: gray_to_frame(image)?,
            });
        }

        Ok(variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::scan::model::PixelFormat;

    fn rgb_frame(width: u32, height: u32) -> Frame {
        let pixels = (0..width * height * 3).map(|i| (i * 37 % 256) as u8).collect();
        Frame::new(width, height, PixelFormat::Rgb8, pixels).unwrap()
    }

    #[test]
    fn should_produce_eight_variants_in_fixed_order() {
        let variants = FilterPreprocessor.preprocess(&rgb_frame(24, 16)).unwrap();

        let labels: Vec<VariantLabel> = variants.iter().map(|v| v.label).collect();
        assert_eq!(labels, VariantLabel::ALL.to_vec());
    }

    #[test]
    fn should_keep_original_and_make_every_other_variant_single_channel() {
        let frame = rgb_frame(24, 16);

        let variants = FilterPreprocessor.preprocess(&frame).unwrap();

        assert_eq!(variants[0].frame, frame);
        for variant in &variants[1..] {
            assert_eq!(variant.frame.format(), PixelFormat::Luma8);
            assert_eq!(variant.frame.width(), 24);
            assert_eq!(variant.frame.height(), 16);
        }
    }

    #[test]
    fn should_only_emit_black_or_white_for_threshold_variants() {
        let variants = FilterPreprocessor.preprocess(&rgb_frame(24, 16)).unwrap();

        for variant in variants.iter().filter(|v| {
            matches!(
                v.label,
                VariantLabel::AdaptiveThreshold | VariantLabel::Binary | VariantLabel::Otsu
            )
        }) {
            assert!(variant.frame.pixels().iter().all(|&p| p == 0 || p == 255));
        }
    }

    #[test]
    fn should_accept_grayscale_input() {
        let frame = Frame::new(4, 4, PixelFormat::Luma8, vec![200; 16]).unwrap();

        let variants = FilterPreprocessor.preprocess(&frame).unwrap();

        assert_eq!(variants.len(), 8);
        assert_eq!(variants[1].frame.pixels(), frame.pixels());
    }

    #[test]
    fn should_produce_eight_empty_variants_for_empty_frame() {
        let frame = Frame::new(0, 0, PixelFormat::Rgb8, Vec::new()).unwrap();

        let variants = FilterPreprocessor.preprocess(&frame).unwrap();

        assert_eq!(variants.len(), 8);
        assert!(variants.iter().all(|v| v.frame.pixels().is_empty()));
    }
}
