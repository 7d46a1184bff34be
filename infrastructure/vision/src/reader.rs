use business::domain::scan::errors::ScanError;
use business::domain::scan::model::{Frame, PixelFormat};
use business::domain::scan::services::ImageReader;

/// Decodes any format the `image` crate recognises into an RGB frame.
pub struct ImageCrateReader;

impl ImageReader for ImageCrateReader {
    fn read(&self, bytes: &[u8]) -> Result<Frame, ScanError> {
        let decoded = image::load_from_memory(bytes).map_err(|_| ScanError::UnsupportedImage)?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        Frame::new(width, height, PixelFormat::Rgb8, rgb.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn should_read_png_into_rgb_frame() {
        let image = RgbaImage::from_pixel(5, 3, Rgba([10, 20, 30, 128]));

        let frame = ImageCrateReader
            .read(&png_bytes(DynamicImage::ImageRgba8(image)))
            .unwrap();

        assert_eq!(frame.width(), 5);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.format(), PixelFormat::Rgb8);
        assert_eq!(&frame.pixels()[..3], &[10, 20, 30]);
    }

    #[test]
    fn should_reject_bytes_that_are_not_an_image() {
        let result = ImageCrateReader.read(b"definitely not a picture");

        assert_eq!(result.unwrap_err(), ScanError::UnsupportedImage);
    }
}
