use image::{GrayImage, RgbImage};

use business::domain::scan::errors::ScanError;
use business::domain::scan::model::{Frame, PixelFormat};

/// Single-channel view of a frame; color frames go through BT.601 luma.
pub fn frame_to_gray(frame: &Frame) -> Result<GrayImage, ScanError> {
    match frame.format() {
        PixelFormat::Luma8 => {
            GrayImage::from_raw(frame.width(), frame.height(), frame.pixels().to_vec())
                .ok_or(ScanError::InvalidFrame)
        }
        PixelFormat::Rgb8 => {
            let rgb = RgbImage::from_raw(frame.width(), frame.height(), frame.pixels().to_vec())
                .ok_or(ScanError::InvalidFrame)?;
            Ok(crate::filters::grayscale(&rgb))
        }
    }
}

pub fn gray_to_frame(image: GrayImage) -> Result<Frame, ScanError> {
    let (width, height) = image.dimensions();
    Frame::new(width, height, PixelFormat::Luma8, image.into_raw())
}
