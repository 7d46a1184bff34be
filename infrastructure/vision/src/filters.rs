//! Fixed-parameter image filters used to build the preprocessing variants.
//!
//! All filters take and return 8-bit single-channel images and keep the
//! input dimensions. Zero-sized inputs produce zero-sized outputs.
//!
//! Thresholding, Otsu and the sharpen kernel come from imageproc. The blur,
//! the Gaussian adaptive threshold and CLAHE follow OpenCV's border handling
//! and kernel derivation, which imageproc does not offer.

use image::{GrayImage, Luma, RgbImage};
use imageproc::contrast::{self, ThresholdType};
use imageproc::filter::filter3x3;

/// Binomial 5-tap kernel, the Gaussian OpenCV derives for a 5x5 window.
const BLUR_KERNEL_5: [f32; 5] = [1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0];

const SHARPEN_KERNEL: [i32; 9] = [-1, -1, -1, -1, 9, -1, -1, -1, -1];

#[derive(Debug, Clone, Copy)]
enum Border {
    /// `gfedcb|abcdefgh|gfedcba`
    Reflect101,
    /// `aaaaaa|abcdefgh|hhhhhhh`
    Replicate,
}

fn border_index(i: i64, len: u32, border: Border) -> u32 {
    let len = len as i64;
    if len == 1 {
        return 0;
    }
    let index = match border {
        Border::Replicate => i.clamp(0, len - 1),
        Border::Reflect101 => {
            let period = 2 * (len - 1);
            let folded = i.rem_euclid(period);
            if folded >= len { period - folded } else { folded }
        }
    };
    index as u32
}

fn saturate(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// ITU-R BT.601 luma in 14-bit fixed point.
pub fn grayscale(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = (r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + (1 << 13)) >> 14;
        Luma([luma as u8])
    })
}

fn gaussian_kernel(size: usize, sigma: f32) -> Vec<f32> {
    let center = (size / 2) as f32;
    let weights: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let total: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Horizontal then vertical pass of the same 1-D kernel.
fn separable_filter(src: &GrayImage, kernel: &[f32], border: Border) -> GrayImage {
    let (w, h) = src.dimensions();
    let radius = (kernel.len() / 2) as i64;

    let mut horizontal = vec![0f32; (w as usize) * (h as usize)];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = border_index(x as i64 + k as i64 - radius, w, border);
                acc += weight * src.get_pixel(sx, y).0[0] as f32;
            }
            horizontal[(y * w + x) as usize] = acc;
        }
    }

    GrayImage::from_fn(w, h, |x, y| {
        let mut acc = 0f32;
        for (k, weight) in kernel.iter().enumerate() {
            let sy = border_index(y as i64 + k as i64 - radius, h, border);
            acc += weight * horizontal[(sy * w + x) as usize];
        }
        Luma([saturate(acc)])
    })
}

/// 5x5 Gaussian blur.
pub fn gaussian_blur_5x5(src: &GrayImage) -> GrayImage {
    separable_filter(src, &BLUR_KERNEL_5, Border::Reflect101)
}

/// Gaussian-weighted local threshold: a pixel turns white when it is
/// strictly brighter than its neighbourhood mean minus `c`.
pub fn adaptive_threshold_gaussian(src: &GrayImage, block_size: usize, c: i32) -> GrayImage {
    let sigma = 0.3 * ((block_size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let mean = separable_filter(src, &gaussian_kernel(block_size, sigma), Border::Replicate);

    GrayImage::from_fn(src.width(), src.height(), |x, y| {
        let pixel = src.get_pixel(x, y).0[0] as i32;
        let local = mean.get_pixel(x, y).0[0] as i32 - c;
        Luma([if pixel > local { 255 } else { 0 }])
    })
}

/// Pixels strictly above `threshold` become 255, the rest 0.
pub fn binary_threshold(src: &GrayImage, threshold: u8) -> GrayImage {
    contrast::threshold(src, threshold, ThresholdType::Binary)
}

/// Threshold maximising the between-class variance of the histogram.
pub fn otsu_level(src: &GrayImage) -> u8 {
    if src.width() == 0 || src.height() == 0 {
        return 0;
    }
    contrast::otsu_level(src)
}

pub fn otsu_threshold(src: &GrayImage) -> GrayImage {
    binary_threshold(src, otsu_level(src))
}

/// Contrast-limited adaptive histogram equalization over a `tiles x tiles` grid.
pub fn clahe(src: &GrayImage, tiles: u32, clip_limit: f32) -> GrayImage {
    let (w, h) = src.dimensions();
    if w == 0 || h == 0 || tiles == 0 {
        return src.clone();
    }

    let tile_w = w.div_ceil(tiles);
    let tile_h = h.div_ceil(tiles);
    // Small images collapse the grid so that no tile is empty.
    let tiles_x = w.div_ceil(tile_w);
    let tiles_y = h.div_ceil(tile_h);
    let mut luts = vec![[0u8; 256]; (tiles_x * tiles_y) as usize];

    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let x0 = tx * tile_w;
            let x1 = ((tx + 1) * tile_w).min(w);
            let y0 = ty * tile_h;
            let y1 = ((ty + 1) * tile_h).min(h);
            let area = ((x1 - x0) * (y1 - y0)) as u64;

            let mut hist = [0u64; 256];
            for y in y0..y1 {
                for x in x0..x1 {
                    hist[src.get_pixel(x, y).0[0] as usize] += 1;
                }
            }

            let clip = ((clip_limit * area as f32 / 256.0) as u64).max(1);
            let mut excess = 0u64;
            for bin in hist.iter_mut() {
                if *bin > clip {
                    excess += *bin - clip;
                    *bin = clip;
                }
            }
            let per_bin = excess / 256;
            let remainder = (excess % 256) as usize;
            for (i, bin) in hist.iter_mut().enumerate() {
                *bin += per_bin;
                if i < remainder {
                    *bin += 1;
                }
            }

            let lut = &mut luts[(ty * tiles_x + tx) as usize];
            let scale = 255.0 / area as f32;
            let mut cdf = 0u64;
            for (i, count) in hist.iter().enumerate() {
                cdf += count;
                lut[i] = saturate(cdf as f32 * scale);
            }
        }
    }

    let tile_index = |i: f32, count: u32| (i.floor() as i64).clamp(0, count as i64 - 1) as u32;

    GrayImage::from_fn(w, h, |x, y| {
        let pixel = src.get_pixel(x, y).0[0] as usize;

        let fx = (x as f32 + 0.5) / tile_w as f32 - 0.5;
        let fy = (y as f32 + 0.5) / tile_h as f32 - 0.5;
        let (tx0, tx1) = (tile_index(fx, tiles_x), tile_index(fx + 1.0, tiles_x));
        let (ty0, ty1) = (tile_index(fy, tiles_y), tile_index(fy + 1.0, tiles_y));
        let ax = fx - fx.floor();
        let ay = fy - fy.floor();

        let at = |tx: u32, ty: u32| luts[(ty * tiles_x + tx) as usize][pixel] as f32;
        let top = at(tx0, ty0) * (1.0 - ax) + at(tx1, ty0) * ax;
        let bottom = at(tx0, ty1) * (1.0 - ax) + at(tx1, ty1) * ax;

        Luma([saturate(top * (1.0 - ay) + bottom * ay)])
    })
}

/// 3x3 edge-enhancing sharpen. Borders replicate the edge pixel.
pub fn sharpen(src: &GrayImage) -> GrayImage {
    if src.width() == 0 || src.height() == 0 {
        return src.clone();
    }
    filter3x3::<_, i32, u8>(src, &SHARPEN_KERNEL)
}
