//! Binarization
//!
//! Applies a threshold to a grayscale image, producing a strictly
//! two-valued image.

use tracing::debug;

use crate::image_pipeline::bmp::BmpImage;
use crate::image_pipeline::grayscale::GrayscaleImage;

/// Background sample value in a binary image.
pub const BACKGROUND: u8 = 0;
/// Foreground sample value in a binary image.
pub const FOREGROUND: u8 = 255;

/// A BMP image whose every sample is [`BACKGROUND`] or [`FOREGROUND`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    image: BmpImage,
}

impl BinaryImage {
    pub(crate) fn from_bmp(image: BmpImage) -> Self {
        Self { image }
    }

    pub fn as_bmp(&self) -> &BmpImage {
        &self.image
    }

    pub fn into_bmp(self) -> BmpImage {
        self.image
    }

    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn height(&self) -> usize {
        self.image.height()
    }

    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.image.sample(x, y, 0) == FOREGROUND
    }
}

/// Pixels with luminance at or below the threshold become background, the
/// rest foreground.
pub fn binarize(image: &GrayscaleImage, threshold: u8) -> BinaryImage {
    let mut out = image.as_bmp().clone();
    for pixel in out.data.chunks_exact_mut(3) {
        let value = if pixel[0] <= threshold {
            BACKGROUND
        } else {
            FOREGROUND
        };
        pixel[0] = value;
        pixel[1] = value;
        pixel[2] = value;
    }

    debug!(threshold, "Binary image created");
    BinaryImage { image: out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::grayscale::to_grayscale;

    #[test]
    fn every_sample_is_two_valued() {
        let data: Vec<u8> = (0..5 * 4 * 3).map(|i| (i * 29 % 256) as u8).collect();
        let gray = to_grayscale(&BmpImage::new(5, 4, data));
        let binary = binarize(&gray, 97);
        assert!(binary
            .as_bmp()
            .data
            .iter()
            .all(|&v| v == BACKGROUND || v == FOREGROUND));
    }

    #[test]
    fn luminance_equal_to_threshold_is_background() {
        let gray = to_grayscale(&BmpImage::new(2, 1, vec![97, 97, 97, 98, 98, 98]));
        let binary = binarize(&gray, 97);
        assert!(!binary.is_foreground(0, 0));
        assert!(binary.is_foreground(1, 0));
    }

    #[test]
    fn threshold_zero_keeps_dim_pixels_foreground() {
        let gray = to_grayscale(&BmpImage::new(1, 1, vec![1, 1, 1]));
        let binary = binarize(&gray, 0);
        assert!(binary.is_foreground(0, 0));
    }
}
