//! Grayscale conversion
//!
//! Converts a 3-channel BMP image into a luminance image, the first stage
//! of the skeletonization pipeline.

use tracing::debug;

use crate::image_pipeline::bmp::BmpImage;

// Channel weights over the on-disk (B, G, R) sample order. Fixed for
// behavioral compatibility with the images this pipeline was tuned on.
const BLUE_WEIGHT: f64 = 0.0722;
const GREEN_WEIGHT: f64 = 0.7152;
const RED_WEIGHT: f64 = 0.2126;

/// A BMP image whose three channel samples are equal for every pixel.
///
/// Only [`to_grayscale`] constructs this type, so holding one is proof the
/// luminance invariant holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleImage {
    image: BmpImage,
}

impl GrayscaleImage {
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

    pub fn pixel_count(&self) -> usize {
        self.image.pixel_count()
    }

    /// Luminance at (x, y); all three channels carry the same value.
    pub fn luminance(&self, x: usize, y: usize) -> u8 {
        self.image.sample(x, y, 0)
    }
}

/// Converts every pixel to its weighted luminance, replicated into all
/// three channels. Pure and total over a decoded image.
pub fn to_grayscale(image: &BmpImage) -> GrayscaleImage {
    let mut out = image.clone();
    for pixel in out.data.chunks_exact_mut(3) {
        let luminance = (BLUE_WEIGHT * pixel[0] as f64
            + GREEN_WEIGHT * pixel[1] as f64
            + RED_WEIGHT * pixel[2] as f64)
            .round() as u8;
        pixel[0] = luminance;
        pixel[1] = luminance;
        pixel[2] = luminance;
    }

    debug!(
        width = out.width(),
        height = out.height(),
        "Grayscale conversion complete"
    );

    GrayscaleImage { image: out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_replicated_into_all_channels() {
        // One pure-red and one pure-green pixel, stored as (B, G, R).
        let image = BmpImage::new(2, 1, vec![0, 0, 255, 0, 255, 0]);
        let gray = to_grayscale(&image);

        // round(0.2126 * 255) = 54, round(0.7152 * 255) = 182
        assert_eq!(gray.luminance(0, 0), 54);
        assert_eq!(gray.luminance(1, 0), 182);
        for channel in 0..3 {
            assert_eq!(gray.as_bmp().sample(0, 0, channel), 54);
            assert_eq!(gray.as_bmp().sample(1, 0, channel), 182);
        }
    }

    #[test]
    fn white_stays_white() {
        let image = BmpImage::new(1, 1, vec![255, 255, 255]);
        let gray = to_grayscale(&image);
        assert_eq!(gray.luminance(0, 0), 255);
    }
}
