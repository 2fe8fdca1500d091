use tracing::debug;

use crate::image_pipeline::grayscale::GrayscaleImage;
use crate::image_pipeline::threshold::histogram::{histogram_of, Histogram};

/// Selects the threshold maximizing between-class variance.
///
/// Levels are scanned in ascending order; the comparison is strict, so on a
/// flat variance plateau the lowest level wins. A histogram whose mass sits
/// in a single bin yields 0: foreground weight hits zero before any split
/// is scored.
pub fn otsu_threshold(histogram: &Histogram, pixel_count: u64) -> u8 {
    let total = pixel_count as f64;
    let total_sum: f64 = histogram
        .bins()
        .iter()
        .enumerate()
        .map(|(level, &count)| level as f64 * count as f64)
        .sum();

    let mut weight_background = 0.0;
    let mut sum_background = 0.0;
    let mut var_max = 0.0;
    let mut threshold = 0u8;

    for (level, &count) in histogram.bins().iter().enumerate() {
        weight_background += count as f64;
        if weight_background == 0.0 {
            continue;
        }

        let weight_foreground = total - weight_background;
        if weight_foreground == 0.0 {
            break;
        }

        sum_background += level as f64 * count as f64;

        let mean_background = sum_background / weight_background;
        let mean_foreground = (total_sum - sum_background) / weight_foreground;
        let mean_diff = mean_background - mean_foreground;
        let var_between = weight_background * weight_foreground * mean_diff * mean_diff;

        if var_between > var_max {
            var_max = var_between;
            threshold = level as u8;
        }
    }

    threshold
}

/// Builds the histogram and derives the Otsu threshold in one step.
pub fn compute_threshold(image: &GrayscaleImage) -> u8 {
    let histogram = histogram_of(image);
    let threshold = otsu_threshold(&histogram, image.pixel_count() as u64);
    debug!(threshold, "Otsu threshold computed");
    threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::bmp::BmpImage;
    use crate::image_pipeline::grayscale::to_grayscale;

    fn histogram_from_counts(counts: &[(u8, u64)]) -> Histogram {
        let mut data = Vec::new();
        for &(level, count) in counts {
            for _ in 0..count {
                data.extend_from_slice(&[level, level, level]);
            }
        }
        let pixels = data.len() / 3;
        let gray = to_grayscale(&BmpImage::new(pixels, 1, data));
        histogram_of(&gray)
    }

    #[test]
    fn two_spikes_split_at_lower_spike() {
        // Variance is flat between two isolated spikes; the strict
        // comparison keeps the earliest level, and binarization then sends
        // everything <= 10 to background.
        let histogram = histogram_from_counts(&[(10, 1000), (200, 1000)]);
        assert_eq!(otsu_threshold(&histogram, 2000), 10);
    }

    #[test]
    fn spread_clusters_split_between_means() {
        let histogram = histogram_from_counts(&[
            (8, 100),
            (9, 200),
            (10, 400),
            (11, 200),
            (12, 100),
            (198, 100),
            (199, 200),
            (200, 400),
            (201, 200),
            (202, 100),
        ]);
        let threshold = otsu_threshold(&histogram, 2000);
        assert!(threshold > 10 && threshold < 200);
        assert_eq!(threshold, 12);
    }

    #[test]
    fn single_value_image_yields_zero() {
        let histogram = histogram_from_counts(&[(54, 4)]);
        assert_eq!(otsu_threshold(&histogram, 4), 0);
    }

    #[test]
    fn all_background_histogram_yields_zero() {
        let histogram = histogram_from_counts(&[(0, 16)]);
        assert_eq!(otsu_threshold(&histogram, 16), 0);
    }
}
