//! Histogram construction and Otsu thresholding
//!
//! Builds a 256-bin intensity histogram from a grayscale image and derives
//! the binary-separation threshold that maximizes between-class variance.

mod histogram;
mod otsu;

pub use histogram::{histogram_of, Histogram};
pub use otsu::{compute_threshold, otsu_threshold};
