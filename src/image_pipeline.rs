//! Image processing pipeline module
//!
//! This module provides a structured approach to BMP skeletonization, with
//! separate modules for BMP decoding/encoding, grayscale conversion,
//! Otsu thresholding, binarization, morphological thinning, and pipeline
//! orchestration.

pub mod binarize;
pub mod bmp;
pub mod common;
pub mod conversions;
pub mod grayscale;
pub mod skeleton;
pub mod threshold;

pub use common::{PipelineError, Result};

pub use bmp::{BmpHeader, BmpImage, BmpReader, BmpWriter, StandardBmpReader, StandardBmpWriter};

pub use grayscale::{to_grayscale, GrayscaleImage};

pub use threshold::{compute_threshold, histogram_of, otsu_threshold, Histogram};

pub use binarize::{binarize, BinaryImage, BACKGROUND, FOREGROUND};

pub use skeleton::{pad, skeletonize, strip_border, CellRule, StructuringElement, THINNING_ELEMENTS};

pub use conversions::{BmpSkeletonPipeline, PipelineConfig, PipelineConfigBuilder};
