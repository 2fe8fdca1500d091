//! BMP reader implementation for uncompressed 24-bit images.
//!
//! This module decodes the fixed-layout BMP header field-by-field with
//! explicit little-endian reads and assembles the pixel grid exactly as
//! stored on disk, discarding the per-row alignment padding.

use tracing::debug;

use crate::image_pipeline::bmp::reader::BmpReader;
use crate::image_pipeline::bmp::types::{BmpHeader, BmpImage};
use crate::image_pipeline::common::error::{PipelineError, Result};

/// BMP reader for the uncompressed 24-bit format.
///
/// Decoding never reinterprets the byte buffer in place: every header field
/// is extracted with a bounds-checked little-endian read, and the declared
/// pixel data extent is verified against the buffer before any row is
/// copied.
pub struct StandardBmpReader;

impl BmpReader for StandardBmpReader {
    /// Decodes a BMP byte buffer into a [`BmpImage`].
    ///
    /// This method:
    /// 1. Parses and validates the header (bit depth, dimensions, offsets)
    /// 2. Computes the on-disk row stride (`width * 3` rounded up to a
    ///    multiple of 4 bytes)
    /// 3. Reads `height` rows of that stride starting at the declared pixel
    ///    data offset, trimming each row to `width * 3` samples
    ///
    /// Rows are kept in on-disk order, top row first; no vertical flip is
    /// performed.
    ///
    /// # Errors
    ///
    /// * [`PipelineError::TruncatedData`] - fewer bytes than the header declares
    /// * [`PipelineError::UnsupportedFormat`] - bit depth other than 24, or
    ///   non-positive dimensions
    /// * [`PipelineError::InvalidHeader`] - malformed header fields
    fn read_bmp(&self, data: &[u8]) -> Result<BmpImage> {
        debug!("Decoding BMP image, {} bytes", data.len());

        let header = BmpHeader::parse(data)?;

        let width = header.width as usize;
        let height = header.height as usize;
        let stride = header.row_stride();
        let row_bytes = width * 3;
        let start = header.data_offset as usize;

        let declared = header.pixel_data_len();
        if data.len() - start < declared {
            return Err(PipelineError::TruncatedData(format!(
                "header declares {} bytes of pixel data but only {} remain",
                declared,
                data.len() - start
            )));
        }

        let mut samples = Vec::with_capacity(row_bytes * height);
        for row in 0..height {
            let begin = start + row * stride;
            samples.extend_from_slice(&data[begin..begin + row_bytes]);
        }

        debug!(
            "Decoded image: {}x{}, {} byte row stride",
            width, height, stride
        );

        Ok(BmpImage {
            header,
            data: samples,
        })
    }
}
