use crate::image_pipeline::bmp::types::BmpImage;
use crate::image_pipeline::common::error::Result;

pub trait BmpReader {
    fn read_bmp(&self, data: &[u8]) -> Result<BmpImage>;
}
