use std::io::Write;

use tracing::debug;

use crate::image_pipeline::bmp::types::BmpImage;
use crate::image_pipeline::bmp::writer::BmpWriter;
use crate::image_pipeline::common::error::Result;

pub struct StandardBmpWriter;

impl BmpWriter for StandardBmpWriter {
    fn write_bmp(&self, image: &BmpImage, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Encoding BMP image: {}x{}",
            image.width(),
            image.height()
        );

        let bytes = image.encode();
        output.write_all(&bytes)?;

        debug!("BMP encoding complete, {} bytes", bytes.len());
        Ok(())
    }
}
