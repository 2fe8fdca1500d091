use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

use crate::image_pipeline::{
    binarize::binarize,
    bmp::{BmpImage, BmpReader, BmpWriter, StandardBmpReader, StandardBmpWriter},
    common::error::{PipelineError, Result},
    conversions::config::PipelineConfig,
    grayscale::to_grayscale,
    skeleton::{skeletonize, strip_border},
    threshold::compute_threshold,
};

pub struct BmpSkeletonPipeline<R: BmpReader, W: BmpWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
}

impl BmpSkeletonPipeline<StandardBmpReader, StandardBmpWriter> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reader: StandardBmpReader,
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<R: BmpReader, W: BmpWriter> BmpSkeletonPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, image: &BmpImage) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let width = image.header.width;
        let height = image.header.height;
        if width <= 0 || height <= 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting BMP skeletonization");

        let image = {
            let _span = tracing::info_span!("decode_bmp").entered();
            self.reader.read_bmp(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = image.header.width,
                height = image.header.height
            )
            .entered();
            self.validate_dimensions(&image)?;
        }

        let gray = {
            let _span = tracing::info_span!("grayscale").entered();
            to_grayscale(&image)
        };

        let threshold = {
            let _span = tracing::info_span!("compute_threshold").entered();
            match self.config.threshold {
                Some(fixed) => fixed,
                None => compute_threshold(&gray),
            }
        };

        let binary = {
            let _span = tracing::info_span!("binarize", threshold).entered();
            binarize(&gray, threshold)
        };

        let mut skeleton = {
            let _span = tracing::info_span!("skeletonize").entered();
            skeletonize(&binary)
        };

        if self.config.strip_border {
            skeleton = strip_border(&skeleton);
        }

        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_bmp(skeleton.as_bmp(), output)?;
        }

        info!(
            width = skeleton.width(),
            height = skeleton.height(),
            threshold,
            "Skeletonization complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Skeletonizing file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                PipelineError::FileUnavailable(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}
