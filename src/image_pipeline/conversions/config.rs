//! Pipeline configuration types

/// Configuration for BMP skeletonization.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Whether to validate image dimensions after decoding.
    pub validate_dimensions: bool,
    /// Fixed binarization threshold. `None` derives one with Otsu's method.
    pub threshold: Option<u8>,
    /// Whether to strip the one-pixel padding border from the skeletonized
    /// output before encoding.
    pub strip_border: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            threshold: None,
            strip_border: false,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    validate_dimensions: Option<bool>,
    threshold: Option<Option<u8>>,
    strip_border: Option<bool>,
}

impl PipelineConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn threshold(mut self, threshold: Option<u8>) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn strip_border(mut self, strip: bool) -> Self {
        self.strip_border = Some(strip);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            threshold: self.threshold.unwrap_or(default.threshold),
            strip_border: self.strip_border.unwrap_or(default.strip_border),
        }
    }
}
