use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    FileUnavailable(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Bitmap data truncated: {0}")]
    TruncatedData(String),

    #[error("Unsupported bitmap format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid bitmap header: {0}")]
    InvalidHeader(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(i32, i32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
