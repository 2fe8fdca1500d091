use bmp_skeleton_rs::image_pipeline::{BmpSkeletonPipeline, PipelineConfig};
use bmp_skeleton_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting bmp_skeleton...");

    let input = std::env::args().nth(1).unwrap_or_else(|| "input.bmp".to_string());
    let output = std::env::args().nth(2).unwrap_or_else(|| "skeleton.bmp".to_string());

    let config = PipelineConfig::builder().strip_border(false).build();
    let pipeline = BmpSkeletonPipeline::new(config);

    info!("BMP skeletonization pipeline initialized");
    info!(
        "Threshold: {}",
        match pipeline.config().threshold {
            Some(fixed) => format!("fixed at {fixed}"),
            None => "Otsu".to_string(),
        }
    );

    match pipeline.convert_file(&input, &output) {
        Ok(_) => info!("Skeletonization successful!"),
        Err(e) => error!("Skeletonization failed: {}", e),
    }

    Ok(())
}
