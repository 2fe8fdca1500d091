//! Iterative thinning to a fixed point

use tracing::debug;

use crate::image_pipeline::binarize::{BinaryImage, BACKGROUND, FOREGROUND};
use crate::image_pipeline::bmp::BmpImage;
use crate::image_pipeline::skeleton::element::{StructuringElement, THINNING_ELEMENTS};

/// Single-channel working grid for thinning. Cells are 0 or 255.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Mask {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Mask {
    fn from_binary(image: &BinaryImage) -> Self {
        let cells = image
            .as_bmp()
            .data
            .chunks_exact(3)
            .map(|pixel| pixel[0])
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            cells,
        }
    }

    fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[y * self.width + x] = value;
    }

    fn into_binary(self, header_source: &BinaryImage) -> BinaryImage {
        let mut data = Vec::with_capacity(self.cells.len() * 3);
        for cell in &self.cells {
            data.extend_from_slice(&[*cell, *cell, *cell]);
        }
        let header = header_source
            .as_bmp()
            .header
            .resized(self.width as i32, self.height as i32);
        BinaryImage::from_bmp(BmpImage { header, data })
    }
}

/// Surrounds the image with a one-pixel background border so element
/// matching never reads outside the grid. Foreground touching the original
/// edge is reachable only because of this border.
pub fn pad(image: &BinaryImage) -> BinaryImage {
    let width = image.width();
    let height = image.height();
    let padded_width = width + 2;

    let mut mask = Mask {
        width: padded_width,
        height: height + 2,
        cells: vec![BACKGROUND; padded_width * (height + 2)],
    };
    for y in 0..height {
        for x in 0..width {
            if image.is_foreground(x, y) {
                mask.set(x + 1, y + 1, FOREGROUND);
            }
        }
    }
    mask.into_binary(image)
}

/// Removes the outermost row and column ring, the inverse of [`pad`].
/// Images smaller than 3x3 are returned unchanged.
pub fn strip_border(image: &BinaryImage) -> BinaryImage {
    let width = image.width();
    let height = image.height();
    if width < 3 || height < 3 {
        return image.clone();
    }

    let mut mask = Mask {
        width: width - 2,
        height: height - 2,
        cells: vec![BACKGROUND; (width - 2) * (height - 2)],
    };
    for y in 0..height - 2 {
        for x in 0..width - 2 {
            if image.is_foreground(x + 1, y + 1) {
                mask.set(x, y, FOREGROUND);
            }
        }
    }
    mask.into_binary(image)
}

/// Applies one structuring element over every interior pixel.
///
/// Matching reads `input`, the grid as left by the previous element; erased
/// pixels land in the output grid that seeds the next element. Within one
/// element the update is parallel, across elements it is sequential
/// relaxation.
fn apply_element(input: &Mask, element: &StructuringElement) -> Mask {
    let mut output = input.clone();
    for y in 1..input.height - 1 {
        for x in 1..input.width - 1 {
            if input.get(x, y) != FOREGROUND {
                continue;
            }
            let matched = element.matches(|dx, dy| {
                input.get(
                    (x as i32 + dx) as usize,
                    (y as i32 + dy) as usize,
                )
            });
            if matched {
                output.set(x, y, BACKGROUND);
            }
        }
    }
    output
}

/// Thins the image to its skeleton.
///
/// Pads with a one-pixel background border, then applies the eight
/// elements in order, pass after pass, until a full pass leaves the grid
/// identical to its pre-pass state. The returned image keeps the padding
/// border; callers wanting the original shape back apply [`strip_border`].
pub fn skeletonize(image: &BinaryImage) -> BinaryImage {
    let padded = pad(image);
    let mut mask = Mask::from_binary(&padded);

    let mut passes = 0u32;
    loop {
        let before = mask.clone();
        for element in &THINNING_ELEMENTS {
            mask = apply_element(&mask, element);
        }
        passes += 1;
        if mask == before {
            break;
        }
    }

    debug!(
        passes,
        width = mask.width,
        height = mask.height,
        "Thinning converged"
    );

    mask.into_binary(&padded)
}
