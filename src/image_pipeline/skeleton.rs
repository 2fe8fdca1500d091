//! Morphological skeletonization module
//!
//! Reduces a binary image to a one-pixel-wide topological skeleton by
//! iteratively matching hit-or-miss structuring elements against boundary
//! pixels until a pass removes nothing.

mod element;
mod thinning;


pub use element::{CellRule, StructuringElement, THINNING_ELEMENTS};
pub use thinning::{pad, skeletonize, strip_border};
