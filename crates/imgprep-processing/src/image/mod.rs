//! Image preparation module
//!
//! This module provides the single-image pipeline:
//! - EXIF orientation correction (orientation)
//! - Largest centered square crop (crop)
//! - Exact square downscale (resize)
//! - The decode -> orient -> crop -> resize -> encode composition (preparer)

pub mod crop;
pub mod orientation;
pub mod preparer;
pub mod resize;

pub use crop::CenterCrop;
pub use orientation::{ImageOrientation, Orientation};
pub use preparer::ImagePreparer;
pub use resize::SquareResize;
