//! Imgprep Processing Library
//!
//! This crate turns arbitrary source images into canonical squares: EXIF
//! orientation correction, largest centered square crop, and high-quality
//! downscale to a caller-specified side length. A batch runner applies the
//! pipeline to every file in a directory with per-file failure accounting.

pub mod batch;
pub mod image;

// Re-export commonly used types
pub use crate::image::{CenterCrop, ImageOrientation, ImagePreparer, Orientation, SquareResize};
pub use batch::{BatchFailure, BatchReport, BatchRunner};
