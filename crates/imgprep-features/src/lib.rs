//! Imgprep Features Library
//!
//! CNN feature extraction for image files: a pretrained classifier's
//! penultimate layer turns each image into a fixed-length vector. The model
//! itself is an opaque dependency behind the [`ImageEncoder`] trait; the
//! shipped implementation runs an ONNX model via `ort` with an explicit
//! device choice made at construction time.

pub mod encoder;
pub mod extractor;
pub mod tensor;

// Re-export commonly used types
pub use encoder::{Device, ImageEncoder, OnnxEncoder};
pub use extractor::{save_features, FeatureExtractor, FeatureMap};
pub use tensor::image_to_tensor;

/// Input side length the pretrained classifier expects.
pub const CNN_INPUT_SIDE: u32 = 224;

/// Length of the penultimate-layer feature vector.
pub const FEATURE_LEN: usize = 2048;
