//! Error types module
//!
//! All failures in the image-preparation pipeline and the feature extractor
//! are unified under the `PrepError` enum. The variants mirror where in the
//! pipeline something went wrong: reading/decoding a source image, producing
//! an output file, validating a directory before a batch, or running the CNN.
//!
//! Decode and encode errors are local to a single file; batch callers record
//! them and keep going. Setup errors abort before any file is processed.

#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// Source file is unreadable or not a supported image format.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Output could not be encoded or written to the destination path.
    #[error("Failed to write output: {0}")]
    Encode(String),

    /// Source or destination directory is missing or not a directory.
    #[error("Invalid setup: {0}")]
    Setup(String),

    /// CNN model file could not be loaded into an inference session.
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    /// Forward pass through the CNN failed.
    #[error("Inference error: {0}")]
    Inference(String),

    /// Model produced a feature vector of an unexpected shape.
    #[error("Unexpected feature shape: expected {expected} values, got tensor of shape {actual:?}")]
    FeatureShape { expected: usize, actual: Vec<usize> },
}

impl PrepError {
    /// Stable machine-readable tag for this error, used in batch reports
    /// so failure entries carry a structured kind alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            PrepError::Decode(_) => "decode",
            PrepError::Encode(_) => "encode",
            PrepError::Setup(_) => "setup",
            PrepError::ModelLoad(_) => "model_load",
            PrepError::Inference(_) => "inference",
            PrepError::FeatureShape { .. } => "feature_shape",
        }
    }
}
