//! Inference context for the pretrained CNN.
//!
//! The device is chosen explicitly when the encoder is constructed; there is
//! no global session and no implicit device fallback.

use std::path::Path;

use image::DynamicImage;
use imgprep_core::PrepError;
use ort::session::builder::SessionBuilder;
use ort::session::Session;
use ort::value::Tensor;

use crate::tensor::image_to_tensor;
use crate::{CNN_INPUT_SIDE, FEATURE_LEN};

/// Where inference runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Cpu,
    Gpu { device_id: i32 },
}

/// Opaque "image in, fixed-length vector out" contract.
///
/// Implementations own whatever model state they need; callers only rely on
/// the declared input side and feature length.
pub trait ImageEncoder {
    /// Input side length the model expects.
    fn input_side(&self) -> u32;

    /// Length of the returned feature vector.
    fn feature_len(&self) -> usize;

    /// Run one image through the model and return its feature vector.
    fn encode(&mut self, img: &DynamicImage) -> Result<Vec<f32>, PrepError>;
}

/// [`ImageEncoder`] backed by an ONNX Runtime session.
///
/// Expects a classifier exported with its penultimate layer as the (single)
/// output: input `(1, 3, 224, 224)` f32, output flattening to 2048 floats.
#[derive(Debug)]
pub struct OnnxEncoder {
    session: Session,
    input_side: u32,
    feature_len: usize,
}

impl OnnxEncoder {
    /// Load a model file into a new inference session on the given device.
    pub fn from_file(model_path: &Path, device: Device) -> Result<Self, PrepError> {
        let mut builder =
            Session::builder().map_err(|e| PrepError::ModelLoad(e.to_string()))?;

        if let Device::Gpu { device_id } = device {
            builder = Self::with_cuda(builder, device_id)?;
        }

        let session = builder
            .commit_from_file(model_path)
            .map_err(|e| PrepError::ModelLoad(format!("{}: {}", model_path.display(), e)))?;

        tracing::info!(model = %model_path.display(), ?device, "Loaded CNN model");
        Ok(Self {
            session,
            input_side: CNN_INPUT_SIDE,
            feature_len: FEATURE_LEN,
        })
    }

    #[cfg(feature = "cuda")]
    fn with_cuda(builder: SessionBuilder, device_id: i32) -> Result<SessionBuilder, PrepError> {
        let provider = ort::execution_providers::CUDAExecutionProvider::default()
            .with_device_id(device_id);
        builder
            .with_execution_providers([provider.build()])
            .map_err(|e| PrepError::ModelLoad(e.to_string()))
    }

    #[cfg(not(feature = "cuda"))]
    fn with_cuda(_builder: SessionBuilder, _device_id: i32) -> Result<SessionBuilder, PrepError> {
        Err(PrepError::ModelLoad(
            "GPU requested but this binary was built without the cuda feature".to_string(),
        ))
    }
}

impl ImageEncoder for OnnxEncoder {
    fn input_side(&self) -> u32 {
        self.input_side
    }

    fn feature_len(&self) -> usize {
        self.feature_len
    }

    fn encode(&mut self, img: &DynamicImage) -> Result<Vec<f32>, PrepError> {
        let input = image_to_tensor(img, self.input_side);
        let input =
            Tensor::from_array(input).map_err(|e| PrepError::Inference(e.to_string()))?;

        let outputs = self
            .session
            .run(ort::inputs![input])
            .map_err(|e| PrepError::Inference(e.to_string()))?;

        let output = outputs
            .values()
            .next()
            .ok_or_else(|| PrepError::Inference("model produced no outputs".to_string()))?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PrepError::Inference(e.to_string()))?;

        // The penultimate layer must flatten to exactly the advertised length
        if data.len() != self.feature_len {
            return Err(PrepError::FeatureShape {
                expected: self.feature_len,
                actual: shape.iter().map(|&d| d as usize).collect(),
            });
        }
        Ok(data.to_vec())
    }
}
