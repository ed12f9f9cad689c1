//! Imgprep Core Library
//!
//! This crate provides the error types shared across all imgprep components.

pub mod error;

// Re-export commonly used types
pub use error::PrepError;
