//! Image preparer - the decode -> orient -> crop -> resize pipeline

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use imgprep_core::PrepError;

use super::crop::CenterCrop;
use super::orientation::ImageOrientation;
use super::resize::SquareResize;

/// Converts one source image into a canonical square: correctly oriented,
/// center-cropped, and scaled to a caller-specified side length.
pub struct ImagePreparer;

impl ImagePreparer {
    /// Load and prepare a source image as a small, properly rotated square.
    ///
    /// Reads the file once; the raw bytes feed both the decoder and the EXIF
    /// reader. An unreadable or undecodable source is a `Decode` error.
    pub fn prepare(source: &Path, side: u32) -> Result<DynamicImage, PrepError> {
        let data = fs::read(source)
            .map_err(|e| PrepError::Decode(format!("{}: {}", source.display(), e)))?;

        let img = ImageReader::new(Cursor::new(&data))
            .with_guessed_format()
            .map_err(|e| PrepError::Decode(format!("{}: {}", source.display(), e)))?
            .decode()
            .map_err(|e| PrepError::Decode(format!("{}: {}", source.display(), e)))?;

        let img = ImageOrientation::correct(img, &data);
        let img = CenterCrop::crop(&img);
        Ok(SquareResize::resize(&img, side))
    }

    /// Prepare a source image and write it as a JPEG to `dest`.
    ///
    /// The JPEG is encoded fully in memory before anything touches the
    /// filesystem, so a failed run never leaves a truncated destination file.
    pub fn prepare_and_save(source: &Path, dest: &Path, side: u32) -> Result<(), PrepError> {
        let img = Self::prepare(source, side)?;

        // JPEG has no alpha channel
        let rgb = img.to_rgb8();
        let mut buffer = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
            .map_err(|e| PrepError::Encode(format!("{}: {}", dest.display(), e)))?;

        fs::write(dest, &buffer)
            .map_err(|e| PrepError::Encode(format!("{}: {}", dest.display(), e)))?;
        Ok(())
    }
}
