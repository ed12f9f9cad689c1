use std::io::Cursor;

use image::{imageops, DynamicImage};

/// Camera rotation recorded in the EXIF orientation tag.
///
/// Only the pure-rotation values are represented. The mirrored variants
/// (EXIF 2, 4, 5, 7) are deliberately unsupported: they are rare in camera
/// output and the pipeline treats them as unknown, leaving the image as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// EXIF 1 - no correction needed
    Normal,
    /// EXIF 3 - display correction is a 180 degree rotation
    UpsideDown,
    /// EXIF 6 - display correction is a 90 degree clockwise rotation
    Rotate90,
    /// EXIF 8 - display correction is a 270 degree clockwise rotation
    Rotate270,
}

impl Orientation {
    /// Map a raw EXIF orientation value to a supported rotation.
    ///
    /// Returns `None` for anything outside {1, 3, 6, 8}; callers warn and
    /// proceed unrotated rather than failing.
    pub fn from_exif(value: u16) -> Option<Self> {
        match value {
            1 => Some(Orientation::Normal),
            3 => Some(Orientation::UpsideDown),
            6 => Some(Orientation::Rotate90),
            8 => Some(Orientation::Rotate270),
            _ => None,
        }
    }
}

/// EXIF orientation reading and correction
pub struct ImageOrientation;

impl ImageOrientation {
    /// Read the raw EXIF orientation value from encoded image bytes.
    ///
    /// Returns `None` when the container carries no EXIF segment, the
    /// orientation tag is absent, or the metadata cannot be parsed at all.
    /// Absence of metadata is not an error.
    pub fn read_orientation(data: &[u8]) -> Option<u16> {
        let exif = exif::Reader::new()
            .read_from_container(&mut Cursor::new(data))
            .ok()?;
        let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
        field.value.get_uint(0).map(|v| v as u16)
    }

    /// Rotate an image so it displays upright for the given orientation.
    /// The canvas expands to fit: 90/270 degree rotations swap dimensions.
    pub fn apply(img: DynamicImage, orientation: Orientation) -> DynamicImage {
        match orientation {
            Orientation::Normal => img,
            Orientation::UpsideDown => {
                DynamicImage::ImageRgba8(imageops::rotate180(&img.to_rgba8()))
            }
            Orientation::Rotate90 => DynamicImage::ImageRgba8(imageops::rotate90(&img.to_rgba8())),
            Orientation::Rotate270 => {
                DynamicImage::ImageRgba8(imageops::rotate270(&img.to_rgba8()))
            }
        }
    }

    /// Apply EXIF orientation correction to a decoded image.
    ///
    /// `data` is the original encoded file, which still carries the metadata
    /// the decoded `img` has lost. Never fails: missing metadata means no
    /// rotation, and an unrecognized tag value is logged and ignored.
    pub fn correct(img: DynamicImage, data: &[u8]) -> DynamicImage {
        let Some(raw) = Self::read_orientation(data) else {
            return img;
        };

        match Orientation::from_exif(raw) {
            Some(orientation) => {
                tracing::debug!(exif_orientation = raw, "Applying EXIF orientation");
                Self::apply(img, orientation)
            }
            None => {
                tracing::warn!(
                    exif_orientation = raw,
                    "Unknown EXIF orientation, leaving image unrotated"
                );
                img
            }
        }
    }
}
