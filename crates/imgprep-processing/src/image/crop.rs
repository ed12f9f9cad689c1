use image::{DynamicImage, GenericImageView};

/// Largest centered square crop
///
/// CNNs expect square inputs; this takes the biggest square available out of
/// the middle of the frame. Landscape images are clipped symmetrically from
/// the left and right, portrait images from the top and bottom.
pub struct CenterCrop;

impl CenterCrop {
    /// Compute the crop box as (left, top, side) for the given dimensions.
    ///
    /// `side == min(width, height)`; the offsets use integer division, so for
    /// odd differences the two clips differ by at most one pixel.
    pub fn crop_box(width: u32, height: u32) -> (u32, u32, u32) {
        let side = width.min(height);
        ((width - side) / 2, (height - side) / 2, side)
    }

    /// Crop the largest centered square out of the image.
    /// A square input is returned unchanged.
    pub fn crop(img: &DynamicImage) -> DynamicImage {
        let (width, height) = img.dimensions();
        if width == height {
            return img.clone();
        }
        let (left, top, side) = Self::crop_box(width, height);
        img.crop_imm(left, top, side, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Image whose pixel at (x, y) encodes its own coordinates, so crops can
    /// be checked for exact placement.
    fn coordinate_image(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_crop_box_landscape() {
        let (left, top, side) = CenterCrop::crop_box(100, 60);
        assert_eq!(side, 60);
        assert_eq!(left, 20);
        assert_eq!(top, 0);
        // Symmetric clip: left clip == right clip
        assert_eq!(100 - (left + side), left);
    }

    #[test]
    fn test_crop_box_portrait() {
        let (left, top, side) = CenterCrop::crop_box(60, 100);
        assert_eq!(side, 60);
        assert_eq!(left, 0);
        assert_eq!(top, 20);
        assert_eq!(100 - (top + side), top);
    }

    #[test]
    fn test_crop_box_odd_difference() {
        // 101 - 60 = 41: clips of 20 and 21, within one pixel of each other
        let (left, _top, side) = CenterCrop::crop_box(101, 60);
        let right_clip = 101 - (left + side);
        assert_eq!(left, 20);
        assert_eq!(right_clip, 21);
        assert!(left.abs_diff(right_clip) <= 1);
    }

    #[test]
    fn test_crop_landscape_pixels() {
        let img = coordinate_image(6, 4);
        let cropped = CenterCrop::crop(&img);
        assert_eq!(cropped.dimensions(), (4, 4));
        // Columns 1..5 survive; top-left of the crop was (1, 0)
        assert_eq!(cropped.get_pixel(0, 0), Rgba([1, 0, 0, 255]));
        assert_eq!(cropped.get_pixel(3, 3), Rgba([4, 3, 0, 255]));
    }

    #[test]
    fn test_crop_portrait_pixels() {
        let img = coordinate_image(4, 6);
        let cropped = CenterCrop::crop(&img);
        assert_eq!(cropped.dimensions(), (4, 4));
        // Rows 1..5 survive
        assert_eq!(cropped.get_pixel(0, 0), Rgba([0, 1, 0, 255]));
        assert_eq!(cropped.get_pixel(3, 3), Rgba([3, 4, 0, 255]));
    }

    #[test]
    fn test_crop_square_is_noop() {
        let img = coordinate_image(5, 5);
        let cropped = CenterCrop::crop(&img);
        assert_eq!(cropped.dimensions(), (5, 5));
        assert_eq!(cropped.to_rgba8().as_raw(), img.to_rgba8().as_raw());
    }
}
