use image::{imageops::FilterType, DynamicImage};

/// Exact square resize
pub struct SquareResize;

impl SquareResize {
    /// Scale an image to exactly `side` x `side` pixels.
    ///
    /// Lanczos3 is the highest-quality filter the codec offers for
    /// downscaling; nearest-neighbor and bilinear lose too much detail for
    /// thumbnails that feed a CNN.
    pub fn resize(img: &DynamicImage, side: u32) -> DynamicImage {
        img.resize_exact(side, side, FilterType::Lanczos3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    #[test]
    fn test_resize_square_input() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(100, 100, Rgba([10, 20, 30, 255])));
        let resized = SquareResize::resize(&img, 32);
        assert_eq!(resized.dimensions(), (32, 32));
    }

    #[test]
    fn test_resize_forces_exact_dimensions() {
        // Non-square input still comes out side x side
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(90, 40, Rgba([10, 20, 30, 255])));
        for side in [1u32, 7, 64, 256] {
            let resized = SquareResize::resize(&img, side);
            assert_eq!(resized.dimensions(), (side, side));
        }
    }

    #[test]
    fn test_resize_preserves_flat_color() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, Rgba([200, 100, 50, 255])));
        let resized = SquareResize::resize(&img, 16);
        // A uniform image stays uniform through any sane filter
        let pixel = resized.to_rgba8().get_pixel(8, 8).0;
        for (actual, expected) in pixel.iter().zip([200u8, 100, 50, 255]) {
            assert!(actual.abs_diff(expected) <= 1);
        }
    }
}
