//! Image-to-tensor preprocessing for the CNN input.

use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;

/// Convert an image into an NCHW f32 tensor of shape `(1, 3, side, side)`.
///
/// The image is scaled (not cropped) to `side` x `side` and the channel
/// values stay in the raw 0-255 range; the pretrained model this feeds was
/// trained against un-normalized inputs.
pub fn image_to_tensor(img: &DynamicImage, side: u32) -> Array4<f32> {
    let resized = img.resize_exact(side, side, FilterType::Lanczos3);
    let rgb = resized.to_rgb8();

    let side = side as usize;
    let mut tensor = Array4::<f32>::zeros((1, 3, side, side));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        tensor[[0, 0, y, x]] = f32::from(pixel[0]);
        tensor[[0, 1, y, x]] = f32::from(pixel[1]);
        tensor[[0, 2, y, x]] = f32::from(pixel[2]);
    }
    tensor
}
