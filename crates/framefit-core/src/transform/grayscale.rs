//! Luminance-weighted grayscale conversion using ITU-R BT.709
//! coefficients.
//!
//! Every pixel in the working buffer is converted; the output is a new
//! single-channel buffer of identical dimensions. The coefficients sum
//! to 1.0, so gray input maps to itself and the filter is idempotent.

use image::{DynamicImage, GrayImage, Luma};

/// ITU-R BT.709 coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.0722;

/// Calculate luminance from u8 RGB values (0 to 255).
#[inline]
fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}

/// Convert an image to a single-channel grayscale buffer.
///
/// Works on any input color model; alpha, if present, is discarded.
pub fn apply_grayscale(image: &DynamicImage) -> DynamicImage {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut gray = GrayImage::new(width, height);
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        gray.put_pixel(x, y, Luma([luminance_u8(r, g, b)]));
    }

    DynamicImage::ImageLuma8(gray)
}
