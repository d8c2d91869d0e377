//! The resize primitive used by every strategy.
//!
//! A target dimension of 0 on exactly one axis means "compute this axis
//! from the other one, preserving the source aspect ratio". Both axes
//! zero is an error. All functions return new buffers without modifying
//! the input.

use crate::error::TransformError;
use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};

/// Interpolation filter for resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to the given dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels, or 0 to derive from `height`
/// * `height` - Target height in pixels, or 0 to derive from `width`
/// * `filter` - Interpolation filter to use
///
/// # Returns
///
/// A new `DynamicImage`. When one axis is derived, it is rounded to the
/// nearest pixel with a floor of 1.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if both axes are 0, and
/// `TransformError::EmptySource` if the source has no pixels.
pub fn resize(
    image: &DynamicImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DynamicImage, TransformError> {
    let (src_width, src_height) = image.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(TransformError::EmptySource);
    }

    let (target_width, target_height) = match (width, height) {
        (0, 0) => return Err(TransformError::InvalidDimensions { width, height }),
        (0, h) => {
            let w = (h as f64 * src_width as f64 / src_height as f64).round() as u32;
            (w.max(1), h)
        }
        (w, 0) => {
            let h = (w as f64 * src_height as f64 / src_width as f64).round() as u32;
            (w, h.max(1))
        }
        (w, h) => (w, h),
    };

    // Fast path: if dimensions already match, just clone
    if target_width == src_width && target_height == src_height {
        return Ok(image.clone());
    }

    Ok(image.resize_exact(target_width, target_height, filter.to_image_filter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([120, 80, 40])))
    }

    #[test]
    fn test_resize_exact_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();
        assert_eq!(resized.dimensions(), (50, 25));
    }

    #[test]
    fn test_resize_derives_height() {
        let img = create_test_image(400, 200);
        let resized = resize(&img, 100, 0, FilterType::Bilinear).unwrap();
        assert_eq!(resized.dimensions(), (100, 50));
    }

    #[test]
    fn test_resize_derives_width() {
        let img = create_test_image(400, 200);
        let resized = resize(&img, 0, 100, FilterType::Bilinear).unwrap();
        assert_eq!(resized.dimensions(), (200, 100));
    }

    #[test]
    fn test_resize_derived_axis_floors_at_one() {
        let img = create_test_image(1000, 2);
        let resized = resize(&img, 10, 0, FilterType::Bilinear).unwrap();
        // 10 * 2 / 1000 rounds to 0, floored to 1
        assert_eq!(resized.dimensions(), (10, 1));
    }

    #[test]
    fn test_resize_same_dimensions_clones() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50, FilterType::Lanczos3).unwrap();
        assert_eq!(resized.dimensions(), (100, 50));
        assert_eq!(resized.as_bytes(), img.as_bytes());
    }

    #[test]
    fn test_resize_both_zero_is_error() {
        let img = create_test_image(100, 50);
        assert!(matches!(
            resize(&img, 0, 0, FilterType::Bilinear),
            Err(TransformError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_resize_upscale() {
        let img = create_test_image(50, 25);
        let resized = resize(&img, 100, 50, FilterType::Nearest).unwrap();
        assert_eq!(resized.dimensions(), (100, 50));
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);
        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.dimensions(), (50, 25));
        }
    }
}
