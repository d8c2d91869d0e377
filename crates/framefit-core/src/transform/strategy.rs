//! The four-mode crop/resize strategy engine.
//!
//! FitAll and FitPart share one aspect test (is the target rectangle
//! relatively wider than the source?) but apply it to opposite goals:
//! FitAll shrinks the output so everything stays visible, FitPart crops
//! the source so the target rectangle is filled completely. That
//! symmetry is what makes gravity-based thumbnailing come out right.

use crate::error::TransformError;
use crate::params::{CroppingMode, TransformParams};
use crate::resize::{resize, FilterType};
use image::{DynamicImage, GenericImageView};

/// Apply the crop/resize strategy selected by `params` to `image`.
///
/// Target dimensions are multiplied by `params.scale` (rounded) for every
/// mode except [`CroppingMode::KeepScale`], which treats them as final
/// pixel dimensions. The source is never mutated.
///
/// # Errors
///
/// Returns `TransformError::EmptySource` for a zero-sized source and
/// `TransformError::InvalidDimensions` if scaling collapses a target
/// axis to zero. Callers are expected to have run
/// [`TransformParams::validate`] first.
pub fn apply_crop_resize(
    image: &DynamicImage,
    params: &TransformParams,
) -> Result<DynamicImage, TransformError> {
    let (src_width, src_height) = image.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(TransformError::EmptySource);
    }

    // Scaling factor applies to everything but KeepScale, which already
    // speaks in final pixel dimensions.
    let (width, height) = if params.cropping == CroppingMode::KeepScale {
        (params.width, params.height)
    } else {
        scaled_target(params)?
    };

    match params.cropping {
        CroppingMode::Exact => resize(image, width, height, FilterType::Bilinear),
        CroppingMode::FitAll => {
            if target_wider_than_source(width, height, src_width, src_height) {
                // Height binds: derive width to preserve the ratio
                resize(image, 0, height, FilterType::Bilinear)
            } else {
                // Width binds: derive height to preserve the ratio
                resize(image, width, 0, FilterType::Bilinear)
            }
        }
        CroppingMode::FitPart => {
            let (crop_width, crop_height) =
                if target_wider_than_source(width, height, src_width, src_height) {
                    // Whole source width displayed; the excess is vertical
                    let h = ((src_width as f32 / width as f32) * height as f32) as u32;
                    (src_width, h.clamp(1, src_height))
                } else {
                    // Whole source height displayed; the excess is horizontal
                    let w = ((src_height as f32 / height as f32) * width as f32) as u32;
                    (w.clamp(1, src_width), src_height)
                };

            let (x, y) = params
                .gravity
                .resolve(crop_width, crop_height, src_width, src_height);
            let cropped = image.crop_imm(x, y, crop_width, crop_height);
            resize(&cropped, width, height, FilterType::Bilinear)
        }
        CroppingMode::KeepScale => {
            // Pure crop: clamp to the source, never resample
            let width = width.min(src_width);
            let height = height.min(src_height);
            let (x, y) = params.gravity.resolve(width, height, src_width, src_height);
            Ok(image.crop_imm(x, y, width, height))
        }
    }
}

/// Shared aspect comparison for FitAll and FitPart: true when the target
/// rectangle is relatively wider than the source.
fn target_wider_than_source(width: u32, height: u32, src_width: u32, src_height: u32) -> bool {
    width as f32 * (src_height as f32 / src_width as f32) > height as f32
}

/// Target dimensions with the density multiplier applied.
fn scaled_target(params: &TransformParams) -> Result<(u32, u32), TransformError> {
    let width = (params.width as f32 * params.scale).round() as u32;
    let height = (params.height as f32 * params.scale).round() as u32;
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }
    Ok((width, height))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use image::{Rgb, RgbImage};
    use proptest::prelude::*;

    fn source_and_target() -> impl Strategy<Value = (u32, u32, u32, u32)> {
        (2u32..=200, 2u32..=200, 1u32..=150, 1u32..=150)
    }

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        DynamicImage::ImageRgb8(img)
    }

    proptest! {
        /// Property: FitPart always fills the target rectangle exactly.
        #[test]
        fn prop_fit_part_exact_dimensions((sw, sh, tw, th) in source_and_target()) {
            let img = gradient_image(sw, sh);
            let mut p = TransformParams::default();
            p.width = tw;
            p.height = th;
            p.cropping = CroppingMode::FitPart;

            let out = apply_crop_resize(&img, &p).unwrap();
            prop_assert_eq!(out.dimensions(), (tw, th));
        }

        /// Property: FitAll never exceeds the target on either axis and
        /// hits it exactly on the constraining one.
        #[test]
        fn prop_fit_all_bounded_by_target((sw, sh, tw, th) in source_and_target()) {
            let img = gradient_image(sw, sh);
            let mut p = TransformParams::default();
            p.width = tw;
            p.height = th;
            p.cropping = CroppingMode::FitAll;

            let (w, h) = apply_crop_resize(&img, &p).unwrap().dimensions();
            prop_assert!(w == tw || h == th, "One axis must bind exactly");
            if w == tw {
                prop_assert!(h <= th, "Derived height must not exceed the request");
            } else {
                prop_assert!(w <= tw, "Derived width must not exceed the request");
            }
        }

        /// Property: KeepScale output never exceeds the source.
        #[test]
        fn prop_keep_scale_never_upsamples((sw, sh, tw, th) in source_and_target()) {
            let img = gradient_image(sw, sh);
            let mut p = TransformParams::default();
            p.width = tw;
            p.height = th;
            p.cropping = CroppingMode::KeepScale;

            let (w, h) = apply_crop_resize(&img, &p).unwrap().dimensions();
            prop_assert_eq!(w, tw.min(sw));
            prop_assert_eq!(h, th.min(sh));
        }

        /// Property: Exact output is exactly the scaled target.
        #[test]
        fn prop_exact_matches_target((sw, sh, tw, th) in source_and_target()) {
            let img = gradient_image(sw, sh);
            let mut p = TransformParams::default();
            p.width = tw;
            p.height = th;
            p.cropping = CroppingMode::Exact;

            let out = apply_crop_resize(&img, &p).unwrap();
            prop_assert_eq!(out.dimensions(), (tw, th));
        }
    }
}
