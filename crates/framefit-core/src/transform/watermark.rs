//! Watermark loading and compositing.
//!
//! The watermark source is the pipeline's only I/O: an opaque reference
//! is resolved into a decoded image by a [`WatermarkSource`] collaborator.
//! The pipeline threads an optional timeout into the call so a stuck
//! fetch cannot stall a whole request; sources performing slow I/O must
//! honor it.
//!
//! Compositing uses standard "over" alpha blending. The overlay rectangle
//! may fall partially or fully outside the base image; it is clipped to
//! the intersection.

use image::{imageops, DynamicImage, GenericImageView};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors while resolving a watermark source.
///
/// These never fail a transformation: the pipeline logs them and returns
/// the base image unchanged.
#[derive(Debug, Error)]
pub enum WatermarkLoadError {
    /// The source could not be read.
    #[error("I/O error reading watermark source: {0}")]
    Io(#[from] std::io::Error),

    /// The source bytes are not a decodable image.
    #[error("Could not decode watermark source: {0}")]
    Decode(#[from] image::ImageError),

    /// Resolution exceeded the timeout threaded in by the pipeline.
    #[error("Watermark source resolution timed out")]
    TimedOut,
}

/// Collaborator that resolves an opaque watermark reference into a
/// decoded image.
pub trait WatermarkSource {
    /// Resolve `reference` into an image, giving up once `timeout` has
    /// elapsed if one is set.
    fn load(
        &self,
        reference: &str,
        timeout: Option<Duration>,
    ) -> Result<DynamicImage, WatermarkLoadError>;
}

/// Filesystem-backed watermark source.
///
/// Reads the reference as a path and decodes it with the image crate.
/// Local reads cannot be interrupted midway, so the timeout is checked
/// after the read; network-backed sources should enforce it during the
/// fetch instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWatermarkSource;

impl WatermarkSource for FsWatermarkSource {
    fn load(
        &self,
        reference: &str,
        timeout: Option<Duration>,
    ) -> Result<DynamicImage, WatermarkLoadError> {
        let started = Instant::now();
        let bytes = std::fs::read(reference)?;
        if timeout.is_some_and(|t| started.elapsed() > t) {
            return Err(WatermarkLoadError::TimedOut);
        }
        Ok(image::load_from_memory(&bytes)?)
    }
}

/// Composite `overlay` onto `base` with "over" alpha blending.
///
/// Negative offsets are measured from the opposite edge:
/// `offset_x = -10` places the overlay 10px from the right edge
/// (`x = offset_x + base_width - overlay_width`). The overlay is forced
/// to RGBA first so a missing alpha channel reads as fully opaque. The
/// result is always a fresh RGBA buffer; `base` is not modified.
pub fn composite(
    base: &DynamicImage,
    overlay: &DynamicImage,
    offset_x: i32,
    offset_y: i32,
) -> DynamicImage {
    let (base_width, base_height) = base.dimensions();
    let overlay = overlay.to_rgba8();

    let mut x = offset_x as i64;
    let mut y = offset_y as i64;
    if offset_x < 0 {
        x += base_width as i64 - overlay.width() as i64;
    }
    if offset_y < 0 {
        y += base_height as i64 - overlay.height() as i64;
    }

    let mut output = base.to_rgba8();
    // overlay() clips to the intersection, including negative coordinates
    imageops::overlay(&mut output, &overlay, x, y);
    DynamicImage::ImageRgba8(output)
}
