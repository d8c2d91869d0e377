//! The transformation pipeline.
//!
//! A transformation runs as a fixed sequence of stages, each consuming
//! the previous stage's buffer:
//!
//! 1. Crop/resize strategy (exactly one of the four modes)
//! 2. Grayscale filter (optional)
//! 3. Watermark compositing (optional)
//!
//! The pipeline never mutates the caller's source buffer. A watermark
//! that fails to load is logged and skipped; the base result is returned
//! unchanged rather than failing the whole request.

mod grayscale;
mod strategy;
mod watermark;

pub use grayscale::apply_grayscale;
pub use strategy::apply_crop_resize;
pub use watermark::{composite, FsWatermarkSource, WatermarkLoadError, WatermarkSource};

use crate::error::TransformError;
use crate::params::{FilterKind, Transformation};
use image::DynamicImage;
use std::time::Duration;
use tracing::{debug, warn};

/// The transformation engine.
///
/// Holds the watermark source collaborator and an optional timeout for
/// watermark resolution. One `Transformer` can serve concurrent requests;
/// it carries no per-request state.
#[derive(Debug, Clone)]
pub struct Transformer<S = FsWatermarkSource> {
    watermark_source: S,
    watermark_timeout: Option<Duration>,
}

impl Transformer<FsWatermarkSource> {
    /// Create a transformer that loads watermarks from the filesystem.
    pub fn new() -> Self {
        Self::with_source(FsWatermarkSource)
    }
}

impl Default for Transformer<FsWatermarkSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WatermarkSource> Transformer<S> {
    /// Create a transformer with a custom watermark source collaborator.
    pub fn with_source(watermark_source: S) -> Self {
        Self {
            watermark_source,
            watermark_timeout: None,
        }
    }

    /// Bound watermark resolution: the timeout is threaded into every
    /// [`WatermarkSource::load`] call so a stuck fetch cannot stall the
    /// request.
    pub fn with_watermark_timeout(mut self, timeout: Duration) -> Self {
        self.watermark_timeout = Some(timeout);
        self
    }

    /// Apply `transformation` to `image` and return the resulting buffer.
    ///
    /// The source image is never modified. Deterministic for identical
    /// inputs, except that a watermark load failure degrades to the
    /// unwatermarked result.
    ///
    /// # Errors
    ///
    /// Returns `TransformError` for parameter contract violations (zero
    /// dimensions, bad scale, empty source). Watermark failures are not
    /// errors; they are logged and the base image is returned.
    pub fn transform(
        &self,
        image: &DynamicImage,
        transformation: &Transformation,
    ) -> Result<DynamicImage, TransformError> {
        let params = &transformation.params;
        params.validate()?;

        debug!(
            width = params.width,
            height = params.height,
            cropping = ?params.cropping,
            gravity = ?params.gravity,
            "Applying transformation"
        );

        let mut output = apply_crop_resize(image, params)?;

        if let Some(FilterKind::Grayscale) = params.filter {
            output = apply_grayscale(&output);
        }

        if let Some(mark) = &transformation.watermark {
            match self
                .watermark_source
                .load(&mark.source, self.watermark_timeout)
            {
                Ok(overlay) => {
                    output = composite(&output, &overlay, mark.offset_x, mark.offset_y);
                }
                Err(error) => {
                    warn!(
                        source = %mark.source,
                        %error,
                        "Could not load watermark, returning base image"
                    );
                }
            }
        }

        Ok(output)
    }
}
