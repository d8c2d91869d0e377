//! Transformation descriptors.
//!
//! A [`Transformation`] describes exactly one output image: target
//! dimensions, a cropping mode, a gravity anchor, an optional filter,
//! and an optional watermark. Descriptors are plain immutable data;
//! validation happens once when a transformation enters the pipeline.
//!
//! The enumerations parse from the short wire codes used in
//! transformation descriptors (e.g. `"p"` for [`CroppingMode::FitPart`],
//! `"nw"` for north-west gravity), since the surrounding service builds
//! them from URL segments.

use crate::error::TransformError;
use crate::gravity::Gravity;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strategy for reconciling the source aspect ratio with the requested
/// target dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CroppingMode {
    /// Resize to exactly the target dimensions, ignoring aspect ratio.
    #[default]
    Exact,
    /// Preserve aspect ratio; the entire source stays visible. One output
    /// axis may be smaller than requested.
    FitAll,
    /// Preserve aspect ratio while filling the entire target rectangle;
    /// the excess is cropped away before resizing.
    FitPart,
    /// Pure crop at original scale: no resampling, dimensions clamped to
    /// the source size.
    KeepScale,
}

impl FromStr for CroppingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "e" | "exact" => Ok(CroppingMode::Exact),
            "a" | "all" => Ok(CroppingMode::FitAll),
            "p" | "part" => Ok(CroppingMode::FitPart),
            "k" | "keepscale" => Ok(CroppingMode::KeepScale),
            other => Err(format!("Unrecognized cropping mode: {other}")),
        }
    }
}

/// Pixel filter applied after cropping/resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Luminance-weighted grayscale conversion.
    Grayscale,
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grayscale" | "greyscale" => Ok(FilterKind::Grayscale),
            other => Err(format!("Unrecognized filter: {other}")),
        }
    }
}

/// Geometric parameters of a transformation.
///
/// `width` and `height` must be positive. For every mode except
/// [`CroppingMode::KeepScale`] they are multiplied by `scale` before the
/// strategy runs; KeepScale interprets them literally as final pixel
/// dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformParams {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Anchor used when a crop has to discard part of the source.
    pub gravity: Gravity,
    /// Density multiplier applied to the target dimensions (e.g. 2.0 for
    /// a retina variant). Ignored by KeepScale.
    pub scale: f32,
    /// Crop/resize strategy.
    pub cropping: CroppingMode,
    /// Optional pixel filter.
    pub filter: Option<FilterKind>,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            gravity: Gravity::default(),
            scale: 1.0,
            cropping: CroppingMode::default(),
            filter: None,
        }
    }
}

impl TransformParams {
    /// Check the parameter invariants the pipeline relies on.
    ///
    /// Fails fast on zero target dimensions and on a non-positive or
    /// non-finite scale, so that downstream geometry never divides by
    /// zero or emits distorted pixels.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.width == 0 || self.height == 0 {
            return Err(TransformError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(TransformError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Watermark overlay description.
///
/// Negative offsets are measured from the opposite edge: `offset_x = -10`
/// places the watermark 10px from the right edge. Resolution against the
/// base image happens at composite time, not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watermark {
    /// Opaque reference handed to the watermark source collaborator
    /// (typically a filesystem path).
    pub source: String,
    /// Horizontal offset in pixels; negative means edge-relative.
    pub offset_x: i32,
    /// Vertical offset in pixels; negative means edge-relative.
    pub offset_y: i32,
}

/// A complete transformation request: parameters plus optional watermark.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transformation {
    pub params: TransformParams,
    pub watermark: Option<Watermark>,
}

impl Transformation {
    /// Create a transformation with the given parameters and no watermark.
    pub fn new(params: TransformParams) -> Self {
        Self {
            params,
            watermark: None,
        }
    }

    /// Attach a watermark overlay.
    pub fn with_watermark(mut self, watermark: Watermark) -> Self {
        self.watermark = Some(watermark);
        self
    }
}
