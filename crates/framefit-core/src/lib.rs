//! Framefit Core - Image transformation engine
//!
//! This crate is the geometric and compositing core of an image proxy:
//! it takes an already-decoded image plus a declarative transformation
//! descriptor and produces a new buffer. It covers the four
//! cropping/resizing strategies, the gravity-to-offset resolver, the
//! grayscale filter, and the watermark compositor.
//!
//! Decoding and encoding bytes, fetching sources over the network,
//! request parsing, and caching belong to the surrounding service; the
//! only collaborator this crate consumes is the watermark source
//! (see [`transform::WatermarkSource`]).

pub mod error;
pub mod gravity;
pub mod params;
pub mod resize;
pub mod transform;

pub use error::TransformError;
pub use gravity::{Gravity, InvalidGravityError};
pub use params::{CroppingMode, FilterKind, TransformParams, Transformation, Watermark};
pub use resize::{resize, FilterType};
pub use transform::{FsWatermarkSource, Transformer, WatermarkLoadError, WatermarkSource};
