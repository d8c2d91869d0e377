//! Gravity anchors and the offset resolver.
//!
//! A gravity anchor names one of nine compass positions and determines
//! where a smaller rectangle is placed inside a larger one. The resolver
//! is a total function over the nine anchors: each axis independently
//! aligns to the start edge (0), the end edge (`container - sub`), or the
//! center (`(container - sub) / 2`, truncating).
//!
//! Unrecognized anchor symbols are rejected when parsing; a `Gravity`
//! value that exists is always valid, so the resolver never fails.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an anchor symbol is not one of the nine
/// recognized compass points.
#[derive(Debug, Error)]
#[error("Unrecognized gravity anchor: {0}")]
pub struct InvalidGravityError(pub String);

/// Compass anchor for placing a sub-rectangle within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gravity {
    /// Top edge, horizontally centered.
    North,
    /// Top-right corner.
    NorthEast,
    /// Right edge, vertically centered.
    East,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom edge, horizontally centered.
    South,
    /// Bottom-left corner.
    SouthWest,
    /// Left edge, vertically centered.
    West,
    /// Top-left corner.
    #[default]
    NorthWest,
    /// Centered on both axes.
    Center,
}

/// Per-axis placement of a span within a larger span.
#[derive(Clone, Copy)]
enum Align {
    Start,
    Center,
    End,
}

impl Align {
    fn offset(self, sub: u32, container: u32) -> u32 {
        match self {
            Align::Start => 0,
            Align::Center => (container - sub) / 2,
            Align::End => container - sub,
        }
    }
}

impl Gravity {
    /// Per-axis alignment table for the nine anchors.
    fn alignment(self) -> (Align, Align) {
        match self {
            Gravity::North => (Align::Center, Align::Start),
            Gravity::NorthEast => (Align::End, Align::Start),
            Gravity::East => (Align::End, Align::Center),
            Gravity::SouthEast => (Align::End, Align::End),
            Gravity::South => (Align::Center, Align::End),
            Gravity::SouthWest => (Align::Start, Align::End),
            Gravity::West => (Align::Start, Align::Center),
            Gravity::NorthWest => (Align::Start, Align::Start),
            Gravity::Center => (Align::Center, Align::Center),
        }
    }

    /// Resolve the top-left offset of a `sub_width x sub_height` rectangle
    /// placed inside a `container_width x container_height` rectangle.
    ///
    /// The returned offset satisfies `offset + sub <= container` on both
    /// axes. Callers must guarantee `sub_width <= container_width` and
    /// `sub_height <= container_height`.
    pub fn resolve(
        self,
        sub_width: u32,
        sub_height: u32,
        container_width: u32,
        container_height: u32,
    ) -> (u32, u32) {
        debug_assert!(
            sub_width <= container_width && sub_height <= container_height,
            "Sub-rectangle must fit within the container"
        );
        let (horizontal, vertical) = self.alignment();
        (
            horizontal.offset(sub_width, container_width),
            vertical.offset(sub_height, container_height),
        )
    }

    /// Short wire code used in transformation descriptors.
    pub fn code(self) -> &'static str {
        match self {
            Gravity::North => "n",
            Gravity::NorthEast => "ne",
            Gravity::East => "e",
            Gravity::SouthEast => "se",
            Gravity::South => "s",
            Gravity::SouthWest => "sw",
            Gravity::West => "w",
            Gravity::NorthWest => "nw",
            Gravity::Center => "c",
        }
    }
}

impl FromStr for Gravity {
    type Err = InvalidGravityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Gravity::North),
            "ne" | "northeast" => Ok(Gravity::NorthEast),
            "e" | "east" => Ok(Gravity::East),
            "se" | "southeast" => Ok(Gravity::SouthEast),
            "s" | "south" => Ok(Gravity::South),
            "sw" | "southwest" => Ok(Gravity::SouthWest),
            "w" | "west" => Ok(Gravity::West),
            "nw" | "northwest" => Ok(Gravity::NorthWest),
            "c" | "center" => Ok(Gravity::Center),
            other => Err(InvalidGravityError(other.to_string())),
        }
    }
}
