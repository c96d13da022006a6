use serde::{Deserialize, Serialize};

use super::Shape;

/// The dimensions minimizing surface area for a fixed volume, together with
/// the minimal area achieved at them.
///
/// A value of this type is only ever produced whole by the optimization
/// engine and is superseded wholesale on every recomputation; it is never
/// partially updated. The variant invariants hold by construction:
///
/// - `Cylinder`: `height == 2 * radius`
/// - `SquareBasedBox`: `side == height == depth` (a perfect cube)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OptimalDimensions {
    Cylinder {
        /// Radius of the base, in cm.
        radius: f64,
        /// Height, in cm. Always twice the radius.
        height: f64,
        /// Minimal surface area, in cm².
        surface_area: f64,
    },
    SquareBasedBox {
        /// Side of the square base, in cm.
        side: f64,
        /// Height, in cm. Equal to the side at the optimum.
        height: f64,
        /// Depth, in cm. Equal to the side at the optimum.
        depth: f64,
        /// Minimal surface area, in cm².
        surface_area: f64,
    },
}

impl OptimalDimensions {
    /// Returns the shape these dimensions belong to.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Cylinder { .. } => Shape::Cylinder,
            Self::SquareBasedBox { .. } => Shape::SquareBasedBox,
        }
    }

    /// Returns the minimal surface area, in cm².
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        match *self {
            Self::Cylinder { surface_area, .. } | Self::SquareBasedBox { surface_area, .. } => {
                surface_area
            }
        }
    }

    /// Returns the height, in cm.
    #[must_use]
    pub fn height(&self) -> f64 {
        match *self {
            Self::Cylinder { height, .. } | Self::SquareBasedBox { height, .. } => height,
        }
    }

    /// Returns the characteristic base dimension, in cm: the radius for a
    /// cylinder, the side of the square base for a box.
    #[must_use]
    pub fn base_extent(&self) -> f64 {
        match *self {
            Self::Cylinder { radius, .. } => radius,
            Self::SquareBasedBox { side, .. } => side,
        }
    }
}
