mod dimensions;
mod volume;

pub use dimensions::OptimalDimensions;
pub use volume::{Volume, VOLUME_PRESETS};

use serde::{Deserialize, Serialize};

/// The shape whose surface area is being minimized for a fixed volume.
///
/// Selects which formula pair and which dimension set applies. A calculation
/// is always keyed by exactly one shape; changing it triggers a full
/// recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// A closed circular cylinder (a can).
    Cylinder,
    /// A rectangular box with a square base (a package).
    SquareBasedBox,
}
