mod ruler;

pub use ruler::{ruler_marks, RulerMark, DEFAULT_TICK_COUNT};

use serde::{Deserialize, Serialize};

use crate::model::OptimalDimensions;

/// Fixed multiplier converting physical centimeter dimensions into the
/// bounded render-space coordinate range.
pub const SCALE_FACTOR: f64 = 0.12;

/// Per-axis aspect ratio applied to the rendered box (width, height, depth).
///
/// The rendered box deliberately does not look like the cube the optimum
/// actually is: it is stylized to resemble a tall product package. Only the
/// measurement labels reflect the true cubic dimensions.
pub const BOX_ASPECT: [f64; 3] = [1.0, 1.5, 0.3];

/// Extra multiplier applied on top of [`BOX_ASPECT`] to the rendered box.
pub const BOX_ASPECT_GAIN: f64 = 1.2;

/// User-selectable presentation format for measurement labels.
///
/// Governs only label text; the underlying computed dimensions never change
/// with the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayUnit {
    #[default]
    Centimeters,
    Meters,
    /// Each value as a percentage of its real reference dimension.
    PercentOfMax,
}

impl DisplayUnit {
    /// Returns the next unit in the `cm → m → % → cm` cycle.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Centimeters => Self::Meters,
            Self::Meters => Self::PercentOfMax,
            Self::PercentOfMax => Self::Centimeters,
        }
    }

    /// Returns the suffix shown at the end of a ruler.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::PercentOfMax => "%",
        }
    }
}

/// Render-only geometry: the optimal dimensions mapped into render space.
///
/// The box variant carries the stylized [`BOX_ASPECT`] distortion and so is
/// never visually a cube even though the underlying optimum always is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaledRenderDimensions {
    Cylinder { radius: f64, height: f64 },
    Box { width: f64, height: f64, depth: f64 },
}

/// Maps optimal dimensions into render space.
///
/// The cylinder is scaled uniformly by [`SCALE_FACTOR`]. The box is scaled by
/// the cube root of its volume and then stretched by [`BOX_ASPECT`] and
/// [`BOX_ASPECT_GAIN`] per axis. Degenerate (zero or non-finite) dimensions
/// fall back to 1 cm so the render pipeline never sees zero-size geometry.
#[must_use]
pub fn scale_for_render(dims: &OptimalDimensions) -> ScaledRenderDimensions {
    match *dims {
        OptimalDimensions::Cylinder { radius, height, .. } => ScaledRenderDimensions::Cylinder {
            radius: or_unit(radius) * SCALE_FACTOR,
            height: or_unit(height) * SCALE_FACTOR,
        },
        OptimalDimensions::SquareBasedBox {
            side,
            height,
            depth,
            ..
        } => {
            let side = or_unit(side);
            let height = or_unit(height);
            let depth = or_unit(depth);
            let base = (side * height * depth).cbrt() * SCALE_FACTOR;
            ScaledRenderDimensions::Box {
                width: base * BOX_ASPECT[0] * BOX_ASPECT_GAIN,
                height: base * BOX_ASPECT[1] * BOX_ASPECT_GAIN,
                depth: base * BOX_ASPECT[2] * BOX_ASPECT_GAIN,
            }
        }
    }
}

/// Safe default for a degenerate dimension.
fn or_unit(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Converts a centimeter value to meters.
#[must_use]
pub fn to_meters(centimeters: f64) -> f64 {
    centimeters / 100.0
}

/// Formats a measurement label in the selected unit.
///
/// `reference` is the unscaled true physical dimension the percentage is
/// taken against; it is ignored by the absolute units. A zero reference is
/// guarded (this is display-only output) and yields 0%.
#[must_use]
pub fn format_measurement(value: f64, reference: f64, unit: DisplayUnit) -> String {
    match unit {
        DisplayUnit::Centimeters => format!("{value:.2} cm"),
        DisplayUnit::Meters => format!("{:.4} m", to_meters(value)),
        DisplayUnit::PercentOfMax => format!("{:.0}%", percent_of(value, reference)),
    }
}

/// Formats a ruler tick label: a bare number, no suffix. The unit suffix is
/// drawn once at the end of the ruler instead.
#[must_use]
pub fn format_tick(value: f64, reference: f64, unit: DisplayUnit) -> String {
    match unit {
        DisplayUnit::Centimeters => format!("{value:.1}"),
        DisplayUnit::Meters => format!("{:.4}", to_meters(value)),
        DisplayUnit::PercentOfMax => format!("{:.0}", percent_of(value, reference)),
    }
}

fn percent_of(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        return 0.0;
    }
    value / reference * 100.0
}
