mod advanced;
mod compact;

pub use advanced::advanced_annotations;
pub use compact::compact_annotations;

use crate::math::Point3;
use crate::presentation::{ruler_marks, DisplayUnit, DEFAULT_TICK_COUNT};

/// A positioned text label in render space.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub anchor: Point3,
    pub text: String,
}

impl Label {
    #[must_use]
    pub fn new(anchor: Point3, text: impl Into<String>) -> Self {
        Self {
            anchor,
            text: text.into(),
        }
    }
}

/// A straight line segment in render space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}

/// A dimension callout: the measured span, an end cap at each extremity, and
/// the measurement label.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLine {
    pub line: Segment,
    pub caps: [Segment; 2],
    pub label: Label,
}

/// One tick on a ruled axis: the tick stroke and its value label.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerTick {
    pub stroke: Segment,
    pub label: Label,
}

/// A ruled axis with evenly spaced value ticks and a trailing unit suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruler {
    pub axis: Segment,
    pub ticks: Vec<RulerTick>,
    pub unit_label: Label,
}

impl Ruler {
    /// Builds a vertical ruler centered at `origin` spanning `length` in
    /// render space, labelled over `[0, real_length]` cm in the given unit.
    /// Ticks stroke to the left of the axis, labels further left.
    #[must_use]
    pub fn vertical(origin: Point3, length: f64, real_length: f64, unit: DisplayUnit) -> Self {
        let half = length / 2.0;
        let ticks = ruler_marks(length, real_length, DEFAULT_TICK_COUNT, unit)
            .into_iter()
            .map(|mark| {
                let y = origin.y + mark.position;
                RulerTick {
                    stroke: Segment::new(
                        Point3::new(origin.x, y, origin.z),
                        Point3::new(origin.x - 0.06, y, origin.z),
                    ),
                    label: Label::new(Point3::new(origin.x - 0.1, y, origin.z), mark.label),
                }
            })
            .collect();

        Self {
            axis: Segment::new(
                Point3::new(origin.x, origin.y - half, origin.z),
                Point3::new(origin.x, origin.y + half, origin.z),
            ),
            ticks,
            unit_label: Label::new(
                Point3::new(origin.x - 0.2, origin.y + half + 0.1, origin.z),
                unit.suffix(),
            ),
        }
    }

    /// Builds a horizontal ruler centered at `origin`. Ticks stroke downward,
    /// labels below, unit suffix past the right end.
    #[must_use]
    pub fn horizontal(origin: Point3, length: f64, real_length: f64, unit: DisplayUnit) -> Self {
        let half = length / 2.0;
        let ticks = ruler_marks(length, real_length, DEFAULT_TICK_COUNT, unit)
            .into_iter()
            .map(|mark| {
                let x = origin.x + mark.position;
                RulerTick {
                    stroke: Segment::new(
                        Point3::new(x, origin.y, origin.z),
                        Point3::new(x, origin.y - 0.06, origin.z),
                    ),
                    label: Label::new(Point3::new(x, origin.y - 0.1, origin.z), mark.label),
                }
            })
            .collect();

        Self {
            axis: Segment::new(
                Point3::new(origin.x - half, origin.y, origin.z),
                Point3::new(origin.x + half, origin.y, origin.z),
            ),
            ticks,
            unit_label: Label::new(
                Point3::new(origin.x + half + 0.12, origin.y, origin.z),
                unit.suffix(),
            ),
        }
    }
}

/// The XYZ reference axes drawn in the advanced view.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTriad {
    /// X, Y, Z axis strokes, in that order.
    pub axes: [Segment; 3],
    /// Matching "X", "Y", "Z" labels.
    pub labels: [Label; 3],
}

/// Everything the measurement overlay draws for one computed optimum.
///
/// Plain data for any renderer to consume; decorative meshes and materials
/// are not part of it. Built whole on every recomputation and safe to
/// rebuild spuriously.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAnnotations {
    pub measurements: Vec<MeasurementLine>,
    pub rulers: Vec<Ruler>,
    pub axes: Option<AxisTriad>,
}

/// A vertical dimension callout at `x`, spanning `[y0, y1]`, with horizontal
/// end caps of half-width `cap`.
fn vertical_measure(x: f64, y0: f64, y1: f64, z: f64, cap: f64, label: Label) -> MeasurementLine {
    MeasurementLine {
        line: Segment::new(Point3::new(x, y0, z), Point3::new(x, y1, z)),
        caps: [
            Segment::new(Point3::new(x - cap, y0, z), Point3::new(x + cap, y0, z)),
            Segment::new(Point3::new(x - cap, y1, z), Point3::new(x + cap, y1, z)),
        ],
        label,
    }
}

/// A horizontal dimension callout at `y`, spanning `[x0, x1]`, with vertical
/// end caps of half-height `cap`.
fn horizontal_measure(x0: f64, x1: f64, y: f64, z: f64, cap: f64, label: Label) -> MeasurementLine {
    MeasurementLine {
        line: Segment::new(Point3::new(x0, y, z), Point3::new(x1, y, z)),
        caps: [
            Segment::new(Point3::new(x0, y - cap, z), Point3::new(x0, y + cap, z)),
            Segment::new(Point3::new(x1, y - cap, z), Point3::new(x1, y + cap, z)),
        ],
        label,
    }
}
