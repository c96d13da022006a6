use crate::math::Point3;
use crate::model::OptimalDimensions;
use crate::presentation::{format_measurement, scale_for_render, DisplayUnit, ScaledRenderDimensions};

use super::{
    horizontal_measure, vertical_measure, AxisTriad, Label, Ruler, SceneAnnotations, Segment,
};

/// Builds the measurement overlay for the expanded "advanced" view.
///
/// On top of the basic callouts this adds an XYZ axis triad and two ruled
/// axes (vertical and horizontal), and every label honors the selected
/// display unit. Callouts sit further out than in the compact view so they
/// clear the rulers.
///
/// Percent labels take the matching real dimension as their reference: the
/// height callout references the real height, radial callouts the real
/// radius. The diameter therefore reads 200% by design.
#[must_use]
pub fn advanced_annotations(dims: &OptimalDimensions, unit: DisplayUnit) -> SceneAnnotations {
    match (scale_for_render(dims), *dims) {
        (
            ScaledRenderDimensions::Cylinder { radius: r, height: h },
            OptimalDimensions::Cylinder {
                radius: real_r,
                height: real_h,
                ..
            },
        ) => cylinder_annotations(r, h, real_r, real_h, unit),
        (
            ScaledRenderDimensions::Box {
                width: w,
                height: h,
                depth: d,
            },
            OptimalDimensions::SquareBasedBox {
                side: real_w,
                height: real_h,
                ..
            },
        ) => box_annotations(w, h, d, real_w, real_h, unit),
        // The render and real variants always agree on shape by construction.
        _ => SceneAnnotations {
            measurements: Vec::new(),
            rulers: Vec::new(),
            axes: None,
        },
    }
}

fn cylinder_annotations(
    r: f64,
    h: f64,
    real_r: f64,
    real_h: f64,
    unit: DisplayUnit,
) -> SceneAnnotations {
    let measure_right = r + 0.5;
    let ruler_left = -r - 0.5;

    let measurements = vec![
        vertical_measure(
            measure_right,
            -h / 2.0,
            h / 2.0,
            0.0,
            0.06,
            Label::new(
                Point3::new(measure_right + 0.12, 0.0, 0.0),
                format!("h = {}", format_measurement(real_h, real_h, unit)),
            ),
        ),
        horizontal_measure(
            0.0,
            r,
            h / 2.0 + 0.2,
            0.0,
            0.05,
            Label::new(
                Point3::new(r / 2.0, h / 2.0 + 0.35, 0.0),
                format!("r = {}", format_measurement(real_r, real_r, unit)),
            ),
        ),
        horizontal_measure(
            -r,
            r,
            -h / 2.0 - 0.2,
            0.0,
            0.05,
            Label::new(
                Point3::new(0.0, -h / 2.0 - 0.35, 0.0),
                format!("d = {}", format_measurement(2.0 * real_r, real_r, unit)),
            ),
        ),
    ];

    // Axis triad tucked beside the model so it never overlaps the callouts.
    let origin = Point3::new(-0.3 * r, 0.0, -0.5 * r);
    let axes = AxisTriad {
        axes: [
            Segment::new(origin, Point3::new(1.2 * r, 0.0, -0.5 * r)),
            Segment::new(origin, Point3::new(-0.3 * r, 0.7 * h, -0.5 * r)),
            Segment::new(origin, Point3::new(-0.3 * r, 0.0, 1.2 * r)),
        ],
        labels: [
            Label::new(Point3::new(1.3 * r, 0.0, -0.5 * r), "X"),
            Label::new(Point3::new(-0.3 * r, 0.75 * h, -0.5 * r), "Y"),
            Label::new(Point3::new(-0.3 * r, 0.0, 1.3 * r), "Z"),
        ],
    };

    let rulers = vec![
        Ruler::vertical(Point3::new(ruler_left, 0.0, 0.0), h, real_h, unit),
        // The horizontal ruler spans the diameter.
        Ruler::horizontal(
            Point3::new(0.0, -h / 2.0 - 0.55, 0.0),
            2.0 * r,
            2.0 * real_r,
            unit,
        ),
    ];

    SceneAnnotations {
        measurements,
        rulers,
        axes: Some(axes),
    }
}

fn box_annotations(
    w: f64,
    h: f64,
    d: f64,
    real_w: f64,
    real_h: f64,
    unit: DisplayUnit,
) -> SceneAnnotations {
    let measure_x = w / 2.0 + 0.4;
    let measure_y = -h / 2.0 - 0.22;
    let ruler_left = -w / 2.0 - 0.5;
    let front = d / 2.0;

    let measurements = vec![
        vertical_measure(
            measure_x,
            -h / 2.0,
            h / 2.0,
            front,
            0.05,
            Label::new(
                Point3::new(measure_x + 0.12, 0.0, front),
                format!("h = {}", format_measurement(real_h, real_h, unit)),
            ),
        ),
        horizontal_measure(
            -w / 2.0,
            w / 2.0,
            measure_y,
            front,
            0.05,
            Label::new(
                Point3::new(0.0, measure_y - 0.12, front),
                format!("x = {}", format_measurement(real_w, real_w, unit)),
            ),
        ),
    ];

    // Axis triad at the rear corner of the box.
    let origin = Point3::new(-0.4 * w, -0.3 * h, -d);
    let axes = AxisTriad {
        axes: [
            Segment::new(origin, Point3::new(0.5 * w, -0.3 * h, -d)),
            Segment::new(origin, Point3::new(-0.4 * w, 0.4 * h, -d)),
            Segment::new(origin, Point3::new(-0.4 * w, -0.3 * h, d)),
        ],
        labels: [
            Label::new(Point3::new(0.55 * w, -0.3 * h, -d), "X"),
            Label::new(Point3::new(-0.4 * w, 0.45 * h, -d), "Y"),
            Label::new(Point3::new(-0.4 * w, -0.3 * h, d + 0.08), "Z"),
        ],
    };

    let rulers = vec![
        Ruler::vertical(Point3::new(ruler_left, 0.0, front), h, real_h, unit),
        Ruler::horizontal(Point3::new(0.0, -h / 2.0 - 0.55, front), w, real_w, unit),
    ];

    SceneAnnotations {
        measurements,
        rulers,
        axes: Some(axes),
    }
}
