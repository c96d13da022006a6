use crate::math::Point3;
use crate::model::OptimalDimensions;
use crate::presentation::{format_measurement, scale_for_render, DisplayUnit, ScaledRenderDimensions};

use super::{horizontal_measure, vertical_measure, Label, SceneAnnotations};

/// Builds the measurement overlay for the basic 3D view.
///
/// Labels are always in centimeters at two decimals. The cylinder gets
/// height, radius, and diameter callouts; the box gets height and base-width
/// callouts. Positions are in render space, offset clear of the model.
#[must_use]
pub fn compact_annotations(dims: &OptimalDimensions) -> SceneAnnotations {
    let cm = DisplayUnit::Centimeters;

    let measurements = match (scale_for_render(dims), *dims) {
        (
            ScaledRenderDimensions::Cylinder { radius: r, height: h },
            OptimalDimensions::Cylinder {
                radius: real_r,
                height: real_h,
                ..
            },
        ) => {
            let offset = r + 0.3;
            vec![
                vertical_measure(
                    offset,
                    -h / 2.0,
                    h / 2.0,
                    0.0,
                    0.05,
                    Label::new(
                        Point3::new(offset + 0.15, 0.0, 0.0),
                        format!("h = {}", format_measurement(real_h, real_h, cm)),
                    ),
                ),
                horizontal_measure(
                    0.0,
                    r,
                    h / 2.0 + 0.15,
                    0.0,
                    0.05,
                    Label::new(
                        Point3::new(r / 2.0, h / 2.0 + 0.28, 0.0),
                        format!("r = {}", format_measurement(real_r, real_r, cm)),
                    ),
                ),
                horizontal_measure(
                    -r,
                    r,
                    -h / 2.0 - 0.15,
                    0.0,
                    0.05,
                    Label::new(
                        Point3::new(0.0, -h / 2.0 - 0.3, 0.0),
                        format!("d = {}", format_measurement(2.0 * real_r, real_r, cm)),
                    ),
                ),
            ]
        }
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
        ) => {
            let offset_x = w / 2.0 + 0.25;
            let offset_y = -h / 2.0 - 0.15;
            vec![
                vertical_measure(
                    offset_x,
                    -h / 2.0,
                    h / 2.0,
                    0.0,
                    0.05,
                    Label::new(
                        Point3::new(offset_x + 0.12, 0.0, 0.0),
                        format!("h = {}", format_measurement(real_h, real_h, cm)),
                    ),
                ),
                horizontal_measure(
                    -w / 2.0,
                    w / 2.0,
                    offset_y,
                    d / 2.0,
                    0.05,
                    Label::new(
                        Point3::new(0.0, offset_y - 0.12, d / 2.0),
                        format!("x = {}", format_measurement(real_w, real_w, cm)),
                    ),
                ),
            ]
        }
        // The render and real variants always agree on shape by construction.
        _ => Vec::new(),
    };

    SceneAnnotations {
        measurements,
        rulers: Vec::new(),
        axes: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Shape, Volume};
    use crate::optimize::optimize;
    use crate::presentation::SCALE_FACTOR;
    use approx::assert_relative_eq;

    #[test]
    fn cylinder_has_three_callouts_and_no_rulers() {
        let dims = optimize(Shape::Cylinder, Volume::new(330.0)).unwrap();
        let scene = compact_annotations(&dims);
        assert_eq!(scene.measurements.len(), 3);
        assert!(scene.rulers.is_empty());
        assert!(scene.axes.is_none());
    }

    #[test]
    fn box_has_two_callouts() {
        let dims = optimize(Shape::SquareBasedBox, Volume::new(1000.0)).unwrap();
        let scene = compact_annotations(&dims);
        assert_eq!(scene.measurements.len(), 2);
    }

    #[test]
    fn labels_show_real_centimeters_not_render_units() {
        let dims = optimize(Shape::Cylinder, Volume::new(330.0)).unwrap();
        let scene = compact_annotations(&dims);
        let texts: Vec<&str> = scene
            .measurements
            .iter()
            .map(|m| m.label.text.as_str())
            .collect();
        assert_eq!(texts, ["h = 7.49 cm", "r = 3.74 cm", "d = 7.49 cm"]);
    }

    #[test]
    fn height_callout_is_offset_clear_of_the_model() {
        let dims = optimize(Shape::Cylinder, Volume::new(330.0)).unwrap();
        let OptimalDimensions::Cylinder { radius, .. } = dims else {
            panic!("expected cylinder dimensions");
        };
        let scene = compact_annotations(&dims);
        let height_line = &scene.measurements[0];
        assert_relative_eq!(
            height_line.line.start.x,
            radius * SCALE_FACTOR + 0.3,
            max_relative = 1e-12
        );
    }
}
