use std::f64::consts::PI;

use tracing::debug;

use crate::model::{OptimalDimensions, Shape, Volume};

/// Computes the dimensions minimizing surface area for the given shape and
/// fixed volume.
///
/// Both minima are closed-form, obtained by substituting the volume
/// constraint into the area function and solving for the critical point of
/// the resulting one-variable function:
///
/// - Cylinder: `A(r) = 2πr² + 2V/r`, so `A'(r) = 0` gives `r = (V/2π)^(1/3)`
///   and `h = 2r`.
/// - Square-based box: `A(x) = 2x² + 4V/x`, so `A'(x) = 0` gives `x = V^(1/3)`
///   and `h = x` (the optimum degenerates to a cube).
///
/// Both critical points are global minima (`A'' > 0` everywhere on `r > 0`).
/// The returned surface area is evaluated from the final dimensions rather
/// than re-derived symbolically, so the value always satisfies the area
/// formula at the returned optimum.
///
/// Returns `None` when the volume is absent or non-positive; that is the
/// expected empty state, not a failure. Pure and deterministic.
#[must_use]
pub fn optimize(shape: Shape, volume: Volume) -> Option<OptimalDimensions> {
    let v = volume.value()?;

    let dims = match shape {
        Shape::Cylinder => {
            let radius = (v / (2.0 * PI)).cbrt();
            let height = 2.0 * radius;
            let surface_area = 2.0 * PI * radius * radius + 2.0 * PI * radius * height;
            OptimalDimensions::Cylinder {
                radius,
                height,
                surface_area,
            }
        }
        Shape::SquareBasedBox => {
            let side = v.cbrt();
            let height = side;
            let depth = side;
            let surface_area = 2.0 * side * side + 4.0 * side * height;
            OptimalDimensions::SquareBasedBox {
                side,
                height,
                depth,
                surface_area,
            }
        }
    };

    debug!(?shape, volume = v, area = dims.surface_area(), "optimized");
    Some(dims)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    #[test]
    fn cylinder_330() {
        let dims = optimize(Shape::Cylinder, Volume::new(330.0)).unwrap();
        let OptimalDimensions::Cylinder {
            radius,
            height,
            surface_area,
        } = dims
        else {
            panic!("expected cylinder dimensions");
        };

        let expected_radius = (330.0 / (2.0 * PI)).cbrt();
        assert_relative_eq!(radius, expected_radius, max_relative = 1e-12);
        assert_relative_eq!(radius, 3.7449, max_relative = 1e-4);
        assert_relative_eq!(height, 7.4899, max_relative = 1e-4);
        assert_relative_eq!(surface_area, 264.36, max_relative = 1e-4);
    }

    #[test]
    fn cylinder_height_is_twice_radius() {
        for v in [1.0, 330.0, 500.0, 12345.6] {
            let dims = optimize(Shape::Cylinder, Volume::new(v)).unwrap();
            let OptimalDimensions::Cylinder { radius, height, .. } = dims else {
                panic!("expected cylinder dimensions");
            };
            assert_relative_eq!(height, 2.0 * radius, max_relative = TOLERANCE);
        }
    }

    #[test]
    fn box_1000_is_exact_cube() {
        let dims = optimize(Shape::SquareBasedBox, Volume::new(1000.0)).unwrap();
        let OptimalDimensions::SquareBasedBox {
            side,
            height,
            depth,
            surface_area,
        } = dims
        else {
            panic!("expected box dimensions");
        };

        // 1000^(1/3) = 10 exactly, so A = 2(100) + 4(10)(10) = 600.
        assert_relative_eq!(side, 10.0, max_relative = 1e-12);
        assert_relative_eq!(height, 10.0, max_relative = 1e-12);
        assert_relative_eq!(depth, 10.0, max_relative = 1e-12);
        assert_relative_eq!(surface_area, 600.0, max_relative = 1e-12);
    }

    #[test]
    fn box_degenerates_to_cube() {
        for v in [2.0, 330.0, 999.0] {
            let dims = optimize(Shape::SquareBasedBox, Volume::new(v)).unwrap();
            let OptimalDimensions::SquareBasedBox {
                side,
                height,
                depth,
                ..
            } = dims
            else {
                panic!("expected box dimensions");
            };
            assert_relative_eq!(side, height, max_relative = TOLERANCE);
            assert_relative_eq!(side, depth, max_relative = TOLERANCE);
        }
    }

    #[test]
    fn area_is_consistent_with_formula() {
        let dims = optimize(Shape::Cylinder, Volume::new(500.0)).unwrap();
        let OptimalDimensions::Cylinder {
            radius,
            height,
            surface_area,
        } = dims
        else {
            panic!("expected cylinder dimensions");
        };
        let recomputed = 2.0 * PI * radius * radius + 2.0 * PI * radius * height;
        assert_relative_eq!(surface_area, recomputed, max_relative = TOLERANCE);
    }

    #[test]
    fn empty_or_non_positive_volume_yields_nothing() {
        for shape in [Shape::Cylinder, Shape::SquareBasedBox] {
            assert!(optimize(shape, Volume::empty()).is_none());
            assert!(optimize(shape, Volume::new(0.0)).is_none());
            assert!(optimize(shape, Volume::new(-5.0)).is_none());
        }
    }

    #[test]
    fn optimum_satisfies_volume_constraint() {
        let dims = optimize(Shape::Cylinder, Volume::new(750.0)).unwrap();
        let OptimalDimensions::Cylinder { radius, height, .. } = dims else {
            panic!("expected cylinder dimensions");
        };
        assert_relative_eq!(PI * radius * radius * height, 750.0, max_relative = TOLERANCE);
    }
}
