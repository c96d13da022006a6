/// 3D point type, used for render-space annotation geometry.
pub type Point3 = nalgebra::Point3<f64>;

/// Relative tolerance for floating-point comparisons of computed dimensions.
pub const TOLERANCE: f64 = 1e-9;
