use serde::{Deserialize, Serialize};

use crate::model::{OptimalDimensions, Shape, Volume};
use crate::optimize::optimize;

/// One step of the worked derivation shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationStep {
    /// Short step heading.
    pub title: String,
    /// Explanatory prose for the step.
    pub narrative: String,
    /// LaTeX formulas, symbolic first, then with the concrete volume
    /// substituted in.
    pub formulas: Vec<String>,
    /// Highlighted numeric result, where the step produces one.
    pub result: Option<String>,
}

/// Number of steps in a derivation; fixed for both shapes.
pub const STEP_COUNT: usize = 7;

/// Builds the step-by-step derivation of the optimum for the given shape and
/// volume, mirroring the algebra the engine evaluates: problem statement,
/// constraint substitution, one-variable area function, derivative, critical
/// point, optimal height, minimal area.
///
/// Returns `None` for the empty-input state, exactly when [`optimize`] does.
#[must_use]
pub fn derivation_steps(shape: Shape, volume: Volume) -> Option<Vec<DerivationStep>> {
    let dims = optimize(shape, volume)?;
    let v = volume.value()?;

    let steps = match dims {
        OptimalDimensions::Cylinder {
            radius,
            height,
            surface_area,
        } => cylinder_steps(v, radius, height, surface_area),
        OptimalDimensions::SquareBasedBox {
            side,
            height,
            surface_area,
            ..
        } => box_steps(v, side, height, surface_area),
    };

    debug_assert_eq!(steps.len(), STEP_COUNT);
    Some(steps)
}

/// Formats a computed value the way every numeric substitution in the
/// derivation does.
fn fmt(value: f64) -> String {
    format!("{value:.4}")
}

fn step(title: &str, narrative: &str, formulas: Vec<String>) -> DerivationStep {
    DerivationStep {
        title: title.to_owned(),
        narrative: narrative.to_owned(),
        formulas,
        result: None,
    }
}

fn with_result(mut s: DerivationStep, result: String) -> DerivationStep {
    s.result = Some(result);
    s
}

#[allow(clippy::too_many_lines)]
fn cylinder_steps(v: f64, radius: f64, height: f64, area: f64) -> Vec<DerivationStep> {
    let r = fmt(radius);
    let h = fmt(height);

    vec![
        step(
            "Problem statement",
            &format!(
                "Minimize the surface area of a cylinder holding a fixed volume V = {v} cm³."
            ),
            vec![
                "A = 2\\pi r^2 + 2\\pi rh".to_owned(),
                "V = \\pi r^2 h".to_owned(),
            ],
        ),
        step(
            "Express h in terms of r",
            "Solve the volume constraint for h.",
            vec![format!("h = \\frac{{V}}{{\\pi r^2}} = \\frac{{{v}}}{{\\pi r^2}}")],
        ),
        step(
            "Area as a one-variable function",
            "Substitute h into the area function.",
            vec![
                format!("A(r) = 2\\pi r^2 + 2\\pi r \\cdot \\frac{{{v}}}{{\\pi r^2}}"),
                format!("A(r) = 2\\pi r^2 + \\frac{{{}}}{{r}}", 2.0 * v),
            ],
        ),
        step(
            "Differentiate",
            "Differentiate A(r) with respect to r.",
            vec![format!("A'(r) = 4\\pi r - \\frac{{{}}}{{r^2}}", 2.0 * v)],
        ),
        with_result(
            step(
                "Critical point",
                "Set A'(r) = 0 and solve for r.",
                vec![
                    format!("4\\pi r = \\frac{{{}}}{{r^2}}", 2.0 * v),
                    format!(
                        "r^3 = \\frac{{{}}}{{4\\pi}} = \\frac{{{v}}}{{2\\pi}}",
                        2.0 * v
                    ),
                    format!("r = \\sqrt[3]{{\\frac{{V}}{{2\\pi}}}} = \\sqrt[3]{{\\frac{{{v}}}{{2\\pi}}}}"),
                ],
            ),
            format!("r_{{\\text{{opt}}}} = {r}\\text{{ cm}}"),
        ),
        with_result(
            step(
                "Optimal height",
                &format!(
                    "Substitute the optimal radius into the height equation. \
                     Verification: h = 2r, and {h} ≈ 2 × {r}."
                ),
                vec![format!("h = \\frac{{{v}}}{{\\pi \\cdot ({r})^2}}")],
            ),
            format!("h_{{\\text{{opt}}}} = {h}\\text{{ cm}}"),
        ),
        with_result(
            step(
                "Minimal surface area",
                "Evaluate the area at the optimal dimensions.",
                vec![
                    "A_{\\min} = 2\\pi r^2 + 2\\pi rh".to_owned(),
                    format!("A_{{\\min}} = 2\\pi ({r})^2 + 2\\pi ({r})({h})"),
                ],
            ),
            format!("A_{{\\min}} = {}\\text{{ cm}}^2", fmt(area)),
        ),
    ]
}

fn box_steps(v: f64, side: f64, height: f64, area: f64) -> Vec<DerivationStep> {
    let x = fmt(side);
    let h = fmt(height);

    vec![
        step(
            "Problem statement",
            &format!(
                "Minimize the surface area of a square-based box holding a fixed volume \
                 V = {v} cm³, where x is the side of the base and h is the height."
            ),
            vec!["A = 2x^2 + 4xh".to_owned(), "V = x^2 h".to_owned()],
        ),
        step(
            "Express h in terms of x",
            "Solve the volume constraint for h.",
            vec![format!("h = \\frac{{V}}{{x^2}} = \\frac{{{v}}}{{x^2}}")],
        ),
        step(
            "Area as a one-variable function",
            "Substitute h into the area function.",
            vec![
                format!("A(x) = 2x^2 + 4x \\cdot \\frac{{{v}}}{{x^2}}"),
                format!("A(x) = 2x^2 + \\frac{{{}}}{{x}}", 4.0 * v),
            ],
        ),
        step(
            "Differentiate",
            "Differentiate A(x) with respect to x.",
            vec![format!("A'(x) = 4x - \\frac{{{}}}{{x^2}}", 4.0 * v)],
        ),
        with_result(
            step(
                "Critical point",
                "Set A'(x) = 0 and solve for x.",
                vec![
                    format!("4x = \\frac{{{}}}{{x^2}}", 4.0 * v),
                    format!("x^3 = {v}"),
                    format!("x = \\sqrt[3]{{V}} = \\sqrt[3]{{{v}}}"),
                ],
            ),
            format!("x_{{\\text{{opt}}}} = {x}\\text{{ cm}}"),
        ),
        with_result(
            step(
                "Optimal height",
                &format!(
                    "Substitute the optimal side into the height equation. \
                     Verification: x = h, since {x} ≈ {h}; the optimal shape is a cube."
                ),
                vec![format!("h = \\frac{{{v}}}{{({x})^2}}")],
            ),
            format!("h_{{\\text{{opt}}}} = {h}\\text{{ cm}}"),
        ),
        with_result(
            step(
                "Minimal surface area",
                "Evaluate the area at the optimal dimensions.",
                vec![
                    "A_{\\min} = 2x^2 + 4xh".to_owned(),
                    format!("A_{{\\min}} = 2({x})^2 + 4({x})({h})"),
                ],
            ),
            format!("A_{{\\min}} = {}\\text{{ cm}}^2", fmt(area)),
        ),
    ]
}
