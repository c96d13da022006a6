use super::{format_tick, DisplayUnit};

/// Default number of intervals on a ruled axis. A ruler shows one more mark
/// than it has intervals.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// One mark on a ruled axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerMark {
    /// Render-space offset of the mark along the axis, relative to the axis
    /// midpoint (the rulers are centered on the model).
    pub position: f64,
    /// Interpolated physical value at the mark, in cm.
    pub value: f64,
    /// Tick label text in the selected unit.
    pub label: String,
}

/// Builds the marks for a ruled axis.
///
/// Produces `tick_count + 1` evenly spaced marks. Positions interpolate over
/// the centered render span `[-axis_length/2, +axis_length/2]`; values
/// interpolate over the physical span `[0, real_axis_length]`. The same index
/// drives both interpolations, so position and value stay synchronized even
/// though the two ranges differ. The mark count never depends on the unit;
/// only the label text does.
#[must_use]
pub fn ruler_marks(
    axis_length: f64,
    real_axis_length: f64,
    tick_count: usize,
    unit: DisplayUnit,
) -> Vec<RulerMark> {
    let ticks = tick_count.max(1);
    let step = axis_length / ticks as f64;
    let real_step = real_axis_length / ticks as f64;

    (0..=ticks)
        .map(|i| {
            let value = i as f64 * real_step;
            RulerMark {
                position: -axis_length / 2.0 + i as f64 * step,
                value,
                label: format_tick(value, real_axis_length, unit),
            }
        })
        .collect()
}
