use tracing::debug;

use crate::chat::ContextSnapshot;
use crate::derivation::{derivation_steps, DerivationStep};
use crate::model::{OptimalDimensions, Shape, Volume, VOLUME_PRESETS};
use crate::optimize::optimize;
use crate::presentation::DisplayUnit;
use crate::scene::{advanced_annotations, compact_annotations, SceneAnnotations};

/// The interactive calculator state: selected shape, entered volume, and
/// display unit, with the optimum memoized on `(shape, volume)`.
///
/// Every derived output is a pure function of the current state, so
/// re-querying it on unrelated re-renders is always safe; the memo only
/// avoids redundant recomputation. There is no background work and no
/// partial update: the cached optimum is superseded wholesale whenever shape
/// or volume changes.
#[derive(Debug, Clone)]
pub struct Calculator {
    shape: Shape,
    volume: Volume,
    unit: DisplayUnit,
    /// Memoized optimum, keyed by shape and the exact bits of the volume.
    cache: Option<(Shape, u64, OptimalDimensions)>,
}

impl Default for Calculator {
    fn default() -> Self {
        // The input surface starts on the 330 cm³ can preset.
        Self {
            shape: Shape::Cylinder,
            volume: Volume::new(VOLUME_PRESETS[0]),
            unit: DisplayUnit::Centimeters,
            cache: None,
        }
    }
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    /// Selects the shape. A change invalidates nothing eagerly; the memo key
    /// simply stops matching.
    pub fn set_shape(&mut self, shape: Shape) {
        if self.shape != shape {
            debug!(?shape, "shape selected");
            self.shape = shape;
        }
    }

    /// Sets the entered volume, including the empty state.
    pub fn set_volume(&mut self, volume: Volume) {
        debug!(volume = ?volume.raw(), "volume entered");
        self.volume = volume;
    }

    /// Applies one of the quick-select presets. Returns the chosen volume,
    /// or `None` if the index is out of range.
    pub fn apply_preset(&mut self, index: usize) -> Option<f64> {
        let preset = *VOLUME_PRESETS.get(index)?;
        self.set_volume(Volume::new(preset));
        Some(preset)
    }

    /// Advances the display unit through the `cm → m → % → cm` cycle and
    /// returns the new unit.
    pub fn cycle_unit(&mut self) -> DisplayUnit {
        self.unit = self.unit.cycle();
        debug!(unit = ?self.unit, "display unit cycled");
        self.unit
    }

    /// Returns the optimum for the current state, or `None` in the empty
    /// state. Recomputes only when shape or volume actually changed.
    pub fn results(&mut self) -> Option<OptimalDimensions> {
        let v = self.volume.value()?;
        let key = (self.shape, v.to_bits());

        if let Some((shape, bits, dims)) = self.cache {
            if (shape, bits) == key {
                return Some(dims);
            }
        }

        let dims = optimize(self.shape, self.volume)?;
        self.cache = Some((key.0, key.1, dims));
        Some(dims)
    }

    /// Returns the 7-step worked derivation for the current state.
    pub fn derivation(&mut self) -> Option<Vec<DerivationStep>> {
        self.results()?;
        derivation_steps(self.shape, self.volume)
    }

    /// Returns the basic-view measurement overlay.
    pub fn compact_scene(&mut self) -> Option<SceneAnnotations> {
        self.results().map(|dims| compact_annotations(&dims))
    }

    /// Returns the advanced-view overlay in the current display unit.
    pub fn advanced_scene(&mut self) -> Option<SceneAnnotations> {
        let unit = self.unit;
        self.results()
            .map(|dims| advanced_annotations(&dims, unit))
    }

    /// Captures the state the chat assistant cares about, for change
    /// notification diffing.
    pub fn context_snapshot(&mut self) -> ContextSnapshot {
        let results = self.results();
        ContextSnapshot::capture(self.shape, self.volume, results.as_ref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_state_computes_the_can_preset() {
        let mut calc = Calculator::new();
        assert_eq!(calc.shape(), Shape::Cylinder);
        let dims = calc.results().unwrap();
        assert_relative_eq!(dims.surface_area(), 264.36, max_relative = 1e-4);
    }

    #[test]
    fn empty_volume_yields_empty_everything() {
        let mut calc = Calculator::new();
        calc.set_volume(Volume::empty());
        assert!(calc.results().is_none());
        assert!(calc.derivation().is_none());
        assert!(calc.compact_scene().is_none());
        assert!(calc.advanced_scene().is_none());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let mut calc = Calculator::new();
        let first = calc.results().unwrap();
        let second = calc.results().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn shape_change_recomputes() {
        let mut calc = Calculator::new();
        let cylinder = calc.results().unwrap();
        calc.set_shape(Shape::SquareBasedBox);
        let boxed = calc.results().unwrap();
        assert_eq!(cylinder.shape(), Shape::Cylinder);
        assert_eq!(boxed.shape(), Shape::SquareBasedBox);
    }

    #[test]
    fn presets_select_known_volumes() {
        let mut calc = Calculator::new();
        assert_eq!(calc.apply_preset(2), Some(1000.0));
        assert_eq!(calc.volume().value(), Some(1000.0));
        assert_eq!(calc.apply_preset(99), None);
    }

    #[test]
    fn unit_cycle_changes_only_presentation() {
        let mut calc = Calculator::new();
        let before = calc.results().unwrap();
        assert_eq!(calc.cycle_unit(), DisplayUnit::Meters);
        let after = calc.results().unwrap();
        assert_eq!(before, after);

        let scene = calc.advanced_scene().unwrap();
        assert!(scene.measurements[0].label.text.ends_with(" m"));
    }
}
