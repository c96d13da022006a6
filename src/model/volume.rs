use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Quick-select volumes offered by the input surface, in cm³.
pub const VOLUME_PRESETS: [f64; 4] = [330.0, 500.0, 1000.0, 2000.0];

/// A volume input in cubic centimeters.
///
/// Absent, zero, or negative input is a first-class "no input" state rather
/// than an error: downstream components render an explicit placeholder for it
/// instead of computing nonsensical geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Volume(Option<f64>);

impl Volume {
    /// Creates a volume holding the given value.
    ///
    /// The value is stored as entered; whether it is usable for optimization
    /// is decided by [`Volume::value`].
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Some(value))
    }

    /// Creates the empty ("no input") state.
    #[must_use]
    pub fn empty() -> Self {
        Self(None)
    }

    /// Parses the text of a volume input field.
    ///
    /// Empty or whitespace-only text is the empty state, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is neither empty nor a valid number.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::empty());
        }
        text.parse::<f64>()
            .map(|v| Self(Some(v)))
            .map_err(|_| InputError::InvalidNumber(text.to_owned()))
    }

    /// Returns the volume when it is usable for optimization: present,
    /// finite, and strictly positive.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self.0 {
            Some(v) if v > 0.0 && v.is_finite() => Some(v),
            _ => None,
        }
    }

    /// Returns the value exactly as entered, including zero or negative
    /// input, or `None` for the empty state.
    #[must_use]
    pub fn raw(self) -> Option<f64> {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_is_no_input() {
        assert_eq!(Volume::parse("").unwrap(), Volume::empty());
        assert_eq!(Volume::parse("   ").unwrap(), Volume::empty());
    }

    #[test]
    fn parse_number() {
        let v = Volume::parse("330").unwrap();
        assert_eq!(v.value(), Some(330.0));

        let v = Volume::parse(" 12.5 ").unwrap();
        assert_eq!(v.value(), Some(12.5));
    }

    #[test]
    fn parse_garbage_is_an_error() {
        assert!(Volume::parse("abc").is_err());
        assert!(Volume::parse("12x").is_err());
    }

    #[test]
    fn non_positive_is_no_input_not_an_error() {
        assert_eq!(Volume::new(0.0).value(), None);
        assert_eq!(Volume::new(-5.0).value(), None);
        assert_eq!(Volume::new(-5.0).raw(), Some(-5.0));
    }

    #[test]
    fn non_finite_is_no_input() {
        assert_eq!(Volume::new(f64::NAN).value(), None);
        assert_eq!(Volume::new(f64::INFINITY).value(), None);
    }

    #[test]
    fn presets_are_positive() {
        for preset in VOLUME_PRESETS {
            assert!(Volume::new(preset).value().is_some());
        }
    }
}
