//! Compiled-in bounds and starting values for the three loan controls.

use crate::slider::SliderRange;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const COLOR_PRIMARY: &str = "#2563eb";
pub const COLOR_GRAY_LIGHT: &str = "#e5e7eb";

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

impl SliderSpec {
    pub const fn new(min: f64, max: f64, step: f64, value: f64) -> Self {
        Self {
            min,
            max,
            step,
            value,
        }
    }

    pub fn range(&self) -> SliderRange {
        SliderRange::new(self.min, self.max, self.value)
    }

    /// Nearest value a range input with these bounds would accept: a whole
    /// number of steps above `min`, no higher than `max`.
    pub fn snap(&self, value: f64) -> f64 {
        let snapped = if self.step > 0. && self.step.is_finite() {
            let on_step = self.min + ((value - self.min) / self.step).round() * self.step;
            // drop the noise of fractional steps such as 0.1
            (on_step * 1e10).round() / 1e10
        } else {
            value
        };
        SliderRange::new(self.min, self.max, snapped).clamped().value
    }

    pub fn with_value(&self, value: f64) -> Self {
        Self { value, ..*self }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SliderDefaults {
    pub principal: SliderSpec,
    pub tenure: SliderSpec,
    pub rate: SliderSpec,
}

/// Principal in rupees, tenure in months, rate in percent a year.
pub const SLIDER_DEFAULTS: SliderDefaults = SliderDefaults {
    principal: SliderSpec::new(100000., 10000000., 10000., 1000000.),
    tenure: SliderSpec::new(12., 360., 1., 240.),
    rate: SliderSpec::new(1., 20., 0.1, 8.5),
};

impl Default for SliderDefaults {
    fn default() -> Self {
        SLIDER_DEFAULTS
    }
}
