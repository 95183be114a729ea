//! Slider fill percentage and the track background built from it.

use crate::error::{ensure_finite, EmiError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of `value` inside `[min, max]` as a percentage.
///
/// Values outside the range give percentages below 0 or above 100; clamping
/// is left to the caller.
pub fn progress(min: f64, max: f64, value: f64) -> Result<f64> {
    let min = ensure_finite("min", min)?;
    let max = ensure_finite("max", max)?;
    let value = ensure_finite("value", value)?;

    if max == min {
        return Err(EmiError::InvalidRange { min, max });
    }
    Ok((value - min) / (max - min) * 100.)
}

/// CSS background for a range input filled up to `progress` percent.
pub fn track_background(progress: f64, fill: &str, track: &str) -> String {
    format!(
        "linear-gradient(to right, {fill} 0%, {fill} {progress}%, {track} {progress}%, {track} 100%)"
    )
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl SliderRange {
    pub fn new(min: f64, max: f64, value: f64) -> Self {
        Self { min, max, value }
    }

    pub fn progress(&self) -> Result<f64> {
        progress(self.min, self.max, self.value)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Same range with `value` pulled back inside the bounds.
    pub fn clamped(&self) -> Self {
        Self {
            value: self.value.clamp(self.min.min(self.max), self.max.max(self.min)),
            ..*self
        }
    }

    pub fn with_value(&self, value: f64) -> Self {
        Self { value, ..*self }
    }
}
