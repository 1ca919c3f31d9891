//! Sensitivity bounds and stepping.
//!
//! Responsibilities:
//! - Define `SensitivityRange`: the closed [min, max] interval and the step.
//! - Clamp and quantize values so stepping never accumulates float error.
//!
//! Invariants:
//! - `min <= max` and `step > 0` after construction.
//! - Every value returned by `clamp`, `normalize` or `adjusted` lies in [min, max].

use crate::constants::{SENSITIVITY_MAX, SENSITIVITY_MIN, SENSITIVITY_STEP};

/// Closed range and step size for the sensitivity scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityRange {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for SensitivityRange {
    fn default() -> Self {
        Self {
            min: SENSITIVITY_MIN,
            max: SENSITIVITY_MAX,
            step: SENSITIVITY_STEP,
        }
    }
}

impl SensitivityRange {
    /// Create a range. Swapped bounds are reordered; a non-positive or
    /// non-finite step falls back to the default step.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            SENSITIVITY_STEP
        };
        Self { min, max, step }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamp a value into [min, max].
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Snap a value onto the step grid anchored at `min`, then clamp.
    pub fn normalize(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        self.clamp(trim_float_noise(self.min + steps * self.step, self.step))
    }

    /// The value one step away from `current` in the sign of `direction`.
    ///
    /// Only the sign of `direction` matters; zero returns `current` normalized.
    pub fn adjusted(&self, current: f64, direction: i32) -> f64 {
        let delta = f64::from(direction.signum()) * self.step;
        self.normalize(current + delta)
    }

    /// Returns true if the value lies within [min, max].
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Position of `value` within the range as a ratio in [0, 1].
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 1.0;
        }
        ((self.clamp(value) - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Decimal places kept when snapping, so `0.05 + 0.1` reads back as `0.15`.
const GRID_DECIMALS: i32 = 9;

/// Round `value` to `GRID_DECIMALS` places unless `step` is finer than that.
fn trim_float_noise(value: f64, step: f64) -> f64 {
    let scale = 10f64.powi(GRID_DECIMALS);
    if step * scale < 1.0 {
        return value;
    }
    (value * scale).round() / scale
}
