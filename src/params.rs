//! User-adjustable parameters and their host-side ranges.

use crate::error::{NyquistResult, ensure_positive};
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// The knobs a viewer turns.
///
/// # Examples
///
/// ```
/// use nyquist::Parameters;
///
/// let params = Parameters::default();
/// assert_eq!(params.signal_freq, 1.0);
/// assert_eq!(params.sampling_freq, 8.0);
/// assert!(!params.show_components);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct Parameters {
    /// Frequency of the source sine in Hz
    pub signal_freq: f64,
    /// Sampling rate in Hz
    pub sampling_freq: f64,
    /// Whether to compute the per-sample sinc curves
    pub show_components: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            signal_freq: 1.0,
            sampling_freq: 8.0,
            show_components: false,
        }
    }
}

impl Parameters {
    /// Creates parameters with component curves hidden.
    pub fn new(signal_freq: f64, sampling_freq: f64) -> Self {
        Self {
            signal_freq,
            sampling_freq,
            show_components: false,
        }
    }

    /// Checks both frequencies are finite and greater than 0.
    pub fn validate(&self) -> NyquistResult<()> {
        ensure_positive("signal_freq", self.signal_freq)?;
        ensure_positive("sampling_freq", self.sampling_freq)?;
        Ok(())
    }
}

/// A slider range: values are clamped to `[min, max]` and rounded to the
/// nearest multiple of `step` above `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    /// Signal frequency slider: 0.2 to 10 Hz in 0.1 Hz steps.
    pub const SIGNAL_FREQ: ParamRange = ParamRange {
        min: 0.2,
        max: 10.0,
        step: 0.1,
    };

    /// Sampling frequency slider: 1 to 20 Hz in 0.5 Hz steps.
    pub const SAMPLING_FREQ: ParamRange = ParamRange {
        min: 1.0,
        max: 20.0,
        step: 0.5,
    };

    /// Checks the range is non-empty with a positive step.
    pub fn validate(&self, name: &str) -> Result<(), String> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min <= self.max) {
            return Err(format!(
                "{} range [{}, {}] is empty or not finite",
                name, self.min, self.max
            ));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(format!("{} step {} must be greater than 0", name, self.step));
        }
        Ok(())
    }

    /// Clamps `value` into the range and snaps it to the step grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use nyquist::ParamRange;
    ///
    /// let range = ParamRange::SAMPLING_FREQ;
    /// assert_eq!(range.snap(7.8), 8.0);
    /// assert_eq!(range.snap(0.0), 1.0);
    /// assert_eq!(range.snap(99.0), 20.0);
    /// ```
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = round_nano(self.min + steps * self.step);
        snapped.clamp(self.min, self.max)
    }

    /// Moves `value` by `delta` whole steps, then snaps.
    pub fn nudge(&self, value: f64, delta: i32) -> f64 {
        self.snap(value + f64::from(delta) * self.step)
    }

    /// Returns true if `value` is inside `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Rounds to 9 decimal places, dropping the representation error of sums
/// like `0.2 + 7 * 0.1`.
fn round_nano(value: f64) -> f64 {
    const SCALE: f64 = 1e9;
    (value * SCALE).round() / SCALE
}
