//! Continuous sine source.

use crate::core::ContinuousSignal;
use crate::error::{NyquistResult, ensure_positive};
use std::f64::consts::PI;

/// A unit-amplitude sine wave `sin(2π f t)` starting at phase zero.
///
/// Unlike a streaming oscillator there is no phase accumulator: the wave is
/// evaluated directly at each instant, so evaluation order never matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    frequency: f64,
}

impl SineWave {
    /// Creates a sine wave.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency in Hz, finite and greater than 0
    ///
    /// # Examples
    ///
    /// ```
    /// use nyquist::{ContinuousSignal, SineWave};
    ///
    /// let sine = SineWave::new(2.0).unwrap();
    /// assert!((sine.amplitude_at(0.125) - 1.0).abs() < 1e-12);
    /// assert!(SineWave::new(0.0).is_err());
    /// ```
    pub fn new(frequency: f64) -> NyquistResult<Self> {
        let frequency = ensure_positive("signal_freq", frequency)?;
        Ok(Self { frequency })
    }

    /// Frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Duration of one cycle in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }
}

impl ContinuousSignal for SineWave {
    fn amplitude_at(&self, t: f64) -> f64 {
        (2.0 * PI * self.frequency * t).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimeGrid;

    #[test]
    fn test_sine_creation() {
        let sine = SineWave::new(440.0).unwrap();
        assert_eq!(sine.frequency(), 440.0);
    }

    #[test]
    fn test_rejects_bad_frequency() {
        for f in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(SineWave::new(f).is_err(), "f = {}", f);
        }
    }

    #[test]
    fn test_starts_at_zero_phase() {
        let sine = SineWave::new(7.3).unwrap();
        assert_eq!(sine.amplitude_at(0.0), 0.0);
    }

    #[test]
    fn test_quarter_period_peak() {
        let sine = SineWave::new(0.5).unwrap();
        assert_eq!(sine.period(), 2.0);
        assert!((sine.amplitude_at(0.5) - 1.0).abs() < 1e-12);
        assert!((sine.amplitude_at(1.5) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_range() {
        let sine = SineWave::new(9.9).unwrap();
        let grid = TimeGrid::with_step(4.0, 0.001).unwrap();
        for point in sine.curve(&grid).iter() {
            assert!((-1.0..=1.0).contains(&point.amplitude));
        }
    }
}
