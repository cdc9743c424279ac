//! Normalized sinc kernel and sinc-weighted signals.

use crate::core::{ContinuousSignal, Sample};
use std::f64::consts::PI;

/// Normalized sinc: `sin(πx) / (πx)`, with the limit value `1` at `x = 0`.
///
/// `sinc(0)` is exactly `1`. The zeros at nonzero integers are only
/// approximate in floating point: `sin(π·n)` evaluates to a residue around
/// `1e-16`, so `sinc(n)` is tiny but not `0.0`.
///
/// # Examples
///
/// ```
/// use nyquist::sinc;
///
/// assert_eq!(sinc(0.0), 1.0);
/// assert!(sinc(3.0).abs() < 1e-15);
/// assert!((sinc(0.5) - 2.0 / std::f64::consts::PI).abs() < 1e-15);
/// ```
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let px = PI * x;
    px.sin() / px
}

/// One sample's contribution to the reconstruction:
/// `a · sinc(fs · (t − t_s))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SincComponent {
    sample: Sample,
    sampling_freq: f64,
}

impl SincComponent {
    /// Creates the contribution of `sample` at `sampling_freq`.
    pub fn new(sample: Sample, sampling_freq: f64) -> Self {
        Self {
            sample,
            sampling_freq,
        }
    }

    /// The sample this component is centred on.
    pub fn sample(&self) -> &Sample {
        &self.sample
    }
}

impl ContinuousSignal for SincComponent {
    #[inline]
    fn amplitude_at(&self, t: f64) -> f64 {
        self.sample.amplitude * sinc(self.sampling_freq * (t - self.sample.t))
    }
}

/// Whittaker–Shannon interpolation over a finite sample set.
///
/// Only the samples handed in contribute; samples that would lie outside the
/// window are never synthesized, so the result drifts away from the ideal
/// reconstruction towards the window edges.
#[derive(Debug, Clone, Copy)]
pub struct SincReconstruction<'a> {
    samples: &'a [Sample],
    sampling_freq: f64,
}

impl<'a> SincReconstruction<'a> {
    /// Wraps `samples` taken at `sampling_freq`.
    pub fn new(samples: &'a [Sample], sampling_freq: f64) -> Self {
        Self {
            samples,
            sampling_freq,
        }
    }

    /// One component per sample, in sample order.
    pub fn components(&self) -> impl Iterator<Item = SincComponent> + '_ {
        self.samples
            .iter()
            .map(|&s| SincComponent::new(s, self.sampling_freq))
    }
}

impl ContinuousSignal for SincReconstruction<'_> {
    fn amplitude_at(&self, t: f64) -> f64 {
        // Same summation order as adding up the component curves
        self.components()
            .fold(0.0, |acc, component| acc + component.amplitude_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinc_zero_is_exactly_one() {
        assert_eq!(sinc(0.0), 1.0);
        assert_eq!(sinc(-0.0), 1.0);
    }

    #[test]
    fn test_sinc_integer_zeros_are_approximate() {
        // sin(3π) rounds to a residue, not 0
        assert_ne!(sinc(3.0), 0.0);
        assert!(sinc(3.0).abs() < 1e-16);
    }

    #[test]
    fn test_sinc_integer_zeros() {
        for n in 1..50 {
            assert!(sinc(n as f64).abs() < 1e-14, "sinc({})", n);
            assert!(sinc(-(n as f64)).abs() < 1e-14, "sinc(-{})", n);
        }
    }

    #[test]
    fn test_sinc_is_even() {
        for x in [0.1, 0.5, 1.7, 12.25] {
            assert_eq!(sinc(x), sinc(-x));
        }
    }

    #[test]
    fn test_sinc_near_zero_is_finite() {
        let v = sinc(1e-300);
        assert!(v.is_finite());
        assert!((v - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_component_peaks_at_its_sample() {
        let sample = Sample::new(2, 0.25, 0.7);
        let component = SincComponent::new(sample, 8.0);
        assert_eq!(component.amplitude_at(0.25), 0.7);
        // zero at every other sampling instant
        assert!(component.amplitude_at(0.375).abs() < 1e-15);
        assert!(component.amplitude_at(0.0).abs() < 1e-15);
    }

    #[test]
    fn test_reconstruction_interpolates_samples() {
        let samples = [
            Sample::new(0, 0.0, 0.5),
            Sample::new(1, 0.5, -1.0),
            Sample::new(2, 1.0, 0.25),
        ];
        let reconstruction = SincReconstruction::new(&samples, 2.0);
        for s in &samples {
            assert!((reconstruction.amplitude_at(s.t) - s.amplitude).abs() < 1e-15);
        }
    }

    #[test]
    fn test_empty_reconstruction_is_silent() {
        let reconstruction = SincReconstruction::new(&[], 4.0);
        assert_eq!(reconstruction.amplitude_at(1.3), 0.0);
        assert_eq!(reconstruction.components().count(), 0);
    }
}
