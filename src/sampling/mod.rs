//! Continuous signal generation and discrete sampling.

mod sine;

pub use sine::SineWave;

use crate::core::{ContinuousSignal, Curve, Sample, TimeGrid};
use crate::error::{NyquistResult, ensure_positive};

/// Generates the continuous curve `sin(2π f t)` over `[0, window)`.
///
/// The curve has `ceil(window / step)` points.
///
/// # Examples
///
/// ```
/// use nyquist::continuous_signal;
///
/// let curve = continuous_signal(1.0, 4.0, 0.02).unwrap();
/// assert_eq!(curve.len(), 200);
/// ```
pub fn continuous_signal(signal_freq: f64, window: f64, step: f64) -> NyquistResult<Curve> {
    let sine = SineWave::new(signal_freq)?;
    let grid = TimeGrid::with_step(window, step)?;
    Ok(sine.curve(&grid))
}

/// Samples `sin(2π f t)` every `1 / sampling_freq` seconds over `[0, window)`.
///
/// # Errors
///
/// Returns [`NyquistError::InvalidParameter`](crate::NyquistError) if either
/// frequency or the window is zero, negative or not finite.
///
/// # Examples
///
/// ```
/// use nyquist::sample_signal;
///
/// let samples = sample_signal(1.0, 8.0, 4.0).unwrap();
/// assert_eq!(samples.len(), 32);
/// assert_eq!(samples[2].t, 0.25);
/// assert!(sample_signal(1.0, 0.0, 4.0).is_err());
/// ```
pub fn sample_signal(
    signal_freq: f64,
    sampling_freq: f64,
    window: f64,
) -> NyquistResult<Vec<Sample>> {
    let sine = SineWave::new(signal_freq)?;
    let sampling_freq = ensure_positive("sampling_freq", sampling_freq)?;
    let grid = TimeGrid::with_rate(window, sampling_freq)?;
    Ok(sine.sample(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NyquistError;

    #[test]
    fn test_continuous_signal_unit_amplitude() {
        let curve = continuous_signal(0.25, 4.0, 0.02).unwrap();
        let peak = curve.peak().unwrap();
        // 0.25 Hz peaks at t = 1 s
        assert!((peak.t - 1.0).abs() < 1e-9);
        assert!((peak.amplitude - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_continuous_signal_rejects_bad_frequency() {
        assert!(matches!(
            continuous_signal(0.0, 4.0, 0.02),
            Err(NyquistError::InvalidParameter {
                name: "signal_freq",
                ..
            })
        ));
    }

    #[test]
    fn test_sample_count_matches_rate() {
        for (fs, expected) in [(1.0, 4), (2.5, 10), (8.0, 32), (19.5, 78), (20.0, 80)] {
            let samples = sample_signal(1.0, fs, 4.0).unwrap();
            assert_eq!(samples.len(), expected, "fs = {}", fs);
        }
    }

    #[test]
    fn test_samples_lie_on_the_sine() {
        let samples = sample_signal(3.0, 8.0, 4.0).unwrap();
        let sine = SineWave::new(3.0).unwrap();
        for sample in &samples {
            assert_eq!(sample.amplitude, sine.amplitude_at(sample.t));
        }
    }

    #[test]
    fn test_sample_signal_rejects_zero_rate() {
        assert!(matches!(
            sample_signal(1.0, 0.0, 4.0),
            Err(NyquistError::InvalidParameter {
                name: "sampling_freq",
                ..
            })
        ));
        assert!(sample_signal(1.0, -8.0, 4.0).is_err());
    }
}
