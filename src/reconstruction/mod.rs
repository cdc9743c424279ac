//! Sinc (Whittaker–Shannon) reconstruction from discrete samples.
//!
//! The reconstruction is the pointwise sum of one sinc curve per sample:
//!
//! ```text
//! y(t) = Σ a_k · sinc(fs · (t − t_k))
//! ```
//!
//! Only the samples actually taken inside the window contribute. The ideal
//! formula sums over infinitely many samples; dropping the ones outside
//! `[0, window)` leaves visible ringing near both window edges.

mod kernel;

pub use kernel::{SincComponent, SincReconstruction, sinc};

use crate::core::{ContinuousSignal, Curve, Sample, TimeGrid};
use crate::error::{NyquistResult, ensure_positive};

/// Reconstructs the signal from `samples` on the `[0, window)` grid spaced
/// `step` apart.
///
/// `signal_freq` is only validated; the reconstruction itself depends on the
/// samples and the rate they were taken at.
///
/// # Examples
///
/// ```
/// use nyquist::{reconstruct_signal, sample_signal};
///
/// let samples = sample_signal(1.0, 8.0, 4.0).unwrap();
/// let curve = reconstruct_signal(&samples, 1.0, 8.0, 4.0, 0.02).unwrap();
/// assert_eq!(curve.len(), 200);
/// ```
pub fn reconstruct_signal(
    samples: &[Sample],
    signal_freq: f64,
    sampling_freq: f64,
    window: f64,
    step: f64,
) -> NyquistResult<Curve> {
    ensure_positive("signal_freq", signal_freq)?;
    let sampling_freq = ensure_positive("sampling_freq", sampling_freq)?;
    let grid = TimeGrid::with_step(window, step)?;
    Ok(SincReconstruction::new(samples, sampling_freq).curve(&grid))
}

/// Evaluates the reconstruction at a single instant `t`.
///
/// # Examples
///
/// ```
/// use nyquist::{reconstruct_at, sample_signal};
///
/// let samples = sample_signal(1.0, 8.0, 4.0).unwrap();
/// let y = reconstruct_at(&samples, 8.0, samples[10].t).unwrap();
/// assert!((y - samples[10].amplitude).abs() < 1e-12);
/// ```
pub fn reconstruct_at(samples: &[Sample], sampling_freq: f64, t: f64) -> NyquistResult<f64> {
    let sampling_freq = ensure_positive("sampling_freq", sampling_freq)?;
    Ok(SincReconstruction::new(samples, sampling_freq).amplitude_at(t))
}

/// Builds one curve per sample: `a_k · sinc(fs · (t − t_k))` on the
/// `[0, window)` grid spaced `step` apart.
///
/// Summing the returned curves point by point yields
/// [`reconstruct_signal`]'s output.
pub fn sinc_components(
    samples: &[Sample],
    sampling_freq: f64,
    window: f64,
    step: f64,
) -> NyquistResult<Vec<Curve>> {
    let sampling_freq = ensure_positive("sampling_freq", sampling_freq)?;
    let grid = TimeGrid::with_step(window, step)?;
    Ok(SincReconstruction::new(samples, sampling_freq)
        .components()
        .map(|component| component.curve(&grid))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_signal;

    #[test]
    fn test_components_sum_to_reconstruction() {
        for (f, fs) in [(1.0, 8.0), (3.3, 5.0), (9.7, 20.0), (0.2, 1.0)] {
            let samples = sample_signal(f, fs, 4.0).unwrap();
            let reconstruction = reconstruct_signal(&samples, f, fs, 4.0, 0.02).unwrap();
            let components = sinc_components(&samples, fs, 4.0, 0.02).unwrap();
            assert_eq!(components.len(), samples.len());

            let total = Curve::sum(&components).unwrap();
            let deviation = total.max_deviation(&reconstruction).unwrap();
            assert!(deviation < 1e-9, "f = {}, fs = {}: {}", f, fs, deviation);
        }
    }

    #[test]
    fn test_reconstruction_shares_curve_grid() {
        let samples = sample_signal(2.0, 6.0, 4.0).unwrap();
        let curve = reconstruct_signal(&samples, 2.0, 6.0, 4.0, 0.02).unwrap();
        let times: Vec<f64> = curve.iter().map(|p| p.t).collect();
        let grid: Vec<f64> = TimeGrid::with_step(4.0, 0.02).unwrap().times().collect();
        assert_eq!(times, grid);
    }

    #[test]
    fn test_reconstruct_at_matches_samples() {
        let samples = sample_signal(1.0, 8.0, 4.0).unwrap();
        for s in &samples {
            let y = reconstruct_at(&samples, 8.0, s.t).unwrap();
            assert!((y - s.amplitude).abs() < 1e-6);
        }
    }

    #[test]
    fn test_component_curves_centred_on_samples() {
        let samples = sample_signal(1.0, 5.0, 4.0).unwrap();
        let components = sinc_components(&samples, 5.0, 4.0, 0.02).unwrap();
        // sample 1 sits at t = 0.2, grid point 10
        let point = components[1].points()[10];
        assert!((point.t - 0.2).abs() < 1e-12);
        assert!((point.amplitude - samples[1].amplitude).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let samples = sample_signal(1.0, 8.0, 4.0).unwrap();
        assert!(reconstruct_signal(&samples, 0.0, 8.0, 4.0, 0.02).is_err());
        assert!(reconstruct_signal(&samples, 1.0, 0.0, 4.0, 0.02).is_err());
        assert!(sinc_components(&samples, -1.0, 4.0, 0.02).is_err());
        assert!(reconstruct_at(&samples, f64::NAN, 0.5).is_err());
    }
}
