//! Nyquist-rate comparison.

use crate::error::{NyquistResult, ensure_positive};
use std::fmt;

/// Outcome of comparing a signal frequency against a sampling rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AliasingVerdict {
    /// Signal frequency in Hz
    pub signal_freq: f64,
    /// Sampling frequency in Hz
    pub sampling_freq: f64,
    /// Half the sampling frequency
    pub nyquist: f64,
    /// Samples taken per signal cycle (`sampling_freq / signal_freq`)
    pub samples_per_cycle: f64,
    /// True when the signal frequency is strictly above the Nyquist frequency
    pub is_aliasing: bool,
}

impl AliasingVerdict {
    /// The sampling rate the signal must exceed to avoid aliasing (`2 f`).
    pub fn minimum_sampling_rate(&self) -> f64 {
        2.0 * self.signal_freq
    }

    /// The frequency the sampled signal appears to have.
    ///
    /// Equal to `signal_freq` when there is no aliasing; otherwise the
    /// signal folded back into `[0, nyquist]`, e.g. 7 Hz sampled at 8 Hz
    /// looks like 1 Hz.
    pub fn alias_frequency(&self) -> f64 {
        if !self.is_aliasing {
            return self.signal_freq;
        }
        let folds = (self.signal_freq / self.sampling_freq).round();
        (self.signal_freq - folds * self.sampling_freq).abs()
    }
}

impl fmt::Display for AliasingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_aliasing {
            write!(
                f,
                "Aliasing occurring - signal cannot be reconstructed accurately \
                 (sampling rate should be > {:.1} Hz)",
                self.minimum_sampling_rate()
            )
        } else {
            write!(f, "Signal can be accurately reconstructed")
        }
    }
}

/// Decides whether sampling `signal_freq` at `sampling_freq` aliases.
///
/// Sampling at exactly twice the signal frequency is not aliasing.
///
/// # Examples
///
/// ```
/// use nyquist::aliasing_verdict;
///
/// let verdict = aliasing_verdict(1.0, 8.0).unwrap();
/// assert_eq!(verdict.nyquist, 4.0);
/// assert_eq!(verdict.samples_per_cycle, 8.0);
/// assert!(!verdict.is_aliasing);
///
/// assert!(aliasing_verdict(5.0, 8.0).unwrap().is_aliasing);
/// ```
pub fn aliasing_verdict(signal_freq: f64, sampling_freq: f64) -> NyquistResult<AliasingVerdict> {
    let signal_freq = ensure_positive("signal_freq", signal_freq)?;
    let sampling_freq = ensure_positive("sampling_freq", sampling_freq)?;
    let nyquist = sampling_freq / 2.0;
    Ok(AliasingVerdict {
        signal_freq,
        sampling_freq,
        nyquist,
        samples_per_cycle: sampling_freq / signal_freq,
        is_aliasing: signal_freq > nyquist,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_nyquist_rate_is_not_aliasing() {
        for f in [0.2, 1.0, 3.7, 10.0] {
            let verdict = aliasing_verdict(f, 2.0 * f).unwrap();
            assert!(!verdict.is_aliasing, "f = {}", f);
            assert_eq!(verdict.samples_per_cycle, 2.0);
        }
    }

    #[test]
    fn test_below_nyquist_rate_aliases() {
        for f in [0.2, 1.0, 3.7, 10.0] {
            assert!(aliasing_verdict(f, 1.9 * f).unwrap().is_aliasing, "f = {}", f);
        }
    }

    #[test]
    fn test_minimum_sampling_rate() {
        let verdict = aliasing_verdict(3.5, 5.0).unwrap();
        assert_eq!(verdict.minimum_sampling_rate(), 7.0);
    }

    #[test]
    fn test_alias_frequency_folds() {
        let folded = aliasing_verdict(7.0, 8.0).unwrap().alias_frequency();
        assert!((folded - 1.0).abs() < 1e-12);

        let folded = aliasing_verdict(3.0, 4.0).unwrap().alias_frequency();
        assert!((folded - 1.0).abs() < 1e-12);

        // one sample per cycle sees a constant
        assert_eq!(aliasing_verdict(1.0, 1.0).unwrap().alias_frequency(), 0.0);

        // no aliasing, frequency unchanged
        assert_eq!(aliasing_verdict(2.0, 8.0).unwrap().alias_frequency(), 2.0);
    }

    #[test]
    fn test_status_text() {
        let ok = aliasing_verdict(1.0, 8.0).unwrap();
        assert_eq!(ok.to_string(), "Signal can be accurately reconstructed");

        let bad = aliasing_verdict(6.0, 8.0).unwrap();
        assert!(bad.to_string().contains("should be > 12.0 Hz"));
    }

    #[test]
    fn test_rejects_non_positive_frequencies() {
        assert!(aliasing_verdict(0.0, 8.0).is_err());
        assert!(aliasing_verdict(1.0, 0.0).is_err());
    }
}
