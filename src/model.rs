//! The signal model a host calls on every redraw.
//!
//! `SignalModel` fixes the window length and curve resolution and exposes
//! one call per thing a plot needs. Nothing is cached: each call recomputes
//! from its arguments, which for the sizes involved (at most a few hundred
//! curve points and under a hundred samples) is cheap enough to do every
//! animation frame.

use crate::aliasing::{AliasingVerdict, aliasing_verdict};
use crate::core::{Curve, Sample, TimeGrid};
use crate::error::NyquistResult;
use crate::params::Parameters;
use crate::reconstruction::{reconstruct_signal, sinc_components};
use crate::sampling::{continuous_signal, sample_signal};
use tracing::{debug, trace};

/// Default window length in seconds
pub const DEFAULT_WINDOW: f64 = 4.0;

/// Default spacing of curve points in seconds
pub const DEFAULT_CURVE_STEP: f64 = 0.02;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Parameters the frame was computed for
    pub params: Parameters,
    /// Cursor time in seconds
    pub time: f64,
    /// The source sine
    pub continuous: Curve,
    /// Discrete samples of the source
    pub samples: Vec<Sample>,
    /// Sinc reconstruction from the samples
    pub reconstruction: Curve,
    /// Per-sample sinc curves, present only when requested
    pub components: Option<Vec<Curve>>,
    /// Nyquist comparison
    pub verdict: AliasingVerdict,
}

/// Stateless evaluator over a fixed window and curve resolution.
///
/// # Examples
///
/// ```
/// use nyquist::{Parameters, SignalModel};
///
/// let model = SignalModel::default();
/// let frame = model.frame(&Parameters::default(), 0.0).unwrap();
/// assert_eq!(frame.continuous.len(), 200);
/// assert_eq!(frame.samples.len(), 32);
/// assert!(frame.components.is_none());
/// assert!(!frame.verdict.is_aliasing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalModel {
    window: f64,
    step: f64,
}

impl Default for SignalModel {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            step: DEFAULT_CURVE_STEP,
        }
    }
}

impl SignalModel {
    /// Creates a model over `[0, window)` with curve points `step` apart.
    pub fn new(window: f64, step: f64) -> NyquistResult<Self> {
        // Validates both values the same way every curve will
        TimeGrid::with_step(window, step)?;
        Ok(Self { window, step })
    }

    /// Window length in seconds.
    pub fn window(&self) -> f64 {
        self.window
    }

    /// Spacing of curve points in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The source sine over the window.
    pub fn continuous_curve(&self, signal_freq: f64) -> NyquistResult<Curve> {
        continuous_signal(signal_freq, self.window, self.step)
    }

    /// Samples of the source sine over the window.
    pub fn samples(&self, signal_freq: f64, sampling_freq: f64) -> NyquistResult<Vec<Sample>> {
        sample_signal(signal_freq, sampling_freq, self.window)
    }

    /// Sinc reconstruction from `samples`.
    pub fn reconstruction(
        &self,
        samples: &[Sample],
        signal_freq: f64,
        sampling_freq: f64,
    ) -> NyquistResult<Curve> {
        reconstruct_signal(samples, signal_freq, sampling_freq, self.window, self.step)
    }

    /// One sinc curve per sample.
    pub fn components(&self, samples: &[Sample], sampling_freq: f64) -> NyquistResult<Vec<Curve>> {
        sinc_components(samples, sampling_freq, self.window, self.step)
    }

    /// Nyquist comparison for the two frequencies.
    pub fn aliasing_verdict(
        &self,
        signal_freq: f64,
        sampling_freq: f64,
    ) -> NyquistResult<AliasingVerdict> {
        aliasing_verdict(signal_freq, sampling_freq)
    }

    /// Computes a full frame for `params` with the cursor at `time`.
    pub fn frame(&self, params: &Parameters, time: f64) -> NyquistResult<Frame> {
        params.validate()?;
        let Parameters {
            signal_freq,
            sampling_freq,
            show_components,
        } = *params;

        let continuous = self.continuous_curve(signal_freq)?;
        let samples = self.samples(signal_freq, sampling_freq)?;
        let reconstruction = self.reconstruction(&samples, signal_freq, sampling_freq)?;
        let components = if show_components {
            Some(self.components(&samples, sampling_freq)?)
        } else {
            None
        };
        let verdict = self.aliasing_verdict(signal_freq, sampling_freq)?;

        debug!(
            signal_freq,
            sampling_freq,
            aliasing = verdict.is_aliasing,
            "computed frame"
        );
        trace!(
            curve_points = continuous.len(),
            samples = samples.len(),
            components = components.as_ref().map_or(0, Vec::len),
            "frame sizes"
        );

        Ok(Frame {
            params: *params,
            time,
            continuous,
            samples,
            reconstruction,
            components,
            verdict,
        })
    }
}
