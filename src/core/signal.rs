//! Continuous-time signal trait.
//!
//! A [`ContinuousSignal`] can be evaluated at any instant. Curves and sample
//! sets are both just evaluations of a signal over a [`TimeGrid`]: a dense
//! grid gives a drawable curve, a grid at the sampling period gives samples.

use super::{Curve, Point, Sample, TimeGrid};

/// Common interface for anything that has a value at every instant.
///
/// Implemented by the source sine, by the sinc reconstruction and by each
/// individual sinc contribution, so all three can be rendered the same way.
pub trait ContinuousSignal {
    /// Evaluates the signal at time `t` (seconds).
    fn amplitude_at(&self, t: f64) -> f64;

    /// Evaluates the signal at every instant of `grid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nyquist::{ContinuousSignal, SineWave, TimeGrid};
    ///
    /// let sine = SineWave::new(1.0).unwrap();
    /// let grid = TimeGrid::with_step(1.0, 0.25).unwrap();
    /// let curve = sine.curve(&grid);
    /// assert_eq!(curve.len(), 4);
    /// assert!((curve.points()[1].amplitude - 1.0).abs() < 1e-12);
    /// ```
    fn curve(&self, grid: &TimeGrid) -> Curve {
        grid.times()
            .map(|t| Point::new(t, self.amplitude_at(t)))
            .collect()
    }

    /// Takes one sample per instant of `grid`, tagged with its index.
    fn sample(&self, grid: &TimeGrid) -> Vec<Sample> {
        grid.times()
            .enumerate()
            .map(|(index, t)| Sample::new(index, t, self.amplitude_at(t)))
            .collect()
    }
}

impl<S: ContinuousSignal + ?Sized> ContinuousSignal for &S {
    fn amplitude_at(&self, t: f64) -> f64 {
        (**self).amplitude_at(t)
    }
}
