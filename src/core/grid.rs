//! Uniform time grids over a finite window.

use crate::error::{NyquistError, NyquistResult, ensure_positive};

/// Slack applied when counting grid instants so that `window / step` values
/// landing a hair above an integer (e.g. `4.0 / 0.02`) do not gain an extra
/// instant at the window edge.
const COUNT_TOLERANCE: f64 = 1e-9;

/// Largest number of instants a grid may hold. Grids are materialized as
/// curves and sample lists, so a huge rate or a tiny step fails with
/// [`NyquistError::GridTooLarge`] instead of exhausting memory.
pub const MAX_GRID_INSTANTS: usize = 1_000_000;

/// A uniform grid of instants `t_i = i * step` covering `[0, window)`.
///
/// The number of instants is fixed once at construction as
/// `ceil(window / step)` (with a small tolerance), and every instant is
/// computed by multiplication rather than by a running sum, so the last
/// instant never drifts across the window boundary.
///
/// # Examples
///
/// ```
/// use nyquist::TimeGrid;
///
/// let grid = TimeGrid::with_step(4.0, 0.02).unwrap();
/// assert_eq!(grid.len(), 200);
///
/// let samples = TimeGrid::with_rate(4.0, 8.0).unwrap();
/// assert_eq!(samples.len(), 32);
/// assert_eq!(samples.time(31), 3.875);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    window: f64,
    step: f64,
    len: usize,
}

impl TimeGrid {
    /// Creates a grid spaced `step` seconds apart over `[0, window)`.
    pub fn with_step(window: f64, step: f64) -> NyquistResult<Self> {
        let window = ensure_positive("window", window)?;
        let step = ensure_positive("step", step)?;
        let len = instant_count(window / step)?;
        Ok(Self { window, step, len })
    }

    /// Creates a grid ticking `rate` times per second over `[0, window)`.
    ///
    /// The count is derived from `window * rate` directly, which is exact
    /// for the rates a host offers (multiples of 0.5 Hz).
    pub fn with_rate(window: f64, rate: f64) -> NyquistResult<Self> {
        let window = ensure_positive("window", window)?;
        let rate = ensure_positive("rate", rate)?;
        let len = instant_count(window * rate)?;
        Ok(Self {
            window,
            step: 1.0 / rate,
            len,
        })
    }

    /// Number of instants in the grid.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the grid has no instants.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Window length in seconds.
    pub fn window(&self) -> f64 {
        self.window
    }

    /// Spacing between instants in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The `index`-th instant.
    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.step
    }

    /// Iterates all instants in ascending order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.time(i))
    }
}

fn instant_count(ratio: f64) -> NyquistResult<usize> {
    let count = (ratio - COUNT_TOLERANCE).ceil().max(1.0);
    if count > MAX_GRID_INSTANTS as f64 {
        return Err(NyquistError::GridTooLarge {
            instants: count,
            max: MAX_GRID_INSTANTS,
        });
    }
    Ok(count as usize)
}
