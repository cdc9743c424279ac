//! Looping animation clock for the time cursor.
//!
//! The clock is the only piece of state in the model. A host ticks it at a
//! fixed cadence (the original demo ticks every 20 ms by 0.02 s) and draws
//! the cursor at [`AnimationClock::time`]. Time wraps modulo the window
//! instead of clamping, so the cursor stays phase-consistent however long
//! it runs.

use crate::error::{NyquistError, NyquistResult, ensure_positive};

/// Advances `current` by `increment` and wraps it into `[0, window)`.
///
/// `current` and `increment` may be negative but must be finite; `window`
/// must be finite and greater than 0.
///
/// # Examples
///
/// ```
/// use nyquist::advance_clock;
///
/// let t = advance_clock(3.99, 0.02, 4.0).unwrap();
/// assert!((t - 0.01).abs() < 1e-9);
/// ```
pub fn advance_clock(current: f64, increment: f64, window: f64) -> NyquistResult<f64> {
    let window = ensure_positive("window", window)?;
    let current = ensure_finite("current", current)?;
    let increment = ensure_finite("increment", increment)?;
    Ok(wrap(current + increment, window))
}

fn ensure_finite(name: &'static str, value: f64) -> NyquistResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NyquistError::InvalidParameter { name, value })
    }
}

/// `value mod window`, always in `[0, window)`.
fn wrap(value: f64, window: f64) -> f64 {
    let wrapped = value.rem_euclid(window);
    // rem_euclid can round up to exactly `window` for tiny negative inputs
    if wrapped >= window { 0.0 } else { wrapped }
}

/// A looping clock driving the animation cursor.
///
/// # Examples
///
/// ```
/// use nyquist::AnimationClock;
///
/// let mut clock = AnimationClock::new(0.02, 4.0).unwrap();
/// for _ in 0..250 {
///     clock.tick();
/// }
/// // 250 ticks of 0.02 s is 5 s, one full loop plus 1 s
/// assert!((clock.time() - 1.0).abs() < 1e-9);
/// assert_eq!(clock.ticks(), 250);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    /// Current cursor time in `[0, window)`
    time: f64,
    /// Seconds added per tick
    increment: f64,
    /// Loop length in seconds
    window: f64,
    /// Ticks since creation or the last reset
    ticks: u64,
}

impl AnimationClock {
    /// Creates a clock at time 0.
    ///
    /// # Arguments
    ///
    /// * `increment` - Seconds to advance per tick (must be > 0)
    /// * `window` - Loop length in seconds (must be > 0)
    pub fn new(increment: f64, window: f64) -> NyquistResult<Self> {
        Ok(Self {
            time: 0.0,
            increment: ensure_positive("increment", increment)?,
            window: ensure_positive("window", window)?,
            ticks: 0,
        })
    }

    /// Advances the clock by one increment and returns the new time.
    pub fn tick(&mut self) -> f64 {
        self.time = wrap(self.time + self.increment, self.window);
        self.ticks = self.ticks.wrapping_add(1);
        self.time
    }

    /// Current cursor time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Ticks since creation or the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Seconds advanced per tick.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Loop length in seconds.
    pub fn window(&self) -> f64 {
        self.window
    }

    /// Changes the per-tick increment.
    pub fn set_increment(&mut self, increment: f64) -> NyquistResult<()> {
        self.increment = ensure_positive("increment", increment)?;
        Ok(())
    }

    /// Resets the clock to time 0.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.ticks = 0;
    }
}
