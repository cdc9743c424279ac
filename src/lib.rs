//! Nyquist - a model of the Nyquist–Shannon sampling theorem
//!
//! This library generates a continuous sine, samples it at a chosen rate,
//! reconstructs it with sinc interpolation and decides whether the rate is
//! high enough to avoid aliasing. A host (see `demos/`) draws the results
//! and ticks an [`AnimationClock`] to sweep a time cursor across them.

pub mod aliasing;
pub mod clock;
#[cfg(feature = "config")]
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod params;
pub mod plot;
pub mod reconstruction;
pub mod sampling;

// Re-export commonly used types at the crate root
pub use aliasing::{AliasingVerdict, aliasing_verdict};
pub use clock::{AnimationClock, advance_clock};
#[cfg(feature = "config")]
pub use config::{DemoConfig, TickConfig};
pub use crate::core::{ContinuousSignal, Curve, MAX_GRID_INSTANTS, Point, Sample, TimeGrid};
pub use error::{NyquistError, NyquistResult};
pub use model::{Frame, SignalModel};
pub use params::{ParamRange, Parameters};
pub use plot::Viewport;
pub use reconstruction::{
    SincComponent, SincReconstruction, reconstruct_at, reconstruct_signal, sinc, sinc_components,
};
pub use sampling::{SineWave, continuous_signal, sample_signal};
