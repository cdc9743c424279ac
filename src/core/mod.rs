//! Core signal types and traits.
//!
//! This module provides the fundamental abstractions used throughout the
//! library:
//! - `ContinuousSignal` trait for anything that can be evaluated at any instant
//! - `TimeGrid` for the uniform instants curves and samples are taken at
//! - `Point`, `Sample` and `Curve` value types

mod grid;
mod point;
mod signal;

pub use grid::{MAX_GRID_INSTANTS, TimeGrid};
pub use point::{Curve, Point, Sample};
pub use signal::ContinuousSignal;
