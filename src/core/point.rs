//! Points, samples and curves.

/// A single `(t, amplitude)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Time in seconds
    pub t: f64,
    /// Unit-normalized amplitude
    pub amplitude: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(t: f64, amplitude: f64) -> Self {
        Self { t, amplitude }
    }
}

/// A discrete sample: a point taken at the `index`-th sampling instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Position in the sample sequence (0-based)
    pub index: usize,
    /// Sampling instant in seconds
    pub t: f64,
    /// Signal value at the sampling instant
    pub amplitude: f64,
}

impl Sample {
    /// Creates a sample.
    pub fn new(index: usize, t: f64, amplitude: f64) -> Self {
        Self {
            index,
            t,
            amplitude,
        }
    }

    /// Returns the sample as a plain point.
    pub fn point(&self) -> Point {
        Point::new(self.t, self.amplitude)
    }
}

/// A time-ascending sequence of points.
///
/// Curves are always regenerated as a whole; there is no API for mutating
/// one in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    /// Number of points in the curve.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, ascending in time.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates the points in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The point with the largest amplitude (first one on ties).
    pub fn peak(&self) -> Option<Point> {
        self.points.iter().copied().fold(None, |best, p| match best {
            Some(b) if b.amplitude >= p.amplitude => Some(b),
            _ => Some(p),
        })
    }

    /// Largest absolute amplitude, or 0 for an empty curve.
    pub fn max_abs(&self) -> f64 {
        self.points
            .iter()
            .fold(0.0, |acc: f64, p| acc.max(p.amplitude.abs()))
    }

    /// Number of sign changes between consecutive points.
    ///
    /// Exact zeros count as positive, so a curve touching zero without
    /// crossing it is not counted twice.
    pub fn zero_crossings(&self) -> usize {
        self.points
            .windows(2)
            .filter(|w| (w[0].amplitude < 0.0) != (w[1].amplitude < 0.0))
            .count()
    }

    /// Returns the sub-curve with `from <= t <= to`.
    pub fn between(&self, from: f64, to: f64) -> Curve {
        self.points
            .iter()
            .copied()
            .filter(|p| p.t >= from && p.t <= to)
            .collect()
    }

    /// Largest pointwise amplitude difference against a curve on the same grid.
    ///
    /// Returns `None` if the two curves have different lengths.
    pub fn max_deviation(&self, other: &Curve) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.points
                .iter()
                .zip(other.points.iter())
                .fold(0.0, |acc: f64, (a, b)| {
                    acc.max((a.amplitude - b.amplitude).abs())
                }),
        )
    }

    /// Sums curves sharing one time grid point by point.
    ///
    /// Returns `None` if the curves have different lengths. Summing zero
    /// curves yields an empty curve.
    pub fn sum<'a>(curves: impl IntoIterator<Item = &'a Curve>) -> Option<Curve> {
        let mut iter = curves.into_iter();
        let Some(first) = iter.next() else {
            return Some(Curve::default());
        };
        let mut points = first.points.clone();
        for curve in iter {
            if curve.len() != points.len() {
                return None;
            }
            for (acc, p) in points.iter_mut().zip(curve.points.iter()) {
                acc.amplitude += p.amplitude;
            }
        }
        Some(Curve { points })
    }
}

impl FromIterator<Point> for Curve {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Point>> for Curve {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
