//! Mapping curves into a drawing surface's coordinate space.
//!
//! The model works in seconds and unit amplitude. A surface works in its own
//! units (SVG user units, terminal cells, ...). [`Viewport`] is the affine
//! map between the two; drawing itself stays with the host.

use crate::core::{Curve, Point};
use std::fmt::Write;

/// Affine map from `(t, amplitude)` to surface `(x, y)`:
/// `x = t · x_scale`, `y = amplitude · y_scale + y_offset`.
///
/// The default matches a 400 × 200 SVG plot of a 4 s window with the zero
/// line at `y = 100` and a peak excursion of 80 units. Use a negative
/// `y_scale` for surfaces whose y axis points down and should show positive
/// amplitudes upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface units per second
    pub x_scale: f64,
    /// Surface units per unit amplitude
    pub y_scale: f64,
    /// Surface y of the zero line
    pub y_offset: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_scale: 100.0,
            y_scale: 80.0,
            y_offset: 100.0,
        }
    }
}

impl Viewport {
    /// Fits `window` seconds and amplitudes in `[-1, 1]` into a
    /// `width` × `height` surface with y pointing down, keeping `margin`
    /// units free above and below the peaks.
    pub fn fit(window: f64, width: f64, height: f64, margin: f64) -> Self {
        let half = height / 2.0;
        Self {
            x_scale: width / window,
            y_scale: -(half - margin).max(0.0),
            y_offset: half,
        }
    }

    /// Maps a point to surface coordinates.
    pub fn to_screen(&self, point: Point) -> (f64, f64) {
        (
            point.t * self.x_scale,
            point.amplitude * self.y_scale + self.y_offset,
        )
    }

    /// Surface x of the time cursor.
    pub fn cursor_x(&self, time: f64) -> f64 {
        time * self.x_scale
    }

    /// SVG path data (`M x,y L x,y ...`) for `curve`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nyquist::{Curve, Point, Viewport};
    ///
    /// let curve: Curve = vec![Point::new(0.0, 0.0), Point::new(0.5, 1.0)].into();
    /// assert_eq!(Viewport::default().svg_path(&curve), "M 0,100 L 50,180");
    /// ```
    pub fn svg_path(&self, curve: &Curve) -> String {
        let mut path = String::with_capacity(curve.len() * 16);
        for (i, point) in curve.iter().enumerate() {
            let (x, y) = self.to_screen(*point);
            if i > 0 {
                path.push(' ');
            }
            let command = if i == 0 { 'M' } else { 'L' };
            // Writing to a String cannot fail
            let _ = write!(path, "{} {},{}", command, x, y);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_matches_svg_plot() {
        let vp = Viewport::default();
        assert_eq!(vp.to_screen(Point::new(0.0, 0.0)), (0.0, 100.0));
        assert_eq!(vp.to_screen(Point::new(2.0, -1.0)), (200.0, 20.0));
        assert_eq!(vp.cursor_x(3.5), 350.0);
    }

    #[test]
    fn test_fit_flips_y_axis() {
        let vp = Viewport::fit(4.0, 80.0, 20.0, 1.0);
        assert_eq!(vp.x_scale, 20.0);
        // positive amplitude goes up, towards row 1
        assert_eq!(vp.to_screen(Point::new(0.0, 1.0)).1, 1.0);
        assert_eq!(vp.to_screen(Point::new(0.0, -1.0)).1, 19.0);
    }

    #[test]
    fn test_svg_path_empty_curve() {
        assert_eq!(Viewport::default().svg_path(&Curve::default()), "");
    }

    #[test]
    fn test_svg_path_commands() {
        let curve: Curve = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.5),
            Point::new(2.0, -0.5),
        ]
        .into();
        let path = Viewport::default().svg_path(&curve);
        assert_eq!(path, "M 0,100 L 100,140 L 200,60");
    }
}
