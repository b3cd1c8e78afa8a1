//! # Position Grid
//!
//! Discretization of the span into evenly spaced sample points. The
//! same grid serves two roles in the sweep: the candidate set for the
//! lead load's position and the set of observation points where shear
//! and moment are evaluated.
//!
//! Grid spacing is a precision/performance trade-off, not a physical
//! constant. Samples are rounded to 2 decimals so positions compare
//! cleanly against hand-calculation stations (0.1, 0.2, ...).

/// Ordered sample points `0, step, 2·step, ...` up to and including the
/// last multiple of `step` not exceeding the span.
///
/// Invariants: the first point is exactly 0.0 and points are strictly
/// increasing.
#[derive(Debug, Clone)]
pub struct PositionGrid {
    points: Vec<f64>,
}

impl PositionGrid {
    /// Build the grid for a span. `span_m` and `step_m` must both be
    /// positive (enforced upstream by `BeamConfig::validate`).
    pub fn new(span_m: f64, step_m: f64) -> Self {
        // The epsilon keeps exact multiples on the grid when the
        // division lands just below an integer (e.g. 0.3 / 0.1).
        let count = (span_m / step_m + 1e-9).floor() as usize + 1;
        let points = (0..count)
            .map(|i| round2(i as f64 * step_m))
            .collect();
        PositionGrid { points }
    }

    /// Sample points, left support to right.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A grid always contains at least the left support.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over sample points by value.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

/// Round to 2 decimal places (grid stations).
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_anchored_at_zero() {
        let grid = PositionGrid::new(10.0, 0.1);
        assert_eq!(grid.points()[0], 0.0);
    }

    #[test]
    fn test_grid_point_count() {
        // 10 m span at 0.1 m step: 0.0 through 10.0 inclusive
        let grid = PositionGrid::new(10.0, 0.1);
        assert_eq!(grid.len(), 101);
        assert_eq!(*grid.points().last().unwrap(), 10.0);
    }

    #[test]
    fn test_grid_monotonic() {
        let grid = PositionGrid::new(6.0, 0.1);
        for pair in grid.points().windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_grid_last_point_does_not_exceed_span() {
        // Span not a multiple of the step: last station stops short
        let grid = PositionGrid::new(1.05, 0.1);
        assert_eq!(*grid.points().last().unwrap(), 1.0);
        assert_eq!(grid.len(), 11);
    }

    #[test]
    fn test_grid_includes_exact_multiples() {
        // 0.3 / 0.1 rounds below 3.0 in binary; the station must
        // still be included.
        let grid = PositionGrid::new(0.3, 0.1);
        assert_eq!(grid.points(), &[0.0, 0.1, 0.2, 0.3]);
    }
}
