//! # Influence Lines
//!
//! The four canonical influence-line diagrams for a simply supported
//! beam: reaction at each support, bending moment at midspan and shear
//! at midspan, each as a function of a single unit load's position.
//!
//! Ordinates are unit-load properties of the beam - they do not depend
//! on the actual load magnitudes. The two current load positions are
//! carried through untouched so a plotting front end can overlay them
//! as markers.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Number of samples per curve
pub const CURVE_SAMPLES: usize = 500;

/// Sampled influence-line curves plus overlay markers.
///
/// Each curve is a sequence of `(position, ordinate)` pairs over
/// `[0, span]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceDiagrams {
    /// Reaction at support A: `1 − x/L`
    pub reaction_a: Vec<(f64, f64)>,
    /// Reaction at support B: `x/L`
    pub reaction_b: Vec<(f64, f64)>,
    /// Bending moment at midspan: triangular, peak `L/4` at `L/2`
    pub midspan_moment: Vec<(f64, f64)>,
    /// Shear at midspan: `+0.5` strictly left of midspan, `−0.5` at
    /// and right of it
    pub midspan_shear: Vec<(f64, f64)>,

    /// Caller-supplied load positions for overlay markers (m)
    pub load_positions_m: (f64, f64),
}

/// Generate the four influence-line curves for a span, carrying the
/// two current load positions through for overlay.
///
/// Stateless and independent of the sweep; the positions annotate the
/// plot only and play no part in the ordinates. The engine does not
/// re-check that the positions honor the fixed load spacing - that is
/// the caller's precondition.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] for a non-positive span or
/// non-finite marker position.
pub fn influence_lines(span_m: f64, w1_pos_m: f64, w2_pos_m: f64) -> CalcResult<InfluenceDiagrams> {
    if !span_m.is_finite() || span_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "span_m",
            span_m.to_string(),
            "Span must be positive",
        ));
    }
    for (field, value) in [("w1_pos_m", w1_pos_m), ("w2_pos_m", w2_pos_m)] {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Value must be a finite number",
            ));
        }
    }

    let mid = span_m / 2.0;
    let xs = linspace(0.0, span_m, CURVE_SAMPLES);

    let reaction_a = xs.iter().map(|&x| (x, 1.0 - x / span_m)).collect();
    let reaction_b = xs.iter().map(|&x| (x, x / span_m)).collect();
    let midspan_moment = xs
        .iter()
        .map(|&x| {
            let ordinate = if x <= mid {
                x * (span_m - mid) / span_m
            } else {
                mid * (span_m - x) / span_m
            };
            (x, ordinate)
        })
        .collect();
    let midspan_shear = xs
        .iter()
        .map(|&x| (x, if x < mid { 0.5 } else { -0.5 }))
        .collect();

    Ok(InfluenceDiagrams {
        reaction_a,
        reaction_b,
        midspan_moment,
        midspan_shear,
        load_positions_m: (w1_pos_m, w2_pos_m),
    })
}

/// `n` linearly spaced samples in `[start, stop]`, endpoints included.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as f64 - 1.0);
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_reaction_a_endpoints() {
        let diagrams = influence_lines(10.0, 2.0, 4.0).unwrap();
        let first = diagrams.reaction_a.first().unwrap();
        let last = diagrams.reaction_a.last().unwrap();

        assert!(approx_eq(first.1, 1.0, EPSILON));
        assert!(approx_eq(last.1, 0.0, EPSILON));
    }

    #[test]
    fn test_reaction_b_is_complement_of_a() {
        let diagrams = influence_lines(8.0, 1.0, 3.0).unwrap();
        for (a, b) in diagrams.reaction_a.iter().zip(&diagrams.reaction_b) {
            assert!(approx_eq(a.0, b.0, EPSILON));
            assert!(approx_eq(a.1 + b.1, 1.0, EPSILON));
        }
    }

    #[test]
    fn test_midspan_moment_symmetric_with_quarter_span_peak() {
        let span = 12.0;
        let diagrams = influence_lines(span, 0.0, 2.0).unwrap();
        let curve = &diagrams.midspan_moment;

        let peak = curve
            .iter()
            .cloned()
            .fold((0.0, f64::NEG_INFINITY), |best, p| {
                if p.1 > best.1 {
                    p
                } else {
                    best
                }
            });
        // The continuous line peaks at exactly L/4 at midspan; sampled
        // at 500 points the nearest station sits within half a step.
        let sample_step = span / (CURVE_SAMPLES as f64 - 1.0);
        assert!(peak.1 <= span / 4.0 + EPSILON);
        assert!(approx_eq(peak.1, span / 4.0, sample_step / 2.0));
        assert!(approx_eq(peak.0, span / 2.0, sample_step));

        // Symmetry about midspan: ordinate at x matches span − x
        let n = curve.len();
        for i in 0..n {
            let mirror = &curve[n - 1 - i];
            assert!(approx_eq(curve[i].1, mirror.1, 1e-9));
        }
    }

    #[test]
    fn test_midspan_shear_step() {
        let span = 10.0;
        let diagrams = influence_lines(span, 0.0, 2.0).unwrap();
        let mid = span / 2.0;

        let mut crossings = 0;
        for pair in diagrams.midspan_shear.windows(2) {
            if pair[0].1 != pair[1].1 {
                crossings += 1;
            }
        }
        assert_eq!(crossings, 1);

        for (x, ordinate) in &diagrams.midspan_shear {
            if *x < mid {
                assert!(approx_eq(*ordinate, 0.5, EPSILON));
            } else {
                assert!(approx_eq(*ordinate, -0.5, EPSILON));
            }
        }
    }

    #[test]
    fn test_sample_resolution_and_range() {
        let diagrams = influence_lines(10.0, 2.0, 4.0).unwrap();
        for curve in [
            &diagrams.reaction_a,
            &diagrams.reaction_b,
            &diagrams.midspan_moment,
            &diagrams.midspan_shear,
        ] {
            assert_eq!(curve.len(), CURVE_SAMPLES);
            assert!(approx_eq(curve.first().unwrap().0, 0.0, EPSILON));
            assert!(approx_eq(curve.last().unwrap().0, 10.0, EPSILON));
        }
    }

    #[test]
    fn test_markers_passed_through() {
        let diagrams = influence_lines(10.0, 2.5, 4.5).unwrap();
        assert_eq!(diagrams.load_positions_m, (2.5, 4.5));
    }

    #[test]
    fn test_rejects_degenerate_span() {
        assert!(influence_lines(0.0, 1.0, 2.0).is_err());
        assert!(influence_lines(-3.0, 1.0, 2.0).is_err());
        assert!(influence_lines(f64::NAN, 1.0, 2.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_markers() {
        assert!(influence_lines(10.0, f64::NAN, 2.0).is_err());
        assert!(influence_lines(10.0, 1.0, f64::INFINITY).is_err());
    }
}
