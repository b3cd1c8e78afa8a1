//! # Moving-Load Sweep
//!
//! Sweeps a two-load system across a simply supported span and tracks
//! the envelope extrema: maximum reaction at each support, the signed
//! extremum of shear, the maximum bending moment and their locations.
//!
//! The lead load is placed at every grid station `x1`; the trailing
//! load rides at `x2 = x1 + d`. Any placement where the trailing load
//! would fall past support B is skipped. When the spacing exceeds the
//! span no placement is ever feasible and the result record is the NaN
//! sentinel - an unanalyzable configuration, not an error.
//!
//! ## Example
//! ```rust
//! use traverse_core::analysis::{analyze, BeamConfig};
//!
//! let config = BeamConfig::new(10.0, 5.0, 3.0, 2.0);
//! let result = analyze(&config).unwrap();
//! assert!(result.max_reaction_a_kn <= 5.0 + 3.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::grid::PositionGrid;
use crate::analysis::loads::{support_reactions, PointLoad};
use crate::errors::{CalcError, CalcResult};

/// Default grid spacing (m)
pub const DEFAULT_STEP_M: f64 = 0.1;

/// Half-window around exact midspan for midspan-shear sampling (m)
const MIDSPAN_WINDOW_M: f64 = 0.05;

/// Input parameters for a moving-load sweep.
///
/// All values use the fixed kN/m convention.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 10.0,
///   "w1_kn": 5.0,
///   "w2_kn": 3.0,
///   "spacing_m": 2.0,
///   "step_m": 0.1
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Span between supports (m), must be positive
    pub span_m: f64,

    /// Lead load magnitude (kN), assumed non-negative in practice
    pub w1_kn: f64,

    /// Trailing load magnitude (kN), assumed non-negative in practice
    pub w2_kn: f64,

    /// Fixed spacing between the two loads (m), must be non-negative.
    /// A spacing greater than the span is not an input error; it
    /// yields the NaN sentinel result.
    pub spacing_m: f64,

    /// Grid spacing (m), must be positive
    #[serde(default = "default_step_m")]
    pub step_m: f64,
}

fn default_step_m() -> f64 {
    DEFAULT_STEP_M
}

impl BeamConfig {
    /// Create a config with the default 0.1 m grid spacing.
    pub fn new(span_m: f64, w1_kn: f64, w2_kn: f64, spacing_m: f64) -> Self {
        BeamConfig {
            span_m,
            w1_kn,
            w2_kn,
            spacing_m,
            step_m: DEFAULT_STEP_M,
        }
    }

    /// Override the grid spacing.
    pub fn with_step_m(mut self, step_m: f64) -> Self {
        self.step_m = step_m;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("span_m", self.span_m),
            ("w1_kn", self.w1_kn),
            ("w2_kn", self.w2_kn),
            ("spacing_m", self.spacing_m),
            ("step_m", self.step_m),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }
        if self.span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span must be positive",
            ));
        }
        if self.spacing_m < 0.0 {
            return Err(CalcError::invalid_input(
                "spacing_m",
                self.spacing_m.to_string(),
                "Load spacing must be non-negative",
            ));
        }
        if self.step_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "step_m",
                self.step_m.to_string(),
                "Grid spacing must be positive",
            ));
        }
        Ok(())
    }
}

/// Envelope results from the moving-load sweep.
///
/// Every scalar is rounded to 3 decimal places. All eight fields are
/// NaN when the load spacing exceeds the span; use
/// [`SweepResult::is_undefined`] to detect that before doing further
/// arithmetic with the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Maximum reaction at support A over the sweep (kN)
    pub max_reaction_a_kn: f64,
    /// Maximum reaction at support B over the sweep (kN)
    pub max_reaction_b_kn: f64,

    /// Bending moment under the trailing load with the lead load at
    /// support A (kN·m)
    pub moment_at_a_knm: f64,

    /// Mean of shear samples taken near exact midspan across the whole
    /// sweep (kN)
    pub midspan_shear_kn: f64,

    /// Signed shear extremum over the whole sweep (kN)
    pub max_shear_kn: f64,
    /// Observation point of the shear extremum (m from support A)
    pub max_shear_position_m: f64,

    /// Maximum bending moment over the whole sweep (kN·m)
    pub max_moment_knm: f64,
    /// Observation point of the moment maximum (m from support A)
    pub max_moment_position_m: f64,
}

impl SweepResult {
    /// The all-NaN sentinel returned when no load placement fits the
    /// span.
    pub fn undefined() -> Self {
        SweepResult {
            max_reaction_a_kn: f64::NAN,
            max_reaction_b_kn: f64::NAN,
            moment_at_a_knm: f64::NAN,
            midspan_shear_kn: f64::NAN,
            max_shear_kn: f64::NAN,
            max_shear_position_m: f64::NAN,
            max_moment_knm: f64::NAN,
            max_moment_position_m: f64::NAN,
        }
    }

    /// True when this record is the infeasible-spacing sentinel.
    pub fn is_undefined(&self) -> bool {
        self.max_reaction_a_kn.is_nan()
    }
}

/// Sweep the two-load system across the span and extract the envelope.
///
/// Pure and stateless: identical inputs always produce identical
/// output, and concurrent calls are safe without locking.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] for a non-positive span,
/// negative spacing, non-positive step or non-finite value. An
/// infeasible spacing (`d > L`) is NOT an error; it returns
/// [`SweepResult::undefined`].
pub fn analyze(config: &BeamConfig) -> CalcResult<SweepResult> {
    config.validate()?;

    if config.spacing_m > config.span_m {
        return Ok(SweepResult::undefined());
    }

    let span = config.span_m;
    let mid = span / 2.0;
    let grid = PositionGrid::new(span, config.step_m);

    let mut max_ra: f64 = 0.0;
    let mut max_rb: f64 = 0.0;
    let mut moment_at_a: f64 = 0.0;

    let mut midspan_shear_sum = 0.0;
    let mut midspan_shear_count: usize = 0;

    // Signed extremum tracked by |SF|; strict > keeps the first point
    // encountered in sweep order on ties.
    let mut best_abs_shear = f64::NEG_INFINITY;
    let mut max_shear = 0.0;
    let mut max_shear_pos = 0.0;

    let mut max_moment = f64::NEG_INFINITY;
    let mut max_moment_pos = 0.0;

    for x1 in grid.iter() {
        let x2 = x1 + config.spacing_m;
        if x2 > span {
            continue;
        }

        let loads = [
            PointLoad::new(config.w1_kn, x1),
            PointLoad::new(config.w2_kn, x2),
        ];

        let (ra, rb) = support_reactions(span, &loads);
        max_ra = max_ra.max(ra);
        max_rb = max_rb.max(rb);

        // Lead load at the left support contributes zero moment there;
        // the single-load formula under the trailing load applies.
        if x1 == 0.0 {
            moment_at_a = config.w2_kn * x2 * (span - x2) / span;
        }

        for z in grid.iter() {
            let sf: f64 = loads.iter().map(|load| load.shear_at(z, span)).sum();

            if sf.abs() > best_abs_shear {
                best_abs_shear = sf.abs();
                max_shear = sf;
                max_shear_pos = z;
            }

            if (z - mid).abs() < MIDSPAN_WINDOW_M {
                midspan_shear_sum += sf;
                midspan_shear_count += 1;
            }

            let m: f64 = loads.iter().map(|load| load.moment_at(z, span)).sum();
            if m > max_moment {
                max_moment = m;
                max_moment_pos = z;
            }
        }
    }

    let midspan_shear = if midspan_shear_count > 0 {
        midspan_shear_sum / midspan_shear_count as f64
    } else {
        0.0
    };

    Ok(SweepResult {
        max_reaction_a_kn: round3(max_ra),
        max_reaction_b_kn: round3(max_rb),
        moment_at_a_knm: round3(moment_at_a),
        midspan_shear_kn: round3(midspan_shear),
        max_shear_kn: round3(max_shear),
        max_shear_position_m: round3(max_shear_pos),
        max_moment_knm: round3(max_moment),
        max_moment_position_m: round3(max_moment_pos),
    })
}

/// Round to 3 decimal places for reporting; NaN passes through.
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
