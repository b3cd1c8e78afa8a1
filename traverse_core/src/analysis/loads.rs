//! # Point Loads
//!
//! A concentrated load on a simply supported span, with its individual
//! contributions to the support reactions and to shear/moment at an
//! observation section. The sweep combines two of these by
//! superposition.
//!
//! ## Sign Convention
//! - Reactions positive upward
//! - Shear at a section: a load strictly left of the section
//!   contributes `+W·(1 − x/L)`, strictly right contributes
//!   `−W·(x/L)`, and a load sitting exactly on the section contributes
//!   half its left-side value (centered convention at the
//!   concentrated-load discontinuity)
//! - Moment positive sagging (tension on the bottom fiber)

use serde::{Deserialize, Serialize};

/// A point load (kN) at a position measured from support A (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude (kN), positive downward
    pub magnitude_kn: f64,
    /// Position from support A (m), within `[0, span]`
    pub position_m: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(magnitude_kn: f64, position_m: f64) -> Self {
        PointLoad {
            magnitude_kn,
            position_m,
        }
    }

    /// Reaction at support A from this load alone: `W·(1 − x/L)`.
    ///
    /// Caller must guarantee `span_m > 0` and `position_m` within the
    /// span; the lever-arm ratio is meaningless otherwise.
    pub fn reaction_a(&self, span_m: f64) -> f64 {
        self.magnitude_kn * (1.0 - self.position_m / span_m)
    }

    /// Reaction at support B from this load alone: `W·(x/L)`.
    pub fn reaction_b(&self, span_m: f64) -> f64 {
        self.magnitude_kn * (self.position_m / span_m)
    }

    /// Shear contribution at observation point `z_m` (kN).
    pub fn shear_at(&self, z_m: f64, span_m: f64) -> f64 {
        if self.position_m < z_m {
            self.reaction_a(span_m)
        } else if self.position_m == z_m {
            self.reaction_a(span_m) * 0.5
        } else {
            -self.reaction_b(span_m)
        }
    }

    /// Bending moment contribution at observation point `z_m` (kN·m).
    ///
    /// `W·x·(L − z)/L` when the load is at or left of the section,
    /// `W·z·(L − x)/L` when it is right of it.
    pub fn moment_at(&self, z_m: f64, span_m: f64) -> f64 {
        let w = self.magnitude_kn;
        let x = self.position_m;
        if x <= z_m {
            w * x * (span_m - z_m) / span_m
        } else {
            w * z_m * (span_m - x) / span_m
        }
    }
}

/// Combined support reactions `(RA, RB)` for a set of point loads.
///
/// Guarantees `RA + RB = ΣW` up to floating-point rounding for any
/// positions within the span.
pub fn support_reactions(span_m: f64, loads: &[PointLoad]) -> (f64, f64) {
    let ra = loads.iter().map(|load| load.reaction_a(span_m)).sum();
    let rb = loads.iter().map(|load| load.reaction_b(span_m)).sum();
    (ra, rb)
}
