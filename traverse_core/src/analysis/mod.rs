//! # Beam Analysis
//!
//! The numeric engine. Two cooperating routines:
//!
//! - [`sweep`] - discretizes the span, sweeps the two-load system
//!   across all feasible lead positions and tracks envelope extrema
//! - [`influence`] - the four canonical unit-load influence lines
//!   (reaction at each support, midspan moment, midspan shear)
//!
//! Both are pure: each call recomputes from its arguments, holds no
//! state between invocations and performs no I/O, so concurrent calls
//! need no locking.
//!
//! Supporting leaf modules:
//!
//! - [`grid`] - the shared position grid (candidate lead positions and
//!   observation points)
//! - [`loads`] - per-load reaction/shear/moment contributions combined
//!   by superposition

pub mod grid;
pub mod influence;
pub mod loads;
pub mod sweep;

// Re-export the public surface
pub use grid::PositionGrid;
pub use influence::{influence_lines, InfluenceDiagrams};
pub use loads::PointLoad;
pub use sweep::{analyze, BeamConfig, SweepResult};
