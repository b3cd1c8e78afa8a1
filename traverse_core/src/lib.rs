//! # traverse_core - Moving-Load Beam Analysis Engine
//!
//! `traverse_core` computes support-reaction, shear-force and
//! bending-moment envelopes for a simply supported beam under a pair of
//! moving point loads at fixed spacing, plus the four classical
//! influence-line diagrams. All inputs and outputs are
//! JSON-serializable, so the engine drops cleanly behind any front end
//! (CLI, GUI, service) that collects the six scalars and renders the
//! curves.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results;
//!   every call recomputes from scratch
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **kN/m throughout**: loads in kilonewtons, lengths in metres,
//!   moments in kN·m — no unit conversion anywhere
//!
//! ## Quick Start
//!
//! ```rust
//! use traverse_core::analysis::{analyze, BeamConfig};
//!
//! // 10 m span, 5 kN and 3 kN loads 2 m apart
//! let config = BeamConfig::new(10.0, 5.0, 3.0, 2.0);
//! let result = analyze(&config).unwrap();
//!
//! println!("Max RA = {:.3} kN", result.max_reaction_a_kn);
//! println!("Max BM = {:.3} kN·m at {:.1} m",
//!     result.max_moment_knm, result.max_moment_position_m);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - the numeric engine (grid, loads, sweep, influence)
//! - [`errors`] - structured error types
//! - [`report`] - plain-text result report for terminal/output panes

pub mod analysis;
pub mod errors;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, influence_lines, BeamConfig, InfluenceDiagrams, SweepResult};
pub use errors::{CalcError, CalcResult};
