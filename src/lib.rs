//! # Smps Core
//!
//! Closed-form sizing calculations for switch-mode power converters.
//!
//! This library provides:
//! - Steady-state CCM formulas for Boost and Buck topologies
//! - A sizing-report layer that evaluates a whole topology at once
//! - Engineering-notation parsing/formatting for the CLI frontend
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`converters`] - per-topology formula sets (free pure functions)
//! - [`design`] - operating-point structs and full sizing reports
//! - [`units`] - SI-suffix value parsing and formatting
//! - [`error`] - error type for the text interfaces
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use smps_core::converters::boost;
//!
//! let d = boost::duty_cycle(20.0, 10.0);
//! assert_eq!(d, 0.5);
//!
//! let (i_min, i_max) = boost::ripple_current(10.0, d, 1e-5, 1e-4, 2.0);
//! assert!(i_min < i_max);
//! ```
//!
//! ### CLI
//!
//! ```bash
//! smps boost --v-in 10 --v-out 20 --i-load 2 --frequency 100k \
//!            --inductance 100u --capacitance 10u
//! ```
//!
//! ## Design Notes
//!
//! Every formula is a direct transcription of the corresponding textbook
//! equation: no iteration, no state, no input validation. Degenerate inputs
//! (zero denominators, negative component values) propagate through IEEE-754
//! arithmetic unchecked, so the functions stay auditable against the
//! equations they implement. Range checking, where wanted, belongs to the
//! caller.

pub mod converters;
pub mod design;
pub mod error;
pub mod units;

// Re-export main types for convenience
pub use design::{BoostDesign, BoostReport, BuckDesign, BuckReport};
pub use error::{Result, SmpsError};
