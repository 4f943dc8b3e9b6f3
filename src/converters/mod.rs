//! Per-topology sizing formulas.
//!
//! Each submodule is a set of free, pure functions, one per steady-state
//! equation, grouped by converter topology:
//!
//! - [`boost`] - non-isolated step-up converter
//! - [`buck`] - non-isolated step-down converter
//!
//! Nothing here holds state. Callers supply physically consistent inputs
//! (e.g. duty cycle in `[0, 1)`, a time period that matches the switching
//! frequency) and each function evaluates its closed-form expression as
//! written. Degenerate inputs are not rejected; a zero denominator produces
//! the usual IEEE-754 infinity or NaN.

pub mod boost;
pub mod buck;
