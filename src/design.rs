//! Whole-converter sizing passes.
//!
//! A design struct bundles the operating point a caller would otherwise feed
//! to the formula functions one at a time, and its report evaluates every
//! formula for that topology in one go. The report layer derives the
//! switching period as `1 / frequency`, so period and frequency are always
//! consistent within a report.
//!
//! Like the formula layer, nothing here validates physical ranges.

use std::fmt;

use crate::converters::{boost, buck};
use crate::units::format_value;

/// Operating point and component values for a boost sizing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostDesign {
    /// Input voltage (V)
    pub v_in: f64,
    /// Output voltage (V)
    pub v_out: f64,
    /// Load current (A)
    pub i_load: f64,
    /// Switching frequency (Hz)
    pub switching_frequency: f64,
    /// Chosen inductance (H)
    pub inductance: f64,
    /// Output capacitance (F)
    pub capacitance: f64,
}

/// Every derived quantity for a boost design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostReport {
    pub duty_cycle: f64,
    pub avg_inductor_current: f64,
    pub delta_load_current: f64,
    pub min_inductance: f64,
    /// Inductor current band as `(min, max)`
    pub ripple_current: (f64, f64),
    pub ripple_voltage: f64,
}

impl BoostDesign {
    /// Evaluate every boost formula at this operating point.
    pub fn report(&self) -> BoostReport {
        let duty_cycle = boost::duty_cycle(self.v_out, self.v_in);
        let time_period = 1.0 / self.switching_frequency;

        BoostReport {
            duty_cycle,
            avg_inductor_current: boost::avg_inductor_current(self.v_out, self.v_in, self.i_load),
            delta_load_current: boost::delta_load_current(
                self.v_in,
                duty_cycle,
                time_period,
                self.inductance,
            ),
            min_inductance: boost::min_inductance(self.v_in, duty_cycle, time_period, self.i_load),
            ripple_current: boost::ripple_current(
                self.v_in,
                duty_cycle,
                time_period,
                self.inductance,
                self.i_load,
            ),
            ripple_voltage: boost::ripple_voltage(
                self.i_load,
                duty_cycle,
                self.switching_frequency,
                self.capacitance,
            ),
        }
    }
}

impl fmt::Display for BoostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i_min, i_max) = self.ripple_current;
        writeln!(f, "duty cycle             {:.4}", self.duty_cycle)?;
        writeln!(
            f,
            "avg inductor current   {}A",
            format_value(self.avg_inductor_current)
        )?;
        writeln!(
            f,
            "delta load current     {}A",
            format_value(self.delta_load_current)
        )?;
        writeln!(
            f,
            "min inductance (CCM)   {}H",
            format_value(self.min_inductance)
        )?;
        writeln!(
            f,
            "inductor current band  {}A .. {}A",
            format_value(i_min),
            format_value(i_max)
        )?;
        write!(
            f,
            "output voltage ripple  {}V",
            format_value(self.ripple_voltage)
        )
    }
}

/// Operating point for a buck sizing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuckDesign {
    /// Input voltage (V)
    pub v_in: f64,
    /// Output voltage (V)
    pub v_out: f64,
    /// Load current (A)
    pub i_load: f64,
    /// Switching frequency (Hz)
    pub switching_frequency: f64,
}

/// Derived quantities for a buck design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuckReport {
    pub duty_cycle: f64,
    pub min_inductance: f64,
}

impl BuckDesign {
    /// Evaluate the buck formulas at this operating point.
    pub fn report(&self) -> BuckReport {
        let time_period = 1.0 / self.switching_frequency;

        BuckReport {
            duty_cycle: self.v_out / self.v_in,
            min_inductance: buck::min_inductance(self.v_out, self.v_in, time_period, self.i_load),
        }
    }
}

impl fmt::Display for BuckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "duty cycle             {:.4}", self.duty_cycle)?;
        write!(
            f,
            "min inductance (CCM)   {}H",
            format_value(self.min_inductance)
        )
    }
}
