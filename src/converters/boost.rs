//! Boost (step-up) converter formulas.
//!
//! All equations assume continuous conduction mode (CCM): the inductor
//! current never reaches zero within a switching period. Voltages are in
//! volts, currents in amperes, times in seconds, inductance in henries and
//! capacitance in farads.
//!
//! Inputs are trusted. Out-of-range values (zero denominator, negative
//! inductance) flow through the arithmetic unchecked and produce whatever
//! IEEE-754 produces.

/// Average current through the inductor.
///
/// In a boost converter the inductor carries the full input current, so the
/// average inductor current is the load current scaled by the voltage ratio:
///
/// ```text
/// I_L(avg) = I_load * V_out / V_in
/// ```
pub fn avg_inductor_current(v_out: f64, v_in: f64, i_load: f64) -> f64 {
    i_load * v_out / v_in
}

/// Peak-to-peak change in inductor current over one switching period.
///
/// During the on-time (`duty_cycle * time_period`) the full input voltage is
/// across the inductor, so the current ramps by:
///
/// ```text
/// dI = V_in * D * T / L
/// ```
pub fn delta_load_current(v_in: f64, duty_cycle: f64, time_period: f64, inductance: f64) -> f64 {
    v_in * duty_cycle * time_period / inductance
}

/// Duty cycle required to step `v_in` up to `v_out`.
///
/// From the CCM voltage transfer ratio `V_out = V_in / (1 - D)`:
///
/// ```text
/// D = (V_out - V_in) / V_out
/// ```
///
/// For positive `v_in <= v_out` the result lies in `[0, 1)`. `v_out == 0`
/// divides by zero and yields the IEEE-754 result.
pub fn duty_cycle(v_out: f64, v_in: f64) -> f64 {
    (v_out - v_in) / v_out
}

/// Minimum inductance that keeps the converter in continuous conduction.
///
/// At the CCM boundary the ripple trough just touches zero, which gives:
///
/// ```text
/// L_min = V_in * D * T / (2 * I_load)
/// ```
pub fn min_inductance(v_in: f64, duty_cycle: f64, time_period: f64, i_load: f64) -> f64 {
    v_in * duty_cycle * time_period / (2.0 * i_load)
}

/// Inductor current ripple band, returned as `(i_min, i_max)`.
///
/// Half the peak-to-peak ripple is added to and subtracted from the load
/// current:
///
/// ```text
/// I_min,max = I_load -/+ V_in * D * T / (2 * L)
/// ```
///
/// The minimum is always the first element of the pair; callers unpack
/// positionally.
pub fn ripple_current(
    v_in: f64,
    duty_cycle: f64,
    time_period: f64,
    inductance: f64,
    i_load: f64,
) -> (f64, f64) {
    let half_delta = v_in * duty_cycle * time_period / (2.0 * inductance);
    (i_load - half_delta, i_load + half_delta)
}

/// Peak-to-peak output voltage ripple across the output capacitor.
///
/// ```text
/// V_ripple = I_load * D / (f * C)
/// ```
pub fn ripple_voltage(i_load: f64, duty_cycle: f64, frequency: f64, capacitance: f64) -> f64 {
    i_load * duty_cycle / frequency / capacitance
}
