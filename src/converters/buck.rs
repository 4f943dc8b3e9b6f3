//! Buck (step-down) converter formulas.
//!
//! Same conventions as the boost module: continuous conduction mode, SI
//! units, no input validation.

/// Minimum inductance that keeps the converter in continuous conduction.
///
/// The duty cycle follows from the CCM transfer ratio `V_out = D * V_in`,
/// then the inductance at the CCM boundary is:
///
/// ```text
/// L_min = (V_in - V_out) * D * T / (2 * I_load)
/// ```
pub fn min_inductance(v_out: f64, v_in: f64, time_period: f64, i_load: f64) -> f64 {
    let duty_cycle = v_out / v_in;
    (v_in - v_out) * duty_cycle * time_period / (2.0 * i_load)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_min_inductance() {
        // D = 5/10 = 0.5, L_min = 5 * 0.5 * 1e-5 / 4 = 6.25e-6
        let l_min = min_inductance(5.0, 10.0, 1e-5, 2.0);
        assert_relative_eq!(l_min, 6.25e-6, max_relative = 1e-12);
    }

    #[test]
    fn test_purity_bit_identical() {
        let a = min_inductance(3.3, 12.0, 2e-6, 0.8);
        let b = min_inductance(3.3, 12.0, 2e-6, 0.8);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_zero_input_voltage_divides_by_zero() {
        // D = v_out / 0 is infinite; the formula must not guard it.
        assert!(min_inductance(5.0, 0.0, 1e-5, 2.0).is_infinite());
    }
}
