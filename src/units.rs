//! Engineering-notation parsing and formatting.
//!
//! Electrical values are conventionally written with an SI suffix
//! (`10k` ohms, `4.7u` farads, `100n` henries). This module converts between
//! that notation and plain `f64` for the CLI frontend; the formula layer
//! itself only ever sees `f64`.

/// Multiplier table for SI suffixes, largest first.
const SUFFIXES: [(f64, &str); 8] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "u"),
    (1e-9, "n"),
    (1e-12, "p"),
];

/// Parse a number string with an optional SI suffix.
///
/// Accepts plain and scientific notation (`2.2`, `1e-9`) as well as suffixed
/// values (`10k`, `100n`, `4.7u`, `1M`). Returns `None` if the string is not
/// a number.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (num_str, multiplier) = if let Some(last) = text.chars().last() {
        let mult = match last {
            'p' => 1e-12,
            'n' => 1e-9,
            'u' | 'µ' => 1e-6,
            'm' => 1e-3,
            'k' | 'K' => 1e3,
            'M' => 1e6,
            'G' => 1e9,
            _ => 1.0,
        };
        if mult != 1.0 {
            (&text[..text.len() - last.len_utf8()], mult)
        } else {
            (text, 1.0)
        }
    } else {
        (text, 1.0)
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

/// Format a value with the SI suffix that keeps the mantissa in `[1, 1000)`.
///
/// Values outside the suffix range (and subnormals near zero) fall back to
/// scientific notation. Zero and non-finite values print as-is.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let abs = value.abs();
    for (multiplier, suffix) in SUFFIXES {
        let scaled = abs / multiplier;
        if (1.0..1000.0).contains(&scaled) {
            return format!("{:.3}{}", value / multiplier, suffix);
        }
    }

    format!("{:e}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parsed(text: &str) -> f64 {
        parse_value(text).unwrap_or_else(|| panic!("'{}' should parse", text))
    }

    #[test]
    fn test_parse_suffixes() {
        assert_relative_eq!(parsed("10k"), 10_000.0);
        assert_relative_eq!(parsed("100n"), 100e-9);
        assert_relative_eq!(parsed("4.7u"), 4.7e-6);
        assert_relative_eq!(parsed("4.7µ"), 4.7e-6);
        assert_relative_eq!(parsed("1M"), 1_000_000.0);
        assert_relative_eq!(parsed("33p"), 33e-12);
    }

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_relative_eq!(parsed("2.2"), 2.2);
        assert_relative_eq!(parsed("1e-9"), 1e-9);
        assert_relative_eq!(parsed("-5"), -5.0);
        assert_relative_eq!(parsed(" 12 "), 12.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("k"), None);
        assert_eq!(parse_value("ten"), None);
        assert_eq!(parse_value("1.2.3"), None);
    }

    #[test]
    fn test_format_picks_suffix() {
        assert_eq!(format_value(10_000.0), "10.000k");
        assert_eq!(format_value(4.7e-6), "4.700u");
        assert_eq!(format_value(1.25e-5), "12.500u");
        assert_eq!(format_value(2.0), "2.000");
        assert_eq!(format_value(-0.5), "-500.000m");
    }

    #[test]
    fn test_format_edges() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(f64::INFINITY), "inf");
        // Below the picofarad range, scientific notation.
        assert_eq!(format_value(1e-15), "1e-15");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for v in [1.0, 2.2e-6, 330.0, 47e-9, 1.5e6] {
            let printed = format_value(v);
            assert_relative_eq!(parsed(&printed), v, max_relative = 1e-3);
        }
    }
}
