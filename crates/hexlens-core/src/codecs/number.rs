//! Display rendering for floating-point interpretations.
//!
//! Values use the shortest digit string that round-trips. Magnitudes in
//! `[1e-6, 1e21)` are written positionally, everything else in exponent form
//! with an explicit exponent sign (`1e+21`, `5e-7`). Both zeros render as `0`;
//! non-finite values render as `NaN`, `Infinity` and `-Infinity`.

const POSITIONAL_MIN: f64 = 1e-6;
const POSITIONAL_MAX: f64 = 1e21;

/// Render `value` as a display string.
///
/// # Examples
/// ```
/// use hexlens_core::format_number;
///
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (POSITIONAL_MIN..POSITIONAL_MAX).contains(&magnitude) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn zeros_have_no_sign() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn positional_range() {
        assert_eq!(format_number(1.875), "1.875");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(65504.0), "65504");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn exponent_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(5e-7), "5e-7");
        assert_eq!(format_number(-1.5e300), "-1.5e+300");
        assert_eq!(format_number(2f64.powi(-24)), "5.960464477539063e-8");
    }

    #[test]
    fn widened_single_precision_keeps_all_digits() {
        assert_eq!(format_number(f64::from(0.1f32)), "0.10000000149011612");
    }
}
