use std::num::NonZeroUsize;

/// Formats a real number the way every view displays it.
///
/// Magnitudes in `[1e-3, 1e7)` and zero print in plain decimal with at least
/// one fractional digit, so `3` reads as `3.0`. Everything else prints in
/// scientific form with an upper-case `E`, such as `1.0E-5` or `1.2345E7`.
/// Non-finite values print as `Infinity`, `-Infinity` and `NaN`.
///
/// ## Example
/// ```
/// use tokcalc::util::num::format_real;
///
/// assert_eq!(format_real(3.0), "3.0");
/// assert_eq!(format_real(-2.5), "-2.5");
/// assert_eq!(format_real(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_real(0.00001), "1.0E-5");
/// assert_eq!(format_real(12_345_000.0), "1.2345E7");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{value:?}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

/// Safely converts an `i64` to a non-zero `usize`.
///
/// ## Errors
/// Returns `Err(error)` if the value is zero, negative, or does not fit in a
/// `usize` on the current target.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not possible.
///
/// ## Example
/// ```
/// use tokcalc::util::num::i64_to_nonzero_usize_checked;
///
/// let size = i64_to_nonzero_usize_checked(3, "too small").unwrap();
/// assert_eq!(size.get(), 3);
///
/// assert!(i64_to_nonzero_usize_checked(0, "too small").is_err());
/// assert!(i64_to_nonzero_usize_checked(-4, "too small").is_err());
/// ```
pub fn i64_to_nonzero_usize_checked<E>(value: i64, error: E) -> Result<NonZeroUsize, E> {
    usize::try_from(value).ok().and_then(NonZeroUsize::new).ok_or(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_range_boundaries() {
        assert_eq!(format_real(0.001), "0.001");
        assert_eq!(format_real(0.000_999), "9.99E-4");
        assert_eq!(format_real(9_999_999.0), "9999999.0");
        assert_eq!(format_real(10_000_000.0), "1.0E7");
        assert_eq!(format_real(-0.0), "-0.0");
    }

    #[test]
    fn scientific_form_uses_upper_case_exponent() {
        assert_eq!(format_real(1e-5), "1.0E-5");
        assert_eq!(format_real(-2.5e-10), "-2.5E-10");
        assert_eq!(format_real(1e21), "1.0E21");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_real(f64::INFINITY), "Infinity");
        assert_eq!(format_real(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_real(f64::NAN), "NaN");
    }
}
