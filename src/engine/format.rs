//! Conversion between `f64` and display text.

/// Values at or above this magnitude are shown in exponential notation.
const EXP_UPPER: f64 = 1e21;

/// Non-zero values below this magnitude are shown in exponential notation.
const EXP_LOWER: f64 = 1e-6;

const INFINITY: &str = "Infinity";

/// Format a number for the display.
///
/// Uses the shortest text that round-trips to the same `f64`. Integral values
/// have no fractional part, extreme magnitudes switch to exponential
/// notation with an explicit exponent sign (`1e+21`, `1.5e-7`), and negative
/// zero is shown as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{sign}{INFINITY}");
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXP_LOWER..EXP_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Parse display text back into a number.
///
/// Reads the longest numeric prefix and ignores the rest, so entries built
/// by typing onto a formatted result (`"1e-8."`, `"-Infinity5"`) still
/// have a value. Text with no numeric prefix yields NaN.
pub fn parse_number(text: &str) -> f64 {
    numeric_prefix(text).parse().unwrap_or(f64::NAN)
}

/// Longest prefix of `text` that reads as a number: an optional sign, then
/// either `Infinity` or digits with an optional fraction and exponent.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with(INFINITY) {
        return &text[..end + INFINITY.len()];
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - end - 1;
        // a lone "." is not a number, "12." is
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    &text[..end]
}
