//! Numeric attribute helpers
//!
//! SVG attribute values are strings. Imported documents routinely carry
//! units (`12px`) or junk, so reading them follows the browser `parseFloat`
//! rule: take the longest leading decimal number and ignore the rest.

/// Parse the leading decimal number of `text`.
///
/// Returns `None` when `text` does not start (after whitespace) with a number.
///
/// ```
/// use svg_editor_wasm::utils::numbers::parse_leading_f64;
///
/// assert_eq!(parse_leading_f64("12px"), Some(12.0));
/// assert_eq!(parse_leading_f64(" -.5e1 "), Some(-5.0));
/// assert_eq!(parse_leading_f64("abc"), None);
/// ```
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // A trailing '.' is only part of the number when digits precede it
        if frac_end > frac_start || digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Read an optional numeric attribute, degrading to `default` when it is
/// missing, not numeric, or overflows to infinity.
pub fn number_or(value: Option<&str>, default: f64) -> f64 {
    value
        .and_then(parse_leading_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Format a number for an attribute value.
///
/// Whole numbers print without a fractional part (`5`, not `5.0`), and
/// negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}
