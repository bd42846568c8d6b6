//! # Numeric Coercion & Formatting
//!
//! Every calculator reads its inputs through [`parse_number`] and renders its
//! outputs through [`format_number`]. Neither function can fail: bad input
//! collapses to a caller-supplied default, and undefined output renders as
//! the `"-"` placeholder.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::numeric::{format_number, parse_number};
//!
//! assert_eq!(parse_number("1,250.5", 0.0), 1250.5);
//! assert_eq!(parse_number("abc", 7.0), 7.0);
//! assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
//! assert_eq!(format_number(f64::NAN, 2), "-");
//! ```

use chrono::NaiveDate;

use crate::errors::{CalcError, CalcResult};

/// Placeholder shown for any undefined result.
pub const PLACEHOLDER: &str = "-";

/// Most fractional digits [`format_number`] will render.
pub const MAX_DECIMALS: usize = 10;

/// Anything that can be coerced into a number.
///
/// Implemented for native floats (passed through) and for text, which is
/// parsed after stripping thousands separators.
pub trait NumberInput {
    /// Raw coercion; `None` when the input does not name a number.
    fn to_number(&self) -> Option<f64>;
}

impl NumberInput for f64 {
    fn to_number(&self) -> Option<f64> {
        Some(*self)
    }
}

impl NumberInput for str {
    fn to_number(&self) -> Option<f64> {
        let cleaned: String = self.trim().chars().filter(|c| *c != ',').collect();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse::<f64>().ok()
    }
}

impl NumberInput for String {
    fn to_number(&self) -> Option<f64> {
        self.as_str().to_number()
    }
}

/// Coerce `input` to a finite number, falling back to `default`.
///
/// NaN and ±infinity count as "not a number" and yield the default too.
pub fn parse_number<T: NumberInput + ?Sized>(input: &T, default: f64) -> f64 {
    match input.to_number() {
        Some(value) if value.is_finite() => value,
        _ => default,
    }
}

/// Clamp `value` into `[min, max]`. NaN clamps to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Render a value with `,` grouping and at most `decimals` fractional digits.
///
/// Trailing fractional zeros are trimmed (`2.50` renders as `2.5`).
/// `None` and NaN render as [`PLACEHOLDER`].
pub fn format_number(value: impl Into<Option<f64>>, decimals: usize) -> String {
    let value = match value.into() {
        Some(v) if !v.is_nan() => v,
        _ => return PLACEHOLDER.to_string(),
    };

    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let fixed = format!("{:.*}", decimals, round_half_away(value.abs(), decimals));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// 2^53: beyond this every f64 is already an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Round to `decimals` fractional digits, ties away from zero.
///
/// `format!` alone rounds ties to even (`0.125` would show as `0.12`).
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    if scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    scaled.round() / scale
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> CalcResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| CalcError::invalid_date(input))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
