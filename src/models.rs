//! Data models for the aggregation result.

use std::fmt;

/// Number of decimal places both statistics are rounded to.
pub const DECIMALS: usize = 2;

/// Minimum and mean of a non-empty input, each already rounded to [`DECIMALS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Smallest input value.
    pub minimum: f64,
    /// Arithmetic mean of the input values.
    pub mean: f64,
}

impl Summary {
    /// Round raw statistics into a summary.
    pub fn from_raw(minimum: f64, mean: f64) -> Self {
        Self {
            minimum: round_to(minimum, DECIMALS),
            mean: round_to(mean, DECIMALS),
        }
    }
}

/// Round `value` to `decimals` places.
///
/// Rounds the exact binary value of the float, ties to even. This is the rule
/// `format!("{:.2}", ..)` applies, so `0.125` becomes `0.12` and `2.675`
/// (stored as 2.67499...) becomes `2.67`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Magnitude from which values print in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e16;

/// Display wrapper printing a float in shortest form with at least one
/// fractional digit (`5.0`, `2.5`, `3.33`). Magnitudes of 1e16 and above use
/// exponent form with a signed exponent (`1e+16`, `1.7e+308`).
#[derive(Debug, Clone, Copy)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.abs() >= EXPONENT_THRESHOLD {
            let text = format!("{:e}", self.0);
            return match text.split_once('e') {
                Some((mantissa, exponent)) => write!(f, "{}e+{}", mantissa, exponent),
                None => write!(f, "{}", text),
            };
        }

        let text = self.0.to_string();
        if self.0.is_finite() && !text.contains('.') {
            write!(f, "{}.0", text)
        } else {
            write!(f, "{}", text)
        }
    }
}
