//! Text-to-number conversion.
//!
//! Accepted grammar, after stripping surrounding whitespace:
//!
//! ```text
//! value    := sign? mantissa exponent?
//! sign     := '+' | '-'
//! mantissa := digits ('.' digits?)? | '.' digits
//! exponent := ('e' | 'E') sign? digits
//! ```
//!
//! Special values (`inf`, `nan`), digit separators and hex literals are
//! rejected, so every accepted value is finite.

use crate::error::ValueError;

/// Parse one line of input into a finite `f64`.
pub fn parse_value(text: &str) -> Result<f64, ValueError> {
    let text = text.trim();

    if !is_decimal_literal(text) {
        return Err(ValueError::Malformed);
    }

    let value: f64 = text.parse().map_err(|_| ValueError::Malformed)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValueError::OutOfRange)
    }
}

/// Check `text` against the grammar above without allocating.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_value("5"), Ok(5.0));
        assert_eq!(parse_value("1.5"), Ok(1.5));
        assert_eq!(parse_value("-0.25"), Ok(-0.25));
        assert_eq!(parse_value("+7"), Ok(7.0));
    }

    #[test]
    fn test_partial_mantissa_forms() {
        assert_eq!(parse_value(".5"), Ok(0.5));
        assert_eq!(parse_value("5."), Ok(5.0));
        assert_eq!(parse_value("-.5"), Ok(-0.5));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_value("1e3"), Ok(1000.0));
        assert_eq!(parse_value("2.5E-1"), Ok(0.25));
        assert_eq!(parse_value("1e+2"), Ok(100.0));
    }

    #[test]
    fn test_surrounding_whitespace_is_stripped() {
        assert_eq!(parse_value("  42 \r\n"), Ok(42.0));
        assert_eq!(parse_value("\t3.0"), Ok(3.0));
    }

    #[test]
    fn test_rejects_malformed() {
        for text in [
            "", "   ", "abc", "1.2.3", "1e", "e5", ".", "+", "-", "1 2", "0x10", "1_000", "--1",
            "1e5.0",
        ] {
            assert_eq!(parse_value(text), Err(ValueError::Malformed), "{:?}", text);
        }
    }

    #[test]
    fn test_rejects_special_values() {
        for text in ["inf", "-inf", "infinity", "NaN", "nan"] {
            assert_eq!(parse_value(text), Err(ValueError::Malformed), "{:?}", text);
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert_eq!(parse_value("1e400"), Err(ValueError::OutOfRange));
        assert_eq!(parse_value("-1e400"), Err(ValueError::OutOfRange));
    }

    #[test]
    fn test_underflow_is_zero() {
        assert_eq!(parse_value("1e-400"), Ok(0.0));
    }
}
