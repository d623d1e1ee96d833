// ============================================================================
// Decimal Codec
// Parsing decimal text into BigInt and formatting it back
// ============================================================================

use super::big_int::BigInt;
use super::errors::{NumericError, NumericResult};
use super::limbs::{Limb, Magnitude, BASE_DIGITS};
use crate::config::CodecConfig;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Parse decimal text under the given policy.
///
/// Accepted shape: optional whitespace (if enabled), optional `-` or `+`
/// (if enabled), then one or more ASCII digits. Leading zeros are ignored and
/// `-0` parses as zero. Any other byte is rejected rather than skipped.
///
/// # Errors
/// - `Empty` if there are no digits
/// - `InvalidDigit` at the first byte that is not a digit
/// - `TooManyDigits` if the significant digits exceed `config.max_digits`
pub fn parse_with(text: &str, config: &CodecConfig) -> NumericResult<BigInt> {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();

    if config.trim_whitespace {
        while start < end && bytes[start].is_ascii_whitespace() {
            start += 1;
        }
        while end > start && bytes[end - 1].is_ascii_whitespace() {
            end -= 1;
        }
    }

    let negative = match bytes.get(start).copied() {
        Some(b'-') if start < end => {
            start += 1;
            true
        },
        Some(b'+') if start < end && config.allow_plus_sign => {
            start += 1;
            false
        },
        _ => false,
    };

    let digits = &bytes[start..end];
    if digits.is_empty() {
        tracing::debug!(input = text, "no digits in decimal input");
        return Err(NumericError::Empty);
    }

    if let Some(offset) = digits.iter().position(|b| !b.is_ascii_digit()) {
        let err = NumericError::InvalidDigit {
            index: start + offset,
            byte: digits[offset],
        };
        tracing::debug!(input = text, %err, "rejected decimal input");
        return Err(err);
    }

    let first_significant = digits
        .iter()
        .position(|&b| b != b'0')
        .unwrap_or(digits.len());
    let significant = &digits[first_significant..];

    if let Some(limit) = config.max_digits {
        if significant.len() > limit {
            tracing::debug!(digits = significant.len(), limit, "decimal input too long");
            return Err(NumericError::TooManyDigits { limit });
        }
    }

    // Groups of nine digits, least-significant group first.
    let magnitude: Magnitude = significant
        .rchunks(BASE_DIGITS)
        .map(|group| {
            group
                .iter()
                .fold(0, |acc: Limb, &b| acc * 10 + Limb::from(b - b'0'))
        })
        .collect();

    Ok(BigInt::from_parts(negative, magnitude))
}

impl BigInt {
    /// Parse with the default (permissive) policy.
    ///
    /// # Errors
    /// See [`parse_with`].
    #[inline]
    pub fn from_decimal_str(text: &str) -> NumericResult<Self> {
        parse_with(text, &CodecConfig::default())
    }

    /// Canonical decimal form: no leading zeros, `-` only for negative values.
    #[inline]
    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }

    fn magnitude_digits(&self) -> String {
        let limbs = self.limbs();
        let Some((&top, rest)) = limbs.split_last() else {
            return String::from("0");
        };

        let mut out = String::with_capacity(limbs.len() * BASE_DIGITS);
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", top);
        for limb in rest.iter().rev() {
            let _ = write!(out, "{:0width$}", limb, width = BASE_DIGITS);
        }
        out
    }
}

impl FromStr for BigInt {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "000123" -> 123
    /// - "  -42 " -> -42
    /// - "+7" -> 7
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_digits())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({}, limbs={:?})", self, self.limbs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zeros() {
        let x: BigInt = "000123".parse().unwrap();
        assert_eq!(x, BigInt::from(123));
        assert_eq!(x.to_string(), "123");
    }

    #[test]
    fn test_zero_forms() {
        for text in ["0", "-0", "+0", "0000000000000000000", "-000"] {
            let x: BigInt = text.parse().unwrap();
            assert!(x.is_zero(), "{}", text);
            assert!(!x.is_negative(), "{}", text);
            assert_eq!(x.to_string(), "0");
        }
    }

    #[test]
    fn test_limb_grouping() {
        let x: BigInt = "1234567890123456789".parse().unwrap();
        assert_eq!(x.limbs(), &[123_456_789, 234_567_890, 1]);
        assert_eq!(x.to_string(), "1234567890123456789");
    }

    #[test]
    fn test_inner_limbs_zero_padded() {
        let x: BigInt = "-1000000000000000001".parse().unwrap();
        assert_eq!(x.limbs(), &[1, 0, 1]);
        assert_eq!(x.to_string(), "-1000000000000000001");
    }

    #[test]
    fn test_whitespace_and_sign() {
        assert_eq!(" \t\n-42\r\n".parse::<BigInt>().unwrap(), BigInt::from(-42));
        assert_eq!("+42".parse::<BigInt>().unwrap(), BigInt::from(42));
    }

    #[test]
    fn test_empty_input() {
        for text in ["", "   ", "-", "+", " - "] {
            assert_eq!(text.parse::<BigInt>(), Err(NumericError::Empty), "{:?}", text);
        }
    }

    #[test]
    fn test_invalid_digit_is_rejected() {
        assert_eq!(
            "12a4".parse::<BigInt>(),
            Err(NumericError::InvalidDigit { index: 2, byte: b'a' })
        );
        assert_eq!(
            "  --5".parse::<BigInt>(),
            Err(NumericError::InvalidDigit { index: 3, byte: b'-' })
        );
        // A bad byte deep inside a long number is not silently zeroed.
        let text = "1234567890123x567890123";
        assert_eq!(
            text.parse::<BigInt>(),
            Err(NumericError::InvalidDigit { index: 13, byte: b'x' })
        );
        assert_eq!(
            "1 000".parse::<BigInt>(),
            Err(NumericError::InvalidDigit { index: 1, byte: b' ' })
        );
    }

    #[test]
    fn test_strict_config() {
        let strict = CodecConfig::strict();
        assert_eq!(parse_with("-17", &strict).unwrap(), BigInt::from(-17));
        assert_eq!(
            parse_with("+17", &strict),
            Err(NumericError::InvalidDigit { index: 0, byte: b'+' })
        );
        assert_eq!(
            parse_with(" 17", &strict),
            Err(NumericError::InvalidDigit { index: 0, byte: b' ' })
        );
    }

    #[test]
    fn test_max_digits() {
        let config = CodecConfig::default().with_max_digits(5);
        assert_eq!(parse_with("0000012345", &config).unwrap(), BigInt::from(12345));
        assert_eq!(
            parse_with("123456", &config),
            Err(NumericError::TooManyDigits { limit: 5 })
        );
    }

    #[test]
    fn test_display_flags() {
        let x = BigInt::from(-42);
        assert_eq!(format!("{:>6}", x), "   -42");
        assert_eq!(format!("{:06}", x), "-00042");
        assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
        assert_eq!(format!("{:<4}|", BigInt::zero()), "0   |");
    }

    #[test]
    fn test_debug() {
        let x = BigInt::from(-1_000_000_001);
        assert_eq!(format!("{:?}", x), "BigInt(-1000000001, limbs=[1, 1])");
    }

    #[test]
    fn test_decimal_string_helpers() {
        let x = BigInt::from_decimal_str("-00098765432109876543210").unwrap();
        assert_eq!(x.to_decimal_string(), "-98765432109876543210");
    }
}
