// ============================================================================
// Conversions
// Native integers, rust_decimal (for API boundaries) and optional serde
// ============================================================================

use super::big_int::BigInt;
use super::errors::{NumericError, NumericResult};
use super::limbs::WIDE_BASE;
use rust_decimal::Decimal;

// ============================================================================
// From native integers
// ============================================================================

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                BigInt::from_u128(value < 0, value.unsigned_abs() as u128)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                BigInt::from_u128(false, value as u128)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

// ============================================================================
// Back to native integers
// ============================================================================

impl BigInt {
    /// Magnitude as u128, or None if it does not fit.
    fn magnitude_u128(&self) -> Option<u128> {
        self.limbs().iter().rev().try_fold(0u128, |acc, &limb| {
            acc.checked_mul(WIDE_BASE as u128)?
                .checked_add(limb as u128)
        })
    }
}

impl TryFrom<&BigInt> for i128 {
    type Error = NumericError;

    fn try_from(value: &BigInt) -> NumericResult<Self> {
        let abs = value.magnitude_u128().ok_or(NumericError::Overflow)?;
        if value.is_negative() {
            if abs > i128::MIN.unsigned_abs() {
                return Err(NumericError::Overflow);
            }
            Ok((abs as i128).wrapping_neg())
        } else {
            i128::try_from(abs).map_err(|_| NumericError::Overflow)
        }
    }
}

impl TryFrom<&BigInt> for u128 {
    type Error = NumericError;

    fn try_from(value: &BigInt) -> NumericResult<Self> {
        if value.is_negative() {
            return Err(NumericError::Overflow);
        }
        value.magnitude_u128().ok_or(NumericError::Overflow)
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = NumericError;

    fn try_from(value: &BigInt) -> NumericResult<Self> {
        let wide = i128::try_from(value)?;
        i64::try_from(wide).map_err(|_| NumericError::Overflow)
    }
}

impl TryFrom<&BigInt> for u64 {
    type Error = NumericError;

    fn try_from(value: &BigInt) -> NumericResult<Self> {
        let wide = u128::try_from(value)?;
        u64::try_from(wide).map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// rust_decimal
// ============================================================================

impl TryFrom<Decimal> for BigInt {
    type Error = NumericError;

    /// Convert an integral `Decimal`.
    ///
    /// # Errors
    /// Returns `FractionalValue` if the decimal has a non-zero fraction.
    fn try_from(d: Decimal) -> NumericResult<Self> {
        let normalized = d.normalize();
        if normalized.scale() != 0 {
            return Err(NumericError::FractionalValue);
        }
        Ok(BigInt::from(normalized.mantissa()))
    }
}

impl TryFrom<&BigInt> for Decimal {
    type Error = NumericError;

    /// # Errors
    /// Returns `Overflow` beyond the 96-bit `Decimal` mantissa.
    fn try_from(value: &BigInt) -> NumericResult<Self> {
        let wide = i128::try_from(value)?;
        Decimal::try_from_i128_with_scale(wide, 0).map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// serde: canonical decimal string
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::BigInt;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for BigInt {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct BigIntVisitor;

    impl Visitor<'_> for BigIntVisitor {
        type Value = BigInt;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal integer string or an integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
            v.parse().map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }
    }

    impl<'de> Deserialize<'de> for BigInt {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(BigIntVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_from_native() {
        assert_eq!(BigInt::from(0u8), BigInt::zero());
        assert_eq!(BigInt::from(-1i8).to_string(), "-1");
        assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(
            BigInt::from(i128::MIN).to_string(),
            "-170141183460469231731687303715884105728"
        );
        assert_eq!(
            BigInt::from(u128::MAX).to_string(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_to_native_bounds() {
        let min = BigInt::from(i64::MIN);
        assert_eq!(i64::try_from(&min), Ok(i64::MIN));
        assert_eq!(u64::try_from(&min), Err(NumericError::Overflow));

        let past_max = BigInt::from(i64::MAX) + BigInt::one();
        assert_eq!(i64::try_from(&past_max), Err(NumericError::Overflow));
        assert_eq!(u64::try_from(&past_max), Ok(i64::MAX as u64 + 1));

        let i128_min = BigInt::from(i128::MIN);
        assert_eq!(i128::try_from(&i128_min), Ok(i128::MIN));
        let below = &i128_min - &BigInt::one();
        assert_eq!(i128::try_from(&below), Err(NumericError::Overflow));

        let huge = BigInt::from(u128::MAX) * BigInt::from(10);
        assert_eq!(u128::try_from(&huge), Err(NumericError::Overflow));
    }

    #[test]
    fn test_decimal_roundtrip() {
        let d = Decimal::new(-123_456_789_012, 0);
        let x = BigInt::try_from(d).unwrap();
        assert_eq!(x.to_string(), "-123456789012");
        assert_eq!(Decimal::try_from(&x).unwrap(), d);
    }

    #[test]
    fn test_decimal_with_trailing_zero_scale() {
        // 12.00 is integral
        let d = Decimal::new(1200, 2);
        assert_eq!(BigInt::try_from(d).unwrap(), BigInt::from(12));
    }

    #[test]
    fn test_decimal_fraction_rejected() {
        let d = Decimal::new(1205, 2);
        assert_eq!(BigInt::try_from(d), Err(NumericError::FractionalValue));
    }

    #[test]
    fn test_decimal_overflow() {
        let x: BigInt = "100000000000000000000000000000".parse().unwrap();
        assert_eq!(Decimal::try_from(&x), Err(NumericError::Overflow));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_form() {
        let x: BigInt = "-123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);

        let from_number: BigInt = serde_json::from_str("-42").unwrap();
        assert_eq!(from_number, BigInt::from(-42));
        assert!(serde_json::from_str::<BigInt>("\"12x\"").is_err());
    }

    fn floor_div(a: i128, b: i128) -> i128 {
        let q = a / b;
        if a % b != 0 && (a < 0) != (b < 0) {
            q - 1
        } else {
            q
        }
    }

    quickcheck! {
        fn prop_i64_roundtrip(v: i64) -> bool {
            i64::try_from(&BigInt::from(v)) == Ok(v)
        }

        fn prop_i64_add_matches_native(a: i64, b: i64) -> bool {
            BigInt::from(a) + BigInt::from(b) == BigInt::from(a as i128 + b as i128)
        }

        fn prop_i64_mul_matches_native(a: i64, b: i64) -> bool {
            BigInt::from(a) * BigInt::from(b) == BigInt::from(a as i128 * b as i128)
        }

        fn prop_i64_div_rem_trunc_matches_native(a: i64, b: i64) -> bool {
            if b == 0 {
                return BigInt::from(a).div_rem_trunc(&BigInt::zero()).is_err();
            }
            let (q, r) = BigInt::from(a).div_rem_trunc(&BigInt::from(b)).unwrap();
            q == BigInt::from(a as i128 / b as i128) && r == BigInt::from(a as i128 % b as i128)
        }

        fn prop_i64_div_rem_floor_matches_native(a: i64, b: i64) -> bool {
            if b == 0 {
                return true;
            }
            let (q, r) = BigInt::from(a).div_rem_floor(&BigInt::from(b)).unwrap();
            let (a, b) = (a as i128, b as i128);
            let expected = floor_div(a, b);
            q == BigInt::from(expected) && r == BigInt::from(a - b * expected)
        }
    }
}
