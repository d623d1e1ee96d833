// ============================================================================
// Big Integer
// Sign-magnitude arbitrary-precision integer on base 10^9 limbs
// ============================================================================

use super::division::div_rem_magnitude;
use super::errors::{NumericError, NumericResult};
use super::limbs::{
    self, cmp_magnitude, magnitude_from_u128, normalize, Limb, Magnitude, BASE, BASE_DIGITS,
};
use super::multiply::mul_schoolbook;
use std::cmp::Ordering;

/// Arbitrary-precision signed integer.
///
/// Stored as a sign flag plus a normalized little-endian limb buffer in base
/// 10^9. Zero is the empty buffer and is never negative, so the derived
/// equality and hashing agree with numeric equality.
///
/// # Example
/// ```
/// use decimal_bigint::BigInt;
///
/// let a: BigInt = "-7".parse().unwrap();
/// let b = BigInt::from(2);
///
/// assert_eq!(a.checked_div_trunc(&b).unwrap(), BigInt::from(-3));
/// assert_eq!(a.checked_rem_trunc(&b).unwrap(), BigInt::from(-1));
/// assert_eq!(&a / &b, BigInt::from(-4));
/// assert_eq!(&a % &b, BigInt::from(1));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    magnitude: Magnitude,
}

impl BigInt {
    /// Radix of one limb (10^9)
    pub const BASE: Limb = BASE;

    /// Decimal digits per limb
    pub const BASE_DIGITS: usize = BASE_DIGITS;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// One.
    #[inline]
    pub fn one() -> Self {
        Self::from_u128(false, 1)
    }

    /// Create from a native signed integer.
    ///
    /// `i64::MIN` is handled through its unsigned absolute value.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self::from_u128(value < 0, u128::from(value.unsigned_abs()))
    }

    #[inline]
    pub(crate) fn from_u128(negative: bool, abs: u128) -> Self {
        Self::from_parts(negative, magnitude_from_u128(abs))
    }

    /// Assemble from a sign and a possibly unnormalized magnitude.
    pub(crate) fn from_parts(negative: bool, mut magnitude: Magnitude) -> Self {
        normalize(&mut magnitude);
        Self {
            negative: negative && !magnitude.is_empty(),
            magnitude,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Limbs of the magnitude, least-significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.magnitude
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// -1, 0 or 1.
    #[inline]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Number of decimal digits in the magnitude ("0" has one).
    pub fn digit_count(&self) -> usize {
        match self.magnitude.last() {
            None => 1,
            Some(&top) => {
                let top_digits = top.checked_ilog10().map_or(1, |d| d as usize + 1);
                (self.magnitude.len() - 1) * BASE_DIGITS + top_digits
            },
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare absolute values.
    #[inline]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        cmp_magnitude(&self.magnitude, &other.magnitude)
    }

    /// Total order on signed values.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }

    // ========================================================================
    // Sign
    // ========================================================================

    /// Flip the sign in place; zero stays non-negative.
    #[inline]
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    // ========================================================================
    // In-place Arithmetic
    // ========================================================================

    /// `self += (-1)^rhs_negative * rhs`, reusing the receiver's buffer.
    pub(crate) fn add_signed(&mut self, rhs_negative: bool, rhs: &[Limb]) {
        if rhs.is_empty() {
            return;
        }
        if self.is_zero() {
            self.magnitude.extend_from_slice(rhs);
            self.negative = rhs_negative;
            return;
        }

        if self.negative == rhs_negative {
            limbs::add_assign(&mut self.magnitude, rhs);
            return;
        }

        match cmp_magnitude(&self.magnitude, rhs) {
            Ordering::Equal => {
                self.magnitude.clear();
                self.negative = false;
            },
            Ordering::Greater => limbs::sub_assign(&mut self.magnitude, rhs),
            Ordering::Less => {
                limbs::sub_from(&mut self.magnitude, rhs);
                self.negative = rhs_negative;
            },
        }
    }

    /// `self *= rhs` via schoolbook convolution.
    pub(crate) fn mul_by(&mut self, rhs: &Self) {
        if self.is_zero() || rhs.is_zero() {
            self.magnitude.clear();
            self.negative = false;
            return;
        }
        self.magnitude = mul_schoolbook(&self.magnitude, &rhs.magnitude);
        self.negative ^= rhs.negative;
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Truncating quotient and remainder.
    ///
    /// The quotient rounds toward zero and the remainder takes the dividend's
    /// sign, so `self == rhs * q + r` and `|r| < |rhs|`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div_rem_trunc(&self, rhs: &Self) -> NumericResult<(Self, Self)> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let (quotient, remainder) = div_rem_magnitude(&self.magnitude, &rhs.magnitude);
        Ok((
            Self::from_parts(self.negative != rhs.negative, quotient),
            Self::from_parts(self.negative, remainder),
        ))
    }

    /// Flooring quotient and remainder.
    ///
    /// The quotient rounds toward negative infinity and a non-zero remainder
    /// takes the divisor's sign.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div_rem_floor(&self, rhs: &Self) -> NumericResult<(Self, Self)> {
        let (mut quotient, mut remainder) = self.div_rem_trunc(rhs)?;
        if self.negative != rhs.negative && !remainder.is_zero() {
            quotient.add_signed(true, &[1]);
            remainder.add_signed(rhs.negative, &rhs.magnitude);
        }
        Ok((quotient, remainder))
    }

    /// Quotient rounded toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div_trunc(&self, rhs: &Self) -> NumericResult<Self> {
        self.div_rem_trunc(rhs).map(|(q, _)| q)
    }

    /// Remainder with the dividend's sign.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_rem_trunc(&self, rhs: &Self) -> NumericResult<Self> {
        self.div_rem_trunc(rhs).map(|(_, r)| r)
    }

    /// Quotient rounded toward negative infinity.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div_floor(&self, rhs: &Self) -> NumericResult<Self> {
        self.div_rem_floor(rhs).map(|(q, _)| q)
    }

    /// Remainder with the divisor's sign.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_rem_floor(&self, rhs: &Self) -> NumericResult<Self> {
        self.div_rem_floor(rhs).map(|(_, r)| r)
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// ============================================================================
// Tests
// ============================================================================
