// ============================================================================
// Limb Representation
// Base 10^9 magnitude buffers, normalization, comparison, add/subtract kernels
// ============================================================================
//
// A magnitude is a little-endian sequence of limbs, each in [0, BASE).
// Normalized form has no most-significant zero limb; the empty buffer is zero.
// Every kernel that can shrink a magnitude ends by calling `normalize`.

use arrayvec::ArrayVec;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// One base 10^9 digit.
pub type Limb = u32;

/// Double-width intermediate for limb products and carries.
pub type Wide = u64;

/// Radix of one limb.
pub const BASE: Limb = 1_000_000_000;

/// Decimal digits stored per limb.
pub const BASE_DIGITS: usize = 9;

pub(crate) const WIDE_BASE: Wide = BASE as Wide;

/// Limb buffer; values below 10^36 stay inline.
pub type Magnitude = SmallVec<[Limb; 4]>;

/// Upper bound on the limb count of a u128 (`u128::MAX < BASE^5`).
const U128_LIMBS: usize = 5;

/// Strip most-significant zero limbs.
#[inline]
pub fn normalize(mag: &mut Magnitude) {
    while mag.last() == Some(&0) {
        mag.pop();
    }
}

/// Split a native value into limbs, least-significant first.
pub fn limbs_of_u128(mut value: u128) -> ArrayVec<Limb, U128_LIMBS> {
    let mut out = ArrayVec::new();
    while value != 0 {
        out.push((value % BASE as u128) as Limb);
        value /= BASE as u128;
    }
    out
}

/// Build a normalized magnitude from a native unsigned value.
#[inline]
pub fn magnitude_from_u128(value: u128) -> Magnitude {
    Magnitude::from_slice(&limbs_of_u128(value))
}

/// Compare two normalized magnitudes.
///
/// Limb count decides first; equal lengths are scanned from the top limb down.
pub fn cmp_magnitude(a: &[Limb], b: &[Limb]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .rev()
            .zip(b.iter().rev())
            .map(|(x, y)| x.cmp(y))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// `a += b` with ripple carry.
pub fn add_assign(a: &mut Magnitude, b: &[Limb]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }

    let mut carry: Wide = 0;
    for (i, limb) in a.iter_mut().enumerate() {
        if i >= b.len() && carry == 0 {
            break;
        }
        let rhs = b.get(i).copied().unwrap_or(0) as Wide;
        let sum = *limb as Wide + rhs + carry;
        *limb = (sum % WIDE_BASE) as Limb;
        carry = sum / WIDE_BASE;
    }

    if carry != 0 {
        a.push(carry as Limb);
    }
}

/// `a -= b`, requires `|a| >= |b|`.
pub fn sub_assign(a: &mut Magnitude, b: &[Limb]) {
    debug_assert!(cmp_magnitude(a, b).is_ge(), "magnitude subtraction underflow");

    let mut borrow = false;
    for (i, limb) in a.iter_mut().enumerate() {
        if i >= b.len() && !borrow {
            break;
        }
        let rhs = b.get(i).copied().unwrap_or(0) + Limb::from(borrow);
        if *limb >= rhs {
            *limb -= rhs;
            borrow = false;
        } else {
            *limb = *limb + BASE - rhs;
            borrow = true;
        }
    }
    debug_assert!(!borrow);

    normalize(a);
}

/// `a = b - a`, requires `|b| >= |a|`. Reuses `a`'s buffer.
pub fn sub_from(a: &mut Magnitude, b: &[Limb]) {
    debug_assert!(cmp_magnitude(b, a).is_ge(), "magnitude subtraction underflow");

    a.resize(b.len(), 0);
    let mut borrow = false;
    for (limb, &lhs) in a.iter_mut().zip(b) {
        let rhs = *limb + Limb::from(borrow);
        if lhs >= rhs {
            *limb = lhs - rhs;
            borrow = false;
        } else {
            *limb = lhs + BASE - rhs;
            borrow = true;
        }
    }
    debug_assert!(!borrow);

    normalize(a);
}
