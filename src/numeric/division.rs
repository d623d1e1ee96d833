// ============================================================================
// Long Division
// Truncating quotient and remainder of two magnitudes
// ============================================================================
//
// Single-limb divisors take one top-down pass. Wider divisors use the
// Algorithm D shape: scale both operands so the top divisor limb is at least
// BASE / 2, estimate each quotient limb from the two leading remainder limbs,
// then decrement-and-retry until the shifted trial subtraction fits.

use super::limbs::{cmp_magnitude, normalize, Limb, Magnitude, Wide, BASE, WIDE_BASE};
use super::multiply::mul_limb_assign;

/// Truncating `(a / b, a % b)` on magnitudes. `b` must be non-empty.
pub fn div_rem_magnitude(a: &[Limb], b: &[Limb]) -> (Magnitude, Magnitude) {
    debug_assert!(!b.is_empty(), "division by zero magnitude");

    if cmp_magnitude(a, b).is_lt() {
        return (Magnitude::new(), Magnitude::from_slice(a));
    }

    if let &[divisor] = b {
        let (quotient, rem) = div_rem_limb(a, divisor);
        let mut remainder = Magnitude::new();
        if rem != 0 {
            remainder.push(rem);
        }
        return (quotient, remainder);
    }

    div_rem_multi(a, b)
}

/// Divide by one limb; returns the quotient and the leftover limb.
pub fn div_rem_limb(a: &[Limb], divisor: Limb) -> (Magnitude, Limb) {
    debug_assert!(divisor != 0);

    let divisor = divisor as Wide;
    let mut quotient: Magnitude = smallvec::smallvec![0; a.len()];
    let mut rem: Wide = 0;
    for (q, &limb) in quotient.iter_mut().zip(a).rev() {
        let cur = limb as Wide + rem * WIDE_BASE;
        *q = (cur / divisor) as Limb;
        rem = cur % divisor;
    }

    normalize(&mut quotient);
    (quotient, rem as Limb)
}

fn div_rem_multi(a: &[Limb], b: &[Limb]) -> (Magnitude, Magnitude) {
    let n = a.len();
    let m = b.len();

    // Scaling keeps qhat within two of the true digit.
    let scale = BASE / (b[m - 1] + 1);
    let mut divisor = Magnitude::from_slice(b);
    let mut rem = Magnitude::from_slice(a);
    if scale > 1 {
        mul_limb_assign(&mut divisor, scale);
        mul_limb_assign(&mut rem, scale);
    }
    debug_assert_eq!(divisor.len(), m);
    tracing::trace!(dividend_limbs = n, divisor_limbs = m, scale, "long division");

    // Headroom limb for the most significant partial product.
    rem.resize(n + 1, 0);

    let top = divisor[m - 1] as Wide;
    let mut quotient: Magnitude = smallvec::smallvec![0; n - m + 1];
    let mut scratch = Magnitude::with_capacity(m + 1);

    for pos in (0..=n - m).rev() {
        let numerator = rem[pos + m] as Wide * WIDE_BASE + rem[pos + m - 1] as Wide;
        let mut qhat = (numerator / top).min(WIDE_BASE - 1);
        let mut retries = 0u32;

        loop {
            let window = &mut rem[pos..=pos + m];
            scratch.clear();
            scratch.extend_from_slice(window);
            if sub_mul_shifted(&mut scratch, &divisor, qhat) {
                window.copy_from_slice(&scratch);
                quotient[pos] = qhat as Limb;
                break;
            }
            // Subtracting zero always fits, so qhat > 0 here.
            qhat -= 1;
            retries += 1;
        }

        if retries > 0 {
            tracing::trace!(pos, qhat, retries, "quotient digit corrected");
        }
    }

    normalize(&mut quotient);
    normalize(&mut rem);
    if scale > 1 {
        let (unscaled, leftover) = div_rem_limb(&rem, scale);
        debug_assert_eq!(leftover, 0);
        rem = unscaled;
    }
    (quotient, rem)
}

/// `window -= divisor * qhat` where `window` has one limb more than `divisor`.
///
/// Product carries and remainder borrows ripple together. Returns false, with
/// `window` left in an unspecified state, if the result would be negative.
fn sub_mul_shifted(window: &mut [Limb], divisor: &[Limb], qhat: Wide) -> bool {
    debug_assert_eq!(window.len(), divisor.len() + 1);

    let mut carry: Wide = 0;
    let mut borrow: Wide = 0;
    for (limb, &d) in window.iter_mut().zip(divisor) {
        let product = d as Wide * qhat + carry;
        carry = product / WIDE_BASE;
        let sub = product % WIDE_BASE + borrow;
        let cur = *limb as Wide;
        if cur >= sub {
            *limb = (cur - sub) as Limb;
            borrow = 0;
        } else {
            *limb = (cur + WIDE_BASE - sub) as Limb;
            borrow = 1;
        }
    }

    let Some(last) = window.last_mut() else {
        return false;
    };
    let sub = carry + borrow;
    let cur = *last as Wide;
    if cur < sub {
        return false;
    }
    *last = (cur - sub) as Limb;
    true
}
