// ============================================================================
// Schoolbook Multiplication
// O(n·m) limb convolution with u64 accumulation
// ============================================================================

use super::limbs::{normalize, Limb, Magnitude, Wide, WIDE_BASE};

/// Product of two magnitudes.
///
/// Each partial `out[i + j] + a[i] * b[j] + carry` is at most `BASE^2 - 1`,
/// so a u64 accumulator never overflows.
pub fn mul_schoolbook(a: &[Limb], b: &[Limb]) -> Magnitude {
    if a.is_empty() || b.is_empty() {
        return Magnitude::new();
    }

    let mut out: Magnitude = smallvec::smallvec![0; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let ai = ai as Wide;
        let mut carry: Wide = 0;
        for (j, &bj) in b.iter().enumerate() {
            let cur = out[i + j] as Wide + ai * bj as Wide + carry;
            out[i + j] = (cur % WIDE_BASE) as Limb;
            carry = cur / WIDE_BASE;
        }
        // Row i never touched out[i + b.len()] before, so the carry lands directly.
        out[i + b.len()] = carry as Limb;
    }

    normalize(&mut out);
    out
}

/// `a *= factor` for a single limb factor.
pub fn mul_limb_assign(a: &mut Magnitude, factor: Limb) {
    if factor == 0 {
        a.clear();
        return;
    }

    let factor = factor as Wide;
    let mut carry: Wide = 0;
    for limb in a.iter_mut() {
        let cur = *limb as Wide * factor + carry;
        *limb = (cur % WIDE_BASE) as Limb;
        carry = cur / WIDE_BASE;
    }
    if carry != 0 {
        a.push(carry as Limb);
    }
}
