// ============================================================================
// Numeric Module
// Arbitrary-precision signed integers on base 10^9 limbs
// ============================================================================
//
// This module provides:
// - BigInt: sign-magnitude integer with exact +, -, *, truncating and
//   flooring division/remainder
// - Limb kernels: normalization, comparison, add/subtract, schoolbook
//   multiplication, long division
// - Decimal codec and conversions to native integers and rust_decimal
// - NumericError: Error types for parsing, conversion and division
//
// Design principles:
// - No floating-point operations
// - Fallible operations return Result; operators panic only where the
//   primitive integer operators do (division by zero)
// - Every result is normalized: no top zero limb, no negative zero

mod big_int;
mod codec;
mod division;
mod errors;
mod interop;
mod limbs;
mod multiply;
mod ops;
mod proptests;

pub use big_int::BigInt;
pub use codec::parse_with;
pub use errors::{NumericError, NumericResult};
pub use limbs::{Limb, BASE, BASE_DIGITS};
