// ============================================================================
// Decimal BigInt Library
// Arbitrary-precision signed integers with exact division
// ============================================================================

//! # Decimal BigInt
//!
//! Arbitrary-precision signed integers stored as base 10^9 limbs.
//!
//! ## Features
//!
//! - **Exact arithmetic**: addition, subtraction, schoolbook multiplication
//! - **Long division** with truncating and flooring quotient/remainder
//! - **Checked errors**: division by zero and malformed decimal input are
//!   reported as [`NumericError`](numeric::NumericError), never papered over
//! - **Cheap decimal I/O**: base 10^9 limbs map directly onto decimal text
//!
//! ## Example
//!
//! ```rust
//! use decimal_bigint::prelude::*;
//!
//! let a: BigInt = "123456789123456789".parse().unwrap();
//! let b = BigInt::from(987_654_321);
//!
//! let product = &a * &b;
//! assert_eq!(product.to_string(), "121932631234567900112635269");
//!
//! // Truncating division rounds toward zero...
//! let (q, r) = BigInt::from(-7).div_rem_trunc(&BigInt::from(2)).unwrap();
//! assert_eq!(q, BigInt::from(-3));
//! assert_eq!(r, BigInt::from(-1));
//!
//! // ...the operators floor, like Python's `//` and `%`.
//! assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-4));
//! assert_eq!(BigInt::from(-7) % BigInt::from(2), BigInt::from(1));
//!
//! assert_eq!(
//!     a.checked_div_floor(&BigInt::zero()),
//!     Err(NumericError::DivisionByZero)
//! );
//! ```

pub mod config;
pub mod interfaces;
pub mod numeric;

pub use numeric::BigInt;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::CodecConfig;
    pub use crate::interfaces::{write_big_int, writeln_big_int, BigIntReader, StreamError};
    pub use crate::numeric::{parse_with, BigInt, NumericError, NumericResult};
}
