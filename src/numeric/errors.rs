// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision integer operations
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing, converting or dividing big integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Divisor was zero
    DivisionByZero,
    /// Input contained no digits after the optional sign
    Empty,
    /// Input contained a byte that is not an ASCII decimal digit
    InvalidDigit {
        /// Byte offset into the original input
        index: usize,
        /// The offending byte
        byte: u8,
    },
    /// Input had more significant digits than the configured limit
    TooManyDigits {
        /// The configured limit
        limit: usize,
    },
    /// Value does not fit the requested target type
    Overflow,
    /// Source value has a non-zero fractional part
    FractionalValue,
    /// Codec configuration is not usable
    InvalidConfig,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Empty => write!(f, "invalid input: no digits to parse"),
            NumericError::InvalidDigit { index, byte } => write!(
                f,
                "invalid input: unexpected {:?} at byte {}",
                char::from(*byte),
                index
            ),
            NumericError::TooManyDigits { limit } => {
                write!(f, "invalid input: more than {} significant digits", limit)
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value does not fit target type")
            },
            NumericError::FractionalValue => {
                write!(f, "precision loss: value has a fractional part")
            },
            NumericError::InvalidConfig => write!(f, "invalid codec configuration"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
