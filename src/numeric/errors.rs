// ============================================================================
// Numeric Errors
// Error types for scalar arithmetic and tuple operations
// ============================================================================

use std::fmt;

/// Faults a single scalar operation can report from checked arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// Result exceeded the scalar's maximum value
    Overflow,
    /// Result below the scalar's minimum value
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            ArithmeticError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Errors produced by fallible tuple operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TupleError {
    /// Strict indexed access past the last component
    OutOfRange { index: usize, len: usize },
    /// Wrong number of values supplied to build a tuple
    ArityMismatch { expected: usize, actual: usize },
    /// Checked arithmetic failed on the component at `index`
    Arithmetic {
        index: usize,
        kind: ArithmeticError,
    },
    /// A configuration value failed validation
    InvalidConfig(&'static str),
}

impl fmt::Display for TupleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TupleError::OutOfRange { index, len } => write!(
                f,
                "index out of range: the len is {} but the index is {}",
                len, index
            ),
            TupleError::ArityMismatch { expected, actual } => write!(
                f,
                "arity mismatch: expected {} components, got {}",
                expected, actual
            ),
            TupleError::Arithmetic { index, kind } => {
                write!(f, "component {}: {}", index, kind)
            },
            TupleError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for TupleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TupleError::Arithmetic { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

impl From<(usize, ArithmeticError)> for TupleError {
    fn from((index, kind): (usize, ArithmeticError)) -> Self {
        TupleError::Arithmetic { index, kind }
    }
}

/// Result type alias for scalar operations
pub type NumericResult<T> = Result<T, ArithmeticError>;

/// Result type alias for tuple operations
pub type TupleResult<T> = Result<T, TupleError>;
