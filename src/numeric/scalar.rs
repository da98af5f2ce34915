// ============================================================================
// Scalar Trait
// The component type bound shared by every tuple instantiation
// ============================================================================

use super::errors::{ArithmeticError, NumericResult};
use num_traits::{Float, NumAssign, Zero};
use rust_decimal::Decimal;
use std::fmt::{Debug, Display};

/// A numeric type usable as a tuple component.
///
/// Native operators (`+`, `-`, `*`, `/` and their compound forms) come from
/// [`NumAssign`], together with `zero()` and `one()`. The `try_*` methods are
/// the checked counterparts used by the tuple's `checked_*` family; they never
/// panic.
///
/// Implemented for `i8..=i64`, `u8..=u64`, `f32`, `f64` and
/// [`rust_decimal::Decimal`].
pub trait Scalar: Copy + Debug + Display + PartialOrd + NumAssign {
    /// Short type name used in diagnostics.
    const NAME: &'static str;

    /// Checked addition.
    fn try_add(self, rhs: Self) -> NumericResult<Self>;

    /// Checked subtraction.
    fn try_sub(self, rhs: Self) -> NumericResult<Self>;

    /// Checked multiplication.
    fn try_mul(self, rhs: Self) -> NumericResult<Self>;

    /// Checked division.
    fn try_div(self, rhs: Self) -> NumericResult<Self>;
}

// ============================================================================
// Fault Classification
// ============================================================================

#[inline]
fn add_fault<T: Zero + PartialOrd>(rhs: T) -> ArithmeticError {
    if rhs > T::zero() {
        ArithmeticError::Overflow
    } else {
        ArithmeticError::Underflow
    }
}

#[inline]
fn sub_fault<T: Zero + PartialOrd>(rhs: T) -> ArithmeticError {
    if rhs < T::zero() {
        ArithmeticError::Overflow
    } else {
        ArithmeticError::Underflow
    }
}

#[inline]
fn mul_fault<T: Zero + PartialOrd>(lhs: T, rhs: T) -> ArithmeticError {
    if (lhs < T::zero()) == (rhs < T::zero()) {
        ArithmeticError::Overflow
    } else {
        ArithmeticError::Underflow
    }
}

#[inline]
fn div_fault<T: Zero>(rhs: T) -> ArithmeticError {
    if rhs.is_zero() {
        ArithmeticError::DivisionByZero
    } else {
        // MIN / -1
        ArithmeticError::Overflow
    }
}

/// A non-finite result is only a fault when both inputs were finite.
#[inline]
fn guard_float<F: Float>(lhs: F, rhs: F, result: F) -> NumericResult<F> {
    if result.is_finite() || !lhs.is_finite() || !rhs.is_finite() {
        Ok(result)
    } else if result.is_sign_negative() {
        Err(ArithmeticError::Underflow)
    } else {
        Err(ArithmeticError::Overflow)
    }
}

// ============================================================================
// Implementations
// ============================================================================

macro_rules! impl_checked_scalar {
    ($($t:ty => $name:literal),* $(,)?) => {$(
        impl Scalar for $t {
            const NAME: &'static str = $name;

            #[inline]
            fn try_add(self, rhs: Self) -> NumericResult<Self> {
                self.checked_add(rhs).ok_or_else(|| add_fault(rhs))
            }

            #[inline]
            fn try_sub(self, rhs: Self) -> NumericResult<Self> {
                self.checked_sub(rhs).ok_or_else(|| sub_fault(rhs))
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> NumericResult<Self> {
                self.checked_mul(rhs).ok_or_else(|| mul_fault(self, rhs))
            }

            #[inline]
            fn try_div(self, rhs: Self) -> NumericResult<Self> {
                self.checked_div(rhs).ok_or_else(|| div_fault(rhs))
            }
        }
    )*};
}

macro_rules! impl_float_scalar {
    ($($t:ty => $name:literal),* $(,)?) => {$(
        impl Scalar for $t {
            const NAME: &'static str = $name;

            #[inline]
            fn try_add(self, rhs: Self) -> NumericResult<Self> {
                guard_float(self, rhs, self + rhs)
            }

            #[inline]
            fn try_sub(self, rhs: Self) -> NumericResult<Self> {
                guard_float(self, rhs, self - rhs)
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> NumericResult<Self> {
                guard_float(self, rhs, self * rhs)
            }

            #[inline]
            fn try_div(self, rhs: Self) -> NumericResult<Self> {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                guard_float(self, rhs, self / rhs)
            }
        }
    )*};
}

impl_checked_scalar! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    Decimal => "decimal",
}

impl_float_scalar! {
    f32 => "f32",
    f64 => "f64",
}
