// ============================================================================
// Checked Arithmetic
// Non-trapping component-wise arithmetic reporting the failing component
// ============================================================================

use super::FixedTuple;
use crate::numeric::{NumericResult, Scalar, TupleError, TupleResult};

impl<T: Scalar, const N: usize> FixedTuple<T, N> {
    /// Apply a fallible scalar operation to every component, stopping at the
    /// first failure.
    fn try_componentwise<F>(&self, op: &'static str, mut f: F) -> TupleResult<Self>
    where
        F: FnMut(usize, T) -> NumericResult<T>,
    {
        let mut out = *self;
        for (index, slot) in out.iter_mut().enumerate() {
            *slot = f(index, *slot).map_err(|kind| {
                tracing::debug!(
                    scalar = T::NAME,
                    arity = N,
                    index,
                    op,
                    error = %kind,
                    "checked tuple arithmetic failed"
                );
                TupleError::from((index, kind))
            })?;
        }
        Ok(out)
    }

    /// Checked component-wise addition.
    ///
    /// # Errors
    /// Returns `Arithmetic` for the first component that overflows or underflows.
    pub fn checked_add(&self, rhs: &Self) -> TupleResult<Self> {
        self.try_componentwise("add", |i, lhs| lhs.try_add(rhs[i]))
    }

    /// Checked component-wise subtraction.
    ///
    /// # Errors
    /// Returns `Arithmetic` for the first component that overflows or underflows.
    pub fn checked_sub(&self, rhs: &Self) -> TupleResult<Self> {
        self.try_componentwise("sub", |i, lhs| lhs.try_sub(rhs[i]))
    }

    /// Checked component-wise multiplication.
    ///
    /// # Errors
    /// Returns `Arithmetic` for the first component that overflows or underflows.
    pub fn checked_mul(&self, rhs: &Self) -> TupleResult<Self> {
        self.try_componentwise("mul", |i, lhs| lhs.try_mul(rhs[i]))
    }

    /// Checked component-wise division.
    ///
    /// # Errors
    /// Returns `Arithmetic` with `DivisionByZero` for the first zero divisor,
    /// or `Overflow` for `MIN / -1` on signed integers.
    pub fn checked_div(&self, rhs: &Self) -> TupleResult<Self> {
        self.try_componentwise("div", |i, lhs| lhs.try_div(rhs[i]))
    }

    /// Checked addition of `rhs` to every component.
    ///
    /// # Errors
    /// Returns `Arithmetic` for the first component that overflows or underflows.
    pub fn checked_add_scalar(&self, rhs: T) -> TupleResult<Self> {
        self.try_componentwise("add", |_, lhs| lhs.try_add(rhs))
    }

    /// Checked subtraction of `rhs` from every component.
    ///
    /// # Errors
    /// Returns `Arithmetic` for the first component that overflows or underflows.
    pub fn checked_sub_scalar(&self, rhs: T) -> TupleResult<Self> {
        self.try_componentwise("sub", |_, lhs| lhs.try_sub(rhs))
    }

    /// Checked multiplication of every component by `rhs`.
    ///
    /// # Errors
    /// Returns `Arithmetic` for the first component that overflows or underflows.
    pub fn checked_mul_scalar(&self, rhs: T) -> TupleResult<Self> {
        self.try_componentwise("mul", |_, lhs| lhs.try_mul(rhs))
    }

    /// Checked division of every component by `rhs`.
    ///
    /// # Errors
    /// Returns `Arithmetic` with `DivisionByZero` at component 0 when `rhs` is
    /// zero, or `Overflow` for the first `MIN / -1` on signed integers.
    pub fn checked_div_scalar(&self, rhs: T) -> TupleResult<Self> {
        self.try_componentwise("div", |_, lhs| lhs.try_div(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ArithmeticError;

    #[test]
    fn test_checked_matches_native_when_in_range() {
        let a = FixedTuple::new([10i32, -20, 30]);
        let b = FixedTuple::new([3i32, 4, -5]);

        assert_eq!(a.checked_add(&b).unwrap(), a + b);
        assert_eq!(a.checked_sub(&b).unwrap(), a - b);
        assert_eq!(a.checked_mul(&b).unwrap(), a * b);
        assert_eq!(a.checked_div(&b).unwrap(), a / b);
    }

    #[test]
    fn test_checked_division_by_zero_reports_component() {
        let v = FixedTuple::new([5u32, 5]);
        let result = v.checked_div(&FixedTuple::new([0, 5]));

        assert_eq!(
            result,
            Err(TupleError::Arithmetic {
                index: 0,
                kind: ArithmeticError::DivisionByZero
            })
        );
    }

    #[test]
    fn test_checked_overflow_reports_first_failure() {
        let v = FixedTuple::new([1u8, 250, 255]);
        let result = v.checked_add_scalar(10);

        assert_eq!(
            result,
            Err(TupleError::Arithmetic {
                index: 1,
                kind: ArithmeticError::Overflow
            })
        );
    }

    #[test]
    fn test_checked_underflow() {
        let v = FixedTuple::new([3u64, 2, 1]);
        assert_eq!(
            v.checked_sub_scalar(2),
            Err(TupleError::Arithmetic {
                index: 2,
                kind: ArithmeticError::Underflow
            })
        );
        assert_eq!(
            FixedTuple::new([i64::MIN, 0]).checked_mul(&FixedTuple::new([2, 2])),
            Err(TupleError::Arithmetic {
                index: 0,
                kind: ArithmeticError::Underflow
            })
        );
    }

    #[test]
    fn test_checked_scalar_forms() {
        let v = FixedTuple::new([2i16, 4, 6]);
        assert_eq!(v.checked_mul_scalar(3), Ok(FixedTuple::new([6, 12, 18])));
        assert_eq!(v.checked_div_scalar(2), Ok(FixedTuple::new([1, 2, 3])));
        assert!(v.checked_div_scalar(0).is_err());
    }

    #[test]
    fn test_checked_float() {
        let v = FixedTuple::new([1.0f64, f64::MAX]);
        assert_eq!(
            v.checked_mul_scalar(2.0),
            Err(TupleError::Arithmetic {
                index: 1,
                kind: ArithmeticError::Overflow
            })
        );
        assert_eq!(
            v.checked_div_scalar(0.0),
            Err(TupleError::Arithmetic {
                index: 0,
                kind: ArithmeticError::DivisionByZero
            })
        );
    }

    #[test]
    fn test_failed_check_leaves_receiver_untouched() {
        let v = FixedTuple::new([i32::MAX, 1]);
        let _ = v.checked_add_scalar(1);
        assert_eq!(v, FixedTuple::new([i32::MAX, 1]));
    }
}
