// ============================================================================
// Component-wise Operators
// +, -, *, / and their compound forms against tuples and broadcast scalars
// ============================================================================
//
// Every operator applies the scalar's native operation per component. Nothing
// is guarded: integer division by zero panics, integer overflow panics in
// debug builds and wraps in release, floats follow IEEE 754. The checked
// family in `checked.rs` is the non-trapping alternative.

use super::FixedTuple;
use crate::numeric::Scalar;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

macro_rules! impl_componentwise_operator {
    (
        $operator:tt,
        $base_trait:ident :: $base_method:ident,
        $assign_trait:ident :: $assign_method:ident,
        $in_place:ident,
        $scalar_in_place:ident
    ) => {
        impl<T: Scalar, const N: usize> $base_trait for FixedTuple<T, N> {
            type Output = Self;

            #[inline]
            fn $base_method(mut self, rhs: Self) -> Self::Output {
                self $operator rhs;
                self
            }
        }

        impl<T: Scalar, const N: usize> $base_trait<T> for FixedTuple<T, N> {
            type Output = Self;

            #[inline]
            fn $base_method(mut self, rhs: T) -> Self::Output {
                self $operator rhs;
                self
            }
        }

        impl<T: Scalar, const N: usize> $assign_trait for FixedTuple<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                for (lhs, rhs) in self.iter_mut().zip(rhs) {
                    *lhs $operator rhs;
                }
            }
        }

        impl<T: Scalar, const N: usize> $assign_trait<T> for FixedTuple<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                for lhs in self.iter_mut() {
                    *lhs $operator rhs;
                }
            }
        }

        impl<T: Scalar, const N: usize> FixedTuple<T, N> {
            /// Compound assignment against another tuple, returning the receiver.
            #[inline]
            pub fn $in_place(&mut self, rhs: Self) -> &mut Self {
                *self $operator rhs;
                self
            }

            /// Compound assignment against a broadcast scalar, returning the receiver.
            #[inline]
            pub fn $scalar_in_place(&mut self, rhs: T) -> &mut Self {
                *self $operator rhs;
                self
            }
        }
    };
}

impl_componentwise_operator!(+=, Add::add, AddAssign::add_assign, add_in_place, add_scalar_in_place);
impl_componentwise_operator!(-=, Sub::sub, SubAssign::sub_assign, sub_in_place, sub_scalar_in_place);
impl_componentwise_operator!(*=, Mul::mul, MulAssign::mul_assign, mul_in_place, mul_scalar_in_place);
impl_componentwise_operator!(/=, Div::div, DivAssign::div_assign, div_in_place, div_scalar_in_place);
