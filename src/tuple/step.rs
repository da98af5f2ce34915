// ============================================================================
// Increment / Decrement
// Prefix and postfix unit steps applied to every component
// ============================================================================

use super::FixedTuple;
use crate::numeric::Scalar;

impl<T: Scalar, const N: usize> FixedTuple<T, N> {
    /// Prefix increment: add one to every component.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self += T::one();
        self
    }

    /// Prefix decrement: subtract one from every component.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        *self -= T::one();
        self
    }

    /// Postfix increment: returns the value held before the step.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let snapshot = *self;
        self.increment();
        snapshot
    }

    /// Postfix decrement: returns the value held before the step.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let snapshot = *self;
        self.decrement();
        snapshot
    }
}
