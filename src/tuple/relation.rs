// ============================================================================
// All-Components Relations
// Comparisons that hold only when they hold for every component
// ============================================================================
//
// These are NOT a total order. For (1, 5) and (2, 3) neither `all_lt` nor
// `all_gt` holds, so `FixedTuple` has no `PartialOrd`/`Ord`.
// Tuple equality is the derived `PartialEq`: equal iff every component is.

use super::FixedTuple;
use crate::numeric::Scalar;

impl<T: Scalar, const N: usize> FixedTuple<T, N> {
    /// `self[i] < other[i]` for every `i`.
    #[inline]
    pub fn all_lt(&self, other: &Self) -> bool {
        self.all_pairs(other, |lhs, rhs| lhs < rhs)
    }

    /// `self[i] <= other[i]` for every `i`.
    #[inline]
    pub fn all_le(&self, other: &Self) -> bool {
        self.all_pairs(other, |lhs, rhs| lhs <= rhs)
    }

    /// `self[i] > other[i]` for every `i`.
    #[inline]
    pub fn all_gt(&self, other: &Self) -> bool {
        self.all_pairs(other, |lhs, rhs| lhs > rhs)
    }

    /// `self[i] >= other[i]` for every `i`.
    #[inline]
    pub fn all_ge(&self, other: &Self) -> bool {
        self.all_pairs(other, |lhs, rhs| lhs >= rhs)
    }

    /// Every component is below `value`.
    #[inline]
    pub fn all_lt_scalar(&self, value: T) -> bool {
        self.iter().all(|c| *c < value)
    }

    /// Every component is at most `value`.
    #[inline]
    pub fn all_le_scalar(&self, value: T) -> bool {
        self.iter().all(|c| *c <= value)
    }

    /// Every component is above `value`.
    #[inline]
    pub fn all_gt_scalar(&self, value: T) -> bool {
        self.iter().all(|c| *c > value)
    }

    /// Every component is at least `value`.
    #[inline]
    pub fn all_ge_scalar(&self, value: T) -> bool {
        self.iter().all(|c| *c >= value)
    }

    /// Every component equals `value`.
    #[inline]
    pub fn eq_scalar(&self, value: T) -> bool {
        self.iter().all(|c| *c == value)
    }

    /// At least one component differs from `value`.
    #[inline]
    pub fn ne_scalar(&self, value: T) -> bool {
        self.iter().any(|c| *c != value)
    }
}
