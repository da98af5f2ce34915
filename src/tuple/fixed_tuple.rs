// ============================================================================
// Fixed Tuple
// N-component numeric aggregate with value semantics
// ============================================================================

use crate::config::IndexPolicy;
use crate::numeric::{Scalar, TupleError, TupleResult};
use arrayvec::ArrayVec;
use std::ops::{Index, IndexMut};

/// Fixed-size numeric tuple with compile-time arity.
///
/// Stores `N` components of scalar type `T` in declaration order. Arithmetic
/// is component-wise, relations hold only when they hold for every component
/// (see [`FixedTuple::all_lt`]), and the type is `Copy`.
///
/// # Type Parameters
/// - `T`: the shared component type, see [`Scalar`]
/// - `N`: the number of components, fixed for the life of the value
///
/// # Example
/// ```
/// use fixed_tuple::FixedTuple;
///
/// let a = FixedTuple::new([1, 2, 3]);
/// let b = FixedTuple::new([3, 2, 1]);
///
/// assert_eq!(a + b, FixedTuple::new([4, 4, 4]));
/// assert!(!a.all_lt(&b));
/// assert_eq!(a.to_string(), "x: 1 | y: 2 | z: 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FixedTuple<T, const N: usize> {
    components: [T; N],
}

impl<T: Scalar, const N: usize> FixedTuple<T, N> {
    /// Number of components
    pub const ARITY: usize = N;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from all `N` component values.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// Every component set to zero.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self {
            components: [value; N],
        }
    }

    /// Create from up to `N` leading values; missing trailing components are zero.
    ///
    /// # Errors
    /// Returns `ArityMismatch` if more than `N` values are supplied.
    pub fn from_leading(values: &[T]) -> TupleResult<Self> {
        if values.len() > N {
            return Err(TupleError::ArityMismatch {
                expected: N,
                actual: values.len(),
            });
        }

        let mut tuple = Self::zeros();
        tuple.components[..values.len()].copy_from_slice(values);
        Ok(tuple)
    }

    /// Create from an iterator yielding exactly `N` values.
    ///
    /// Consumption stops at the first surplus item, so unbounded iterators are
    /// rejected without being drained.
    ///
    /// # Errors
    /// Returns `ArityMismatch` if the iterator yields fewer or more than `N` values.
    /// When there are more, `actual` is a lower bound taken from the iterator's
    /// `size_hint`.
    pub fn try_from_iter<I>(iter: I) -> TupleResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = ArrayVec::<T, N>::new();
        let mut iter = iter.into_iter();

        let mut overflowed = false;

        for value in iter.by_ref() {
            if values.try_push(value).is_err() {
                overflowed = true;
                break;
            }
        }

        if overflowed {
            let (remaining, _) = iter.size_hint();
            return Err(TupleError::ArityMismatch {
                expected: N,
                actual: (N + 1).saturating_add(remaining),
            });
        }

        values
            .into_inner()
            .map(Self::new)
            .map_err(|partial| TupleError::ArityMismatch {
                expected: N,
                actual: partial.len(),
            })
    }

    /// Set every component to `value`.
    #[inline]
    pub fn assign_scalar(&mut self, value: T) -> &mut Self {
        self.components = [value; N];
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of components (always `N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Mutable access to component `index`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `index >= N`.
    #[inline]
    pub fn at(&mut self, index: usize) -> TupleResult<&mut T> {
        self.components
            .get_mut(index)
            .ok_or(TupleError::OutOfRange { index, len: N })
    }

    /// Mutable access with the legacy clamp: any `index >= N` returns component 0.
    ///
    /// # Panics
    /// Panics if `N == 0` and there is no component 0 to alias. Use
    /// [`FixedTuple::at_with`] for a form that reports this as `OutOfRange`.
    pub fn at_clamped(&mut self, index: usize) -> &mut T {
        let slot = if index < N {
            index
        } else {
            tracing::warn!(index, len = N, "out-of-range tuple index clamped to component 0");
            0
        };
        &mut self.components[slot]
    }

    /// Mutable access following `policy`.
    ///
    /// # Errors
    /// Returns `OutOfRange` for `index >= N` under [`IndexPolicy::Strict`], or
    /// under [`IndexPolicy::LegacyClamp`] when the tuple has no components.
    pub fn at_with(&mut self, index: usize, policy: IndexPolicy) -> TupleResult<&mut T> {
        match policy {
            IndexPolicy::Strict => self.at(index),
            IndexPolicy::LegacyClamp if N == 0 => Err(TupleError::OutOfRange { index, len: N }),
            IndexPolicy::LegacyClamp => Ok(self.at_clamped(index)),
        }
    }

    /// Shared access to component `index`, `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.components.get(index)
    }

    /// Mutable access to component `index`, `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.components.get_mut(index)
    }

    /// Set every component to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.reset_to(T::zero());
    }

    /// Set every component to `value`.
    #[inline]
    pub fn reset_to(&mut self, value: T) {
        for slot in self.components.iter_mut() {
            *slot = value;
        }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.components.iter_mut()
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.components
    }

    // ========================================================================
    // Component-wise Mapping
    // ========================================================================

    /// Apply `f` to every component.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self {
            components: self.components.map(f),
        }
    }

    /// Combine same-indexed components of `self` and `other` with `f`.
    #[inline]
    pub fn zip_map<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        let mut out = self;
        for (lhs, rhs) in out.components.iter_mut().zip(other.components) {
            *lhs = f(*lhs, rhs);
        }
        out
    }

    /// True iff `pred` holds for every same-indexed component pair.
    #[inline]
    pub(crate) fn all_pairs<F>(&self, other: &Self, mut pred: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(lhs, rhs)| pred(lhs, rhs))
    }
}

// ============================================================================
// Named Accessors
// ============================================================================

impl<T: Scalar> FixedTuple<T, 2> {
    #[inline]
    pub const fn xy(x: T, y: T) -> Self {
        Self::new([x, y])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.components[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.components[1]
    }
}

impl<T: Scalar> FixedTuple<T, 3> {
    #[inline]
    pub const fn xyz(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.components[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.components[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.components[2]
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Scalar, const N: usize> Default for FixedTuple<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

/// Panics on `index >= N`, like slice indexing. Use [`FixedTuple::at`] or
/// [`FixedTuple::at_clamped`] for the non-panicking forms.
impl<T, const N: usize> Index<usize> for FixedTuple<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedTuple<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for FixedTuple<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T: Scalar, const N: usize> From<FixedTuple<T, N>> for [T; N] {
    #[inline]
    fn from(tuple: FixedTuple<T, N>) -> Self {
        tuple.into_array()
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for FixedTuple<T, N> {
    type Error = TupleError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_iter(values.iter().copied())
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedTuple<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.components
    }
}

impl<T, const N: usize> IntoIterator for FixedTuple<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedTuple<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Build a [`FixedTuple`](crate::FixedTuple) from a list of components.
///
/// ```
/// use fixed_tuple::fixed_tuple;
///
/// let v = fixed_tuple![1u32, 2, 3, 4];
/// assert_eq!(v.size(), 4);
/// ```
#[macro_export]
macro_rules! fixed_tuple {
    ($($component:expr),+ $(,)?) => {
        $crate::FixedTuple::new([$($component),+])
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type V2 = FixedTuple<i32, 2>;
    type V3 = FixedTuple<i32, 3>;

    #[test]
    fn test_construction_round_trip() {
        let t = FixedTuple::new([7i64, -3, 12, 0, 5]);
        assert_eq!(t.size(), 5);
        assert_eq!(FixedTuple::<i64, 5>::ARITY, 5);
        for (i, expected) in [7, -3, 12, 0, 5].into_iter().enumerate() {
            assert_eq!(t[i], expected);
        }
    }

    #[test]
    fn test_zero_defaults() {
        assert_eq!(V3::default(), V3::new([0, 0, 0]));
        assert_eq!(V3::zeros(), V3::splat(0));
        assert_eq!(FixedTuple::<f64, 4>::default().as_array(), &[0.0; 4]);
    }

    #[test]
    fn test_from_leading() {
        let t = FixedTuple::<u32, 4>::from_leading(&[1, 2]).unwrap();
        assert_eq!(t, FixedTuple::new([1, 2, 0, 0]));

        let empty = FixedTuple::<u32, 4>::from_leading(&[]).unwrap();
        assert_eq!(empty, FixedTuple::zeros());

        let result = V2::from_leading(&[1, 2, 3]);
        assert_eq!(
            result,
            Err(TupleError::ArityMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_try_from_iter() {
        let t = V3::try_from_iter(1..=3).unwrap();
        assert_eq!(t, V3::new([1, 2, 3]));

        assert_eq!(
            V3::try_from_iter(1..=2),
            Err(TupleError::ArityMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            V3::try_from_iter(1..=6),
            Err(TupleError::ArityMismatch {
                expected: 3,
                actual: 6
            })
        );
    }

    #[test]
    fn test_try_from_unbounded_iter_stops_at_first_surplus() {
        let result = V3::try_from_iter(std::iter::repeat(1));
        assert!(matches!(
            result,
            Err(TupleError::ArityMismatch { expected: 3, actual }) if actual > 3
        ));

        let mut source = std::iter::repeat(7).take(1_000);
        let result = FixedTuple::<i32, 2>::try_from_iter(source.by_ref());
        assert!(matches!(result, Err(TupleError::ArityMismatch { expected: 2, .. })));
        assert_eq!(source.count(), 997);
    }

    #[test]
    fn test_try_from_slice() {
        let values = [4u8, 5, 6];
        let t = FixedTuple::<u8, 3>::try_from(&values[..]).unwrap();
        assert_eq!(t.into_array(), values);
        assert!(FixedTuple::<u8, 2>::try_from(&values[..]).is_err());
    }

    #[test]
    fn test_assign_scalar() {
        let mut t = V3::new([1, 2, 3]);
        t.assign_scalar(9).assign_scalar(4);
        assert_eq!(t, V3::splat(4));
    }

    #[test]
    fn test_strict_at() {
        let mut t = V2::new([1, 2]);
        *t.at(1).unwrap() = 20;
        assert_eq!(t, V2::new([1, 20]));

        assert_eq!(t.at(5), Err(TupleError::OutOfRange { index: 5, len: 2 }));
        assert_eq!(t.at(2), Err(TupleError::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_legacy_clamped_at() {
        let mut t = V2::new([1, 2]);
        assert_eq!(*t.at_clamped(5), 1);
        assert_eq!(*t.at_clamped(1), 2);

        // Writes through the alias land in component 0
        *t.at_clamped(200) = 42;
        assert_eq!(t, V2::new([42, 2]));
    }

    #[test]
    #[should_panic]
    fn test_clamped_at_on_empty_tuple_panics() {
        let mut empty = FixedTuple::<i32, 0>::zeros();
        let _ = empty.at_clamped(0);
    }

    #[test]
    fn test_at_with_policy() {
        let mut t = V2::new([1, 2]);
        assert_eq!(t.at_with(5, IndexPolicy::LegacyClamp), Ok(&mut 1));
        assert_eq!(
            t.at_with(5, IndexPolicy::Strict),
            Err(TupleError::OutOfRange { index: 5, len: 2 })
        );

        let mut empty = FixedTuple::<i32, 0>::zeros();
        assert!(empty.at_with(0, IndexPolicy::LegacyClamp).is_err());
    }

    #[test]
    fn test_get() {
        let mut t = V3::new([1, 2, 3]);
        assert_eq!(t.get(2), Some(&3));
        assert_eq!(t.get(3), None);
        if let Some(z) = t.get_mut(2) {
            *z = 30;
        }
        assert_eq!(t[2], 30);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let t = V2::new([1, 2]);
        let _ = t[5];
    }

    #[test]
    fn test_reset() {
        let mut t = FixedTuple::new([1.5f32, -2.0, 8.25]);
        t.reset_to(3.0);
        assert!(t.iter().all(|&c| c == 3.0));

        t.reset();
        assert_eq!(t, FixedTuple::zeros());

        let mut empty = FixedTuple::<u8, 0>::zeros();
        empty.reset_to(9);
        assert_eq!(empty.size(), 0);
    }

    #[test]
    fn test_named_accessors() {
        let mut v = FixedTuple::xy(3u64, 4);
        assert_eq!((v.x(), v.y()), (3, 4));
        *v.y_mut() += 1;
        assert_eq!(v.y(), 5);

        let mut w = FixedTuple::xyz(1i16, 2, 3);
        *w.z_mut() = -3;
        *w.x_mut() = 10;
        assert_eq!((w.x(), w.y(), w.z()), (10, 2, -3));
    }

    #[test]
    fn test_map_and_zip_map() {
        let a = V3::new([1, 2, 3]);
        let b = V3::new([10, 20, 30]);
        assert_eq!(a.map(|c| c * c), V3::new([1, 4, 9]));
        assert_eq!(a.zip_map(b, |l, r| r - l), V3::new([9, 18, 27]));
    }

    #[test]
    fn test_conversions() {
        let t: V3 = [1, 2, 3].into();
        let arr: [i32; 3] = t.into();
        assert_eq!(arr, [1, 2, 3]);
        assert_eq!(t.as_slice(), &[1, 2, 3]);
        assert_eq!(t.as_ref(), &[1, 2, 3]);

        let collected: Vec<i32> = t.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        let sum: i32 = (&t).into_iter().sum();
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_macro() {
        let t = fixed_tuple![1u32, 2, 3];
        assert_eq!(t, FixedTuple::new([1, 2, 3]));
    }
}
