// ============================================================================
// Tuple Module
// Generic fixed-arity numeric tuple and its operation families
// ============================================================================
//
// This module provides:
// - FixedTuple<T, N>: the one generic type behind every VectorN alias
// - Component-wise operators, increment/decrement, all-components relations
// - Checked arithmetic, text formatting, optional serde support
//
// Design principles:
// - Storage is a plain `[T; N]`; field names exist only in formatting
// - Strict indexing by default, legacy clamp on request
// - Relations are named methods, never a PartialOrd/Ord

mod aliases;
mod checked;
mod display;
mod fixed_tuple;
mod ops;
mod relation;
mod step;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod properties;

pub use aliases::*;
pub use display::Formatted;
pub use fixed_tuple::FixedTuple;
