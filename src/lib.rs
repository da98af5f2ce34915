// ============================================================================
// Fixed Tuple Library
// Generic fixed-arity numeric tuples with component-wise semantics
// ============================================================================

//! # Fixed Tuple
//!
//! One generic type, [`FixedTuple<T, N>`](FixedTuple), for N-component numeric
//! records of a shared scalar type.
//!
//! ## Features
//!
//! - **Component-wise arithmetic** against tuples and broadcast scalars,
//!   with native (`+`, `/=`, ...) and checked (`checked_add`, ...) forms
//! - **All-components relations** (`all_lt`, `all_ge`, ...), a documented
//!   partial order rather than a `PartialOrd` impl
//! - **Strict indexing** by default, with the legacy "alias component 0"
//!   behaviour available through [`IndexPolicy::LegacyClamp`]
//! - **Vector family aliases** `Vector2`..`Vector10` per scalar type
//!   (`Vector3i32`, `Vector4u64`, `Vector2ld`, ...)
//!
//! ## Example
//!
//! ```rust
//! use fixed_tuple::prelude::*;
//!
//! let a = Vector3i32::new([1, 2, 3]);
//! let b = Vector3i32::new([3, 2, 1]);
//!
//! assert_eq!(a + b, Vector3i32::splat(4));
//! assert!(!a.all_lt(&b)); // x is lower but z is higher
//! assert_eq!(a.to_string(), "x: 1 | y: 2 | z: 3");
//!
//! let mut legacy = Vector2u32::xy(1, 2);
//! assert_eq!(*legacy.at_clamped(5), 1);
//! assert!(legacy.at(5).is_err());
//! ```

pub mod config;
pub mod numeric;
pub mod tuple;

#[cfg(feature = "logging")]
pub mod logging;

pub use config::{FieldNaming, FormatConfig, IndexPolicy};
pub use numeric::{ArithmeticError, NumericResult, Scalar, TupleError, TupleResult};
pub use tuple::FixedTuple;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{FieldNaming, FormatConfig, IndexPolicy};
    pub use crate::fixed_tuple;
    pub use crate::numeric::{ArithmeticError, Scalar, TupleError, TupleResult};
    pub use crate::tuple::*;
}
