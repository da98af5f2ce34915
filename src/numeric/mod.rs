// ============================================================================
// Numeric Module
// Scalar component types and the error taxonomy for tuple arithmetic
// ============================================================================
//
// This module provides:
// - Scalar: the component bound (native ops plus checked counterparts)
// - ArithmeticError: per-scalar checked arithmetic faults
// - TupleError: errors surfaced by fallible tuple operations
//
// Design principles:
// - Native operators keep the scalar's own semantics (traps, wrapping, IEEE 754)
// - Checked operations return Result and never panic

mod errors;
mod scalar;

pub use errors::{ArithmeticError, NumericResult, TupleError, TupleResult};
pub use scalar::Scalar;
