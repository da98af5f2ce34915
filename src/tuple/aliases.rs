// ============================================================================
// Type Aliases
// Named arities and the per-scalar vector family
// ============================================================================

use super::FixedTuple;
use std::ffi::c_ulong;

pub type Vector2<T> = FixedTuple<T, 2>;
pub type Vector3<T> = FixedTuple<T, 3>;
pub type Vector4<T> = FixedTuple<T, 4>;
pub type Vector5<T> = FixedTuple<T, 5>;
pub type Vector6<T> = FixedTuple<T, 6>;
pub type Vector7<T> = FixedTuple<T, 7>;
pub type Vector8<T> = FixedTuple<T, 8>;
pub type Vector9<T> = FixedTuple<T, 9>;
pub type Vector10<T> = FixedTuple<T, 10>;

macro_rules! scalar_family {
    ($(#[$doc:meta])* $t:ty => [$v2:ident, $v3:ident, $v4:ident, $v5:ident, $v6:ident, $v7:ident, $v8:ident, $v9:ident, $v10:ident]) => {
        $(#[$doc])* pub type $v2 = Vector2<$t>;
        $(#[$doc])* pub type $v3 = Vector3<$t>;
        $(#[$doc])* pub type $v4 = Vector4<$t>;
        $(#[$doc])* pub type $v5 = Vector5<$t>;
        $(#[$doc])* pub type $v6 = Vector6<$t>;
        $(#[$doc])* pub type $v7 = Vector7<$t>;
        $(#[$doc])* pub type $v8 = Vector8<$t>;
        $(#[$doc])* pub type $v9 = Vector9<$t>;
        $(#[$doc])* pub type $v10 = Vector10<$t>;
    };
}

scalar_family!(i8 => [Vector2i8, Vector3i8, Vector4i8, Vector5i8, Vector6i8, Vector7i8, Vector8i8, Vector9i8, Vector10i8]);
scalar_family!(i16 => [Vector2i16, Vector3i16, Vector4i16, Vector5i16, Vector6i16, Vector7i16, Vector8i16, Vector9i16, Vector10i16]);
scalar_family!(i32 => [Vector2i32, Vector3i32, Vector4i32, Vector5i32, Vector6i32, Vector7i32, Vector8i32, Vector9i32, Vector10i32]);
scalar_family!(i64 => [Vector2i64, Vector3i64, Vector4i64, Vector5i64, Vector6i64, Vector7i64, Vector8i64, Vector9i64, Vector10i64]);
scalar_family!(u8 => [Vector2u8, Vector3u8, Vector4u8, Vector5u8, Vector6u8, Vector7u8, Vector8u8, Vector9u8, Vector10u8]);
scalar_family!(u16 => [Vector2u16, Vector3u16, Vector4u16, Vector5u16, Vector6u16, Vector7u16, Vector8u16, Vector9u16, Vector10u16]);
scalar_family!(u32 => [Vector2u32, Vector3u32, Vector4u32, Vector5u32, Vector6u32, Vector7u32, Vector8u32, Vector9u32, Vector10u32]);
scalar_family!(u64 => [Vector2u64, Vector3u64, Vector4u64, Vector5u64, Vector6u64, Vector7u64, Vector8u64, Vector9u64, Vector10u64]);
scalar_family!(f32 => [Vector2f, Vector3f, Vector4f, Vector5f, Vector6f, Vector7f, Vector8f, Vector9f, Vector10f]);
scalar_family!(f64 => [Vector2d, Vector3d, Vector4d, Vector5d, Vector6d, Vector7d, Vector8d, Vector9d, Vector10d]);
scalar_family!(
    /// Platform `unsigned long` components (32 bits on Windows, 64 on LP64 targets).
    c_ulong => [Vector2ul, Vector3ul, Vector4ul, Vector5ul, Vector6ul, Vector7ul, Vector8ul, Vector9ul, Vector10ul]
);
scalar_family!(
    /// `long double` components; an 8-byte IEEE double on the targets the family was written for.
    f64 => [Vector2ld, Vector3ld, Vector4ld, Vector5ld, Vector6ld, Vector7ld, Vector8ld, Vector9ld, Vector10ld]
);
scalar_family!(
    /// Extended-precision decimal components.
    rust_decimal::Decimal => [Vector2dec, Vector3dec, Vector4dec, Vector5dec, Vector6dec, Vector7dec, Vector8dec, Vector9dec, Vector10dec]
);
