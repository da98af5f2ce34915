// ============================================================================
// Serde Support
// A tuple serializes as a fixed-length sequence of its components
// ============================================================================

use super::FixedTuple;
use crate::numeric::Scalar;
use arrayvec::ArrayVec;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Scalar + Serialize, const N: usize> Serialize for FixedTuple<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(N)?;
        for component in self.iter() {
            seq.serialize_element(component)?;
        }
        seq.end()
    }
}

struct TupleVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for TupleVisitor<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    type Value = FixedTuple<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} components", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = ArrayVec::<T, N>::new();
        while let Some(value) = seq.next_element::<T>()? {
            if values.try_push(value).is_err() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
        }

        values
            .into_inner()
            .map(FixedTuple::new)
            .map_err(|partial| de::Error::invalid_length(partial.len(), &self))
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedTuple<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, TupleVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldNaming, FormatConfig, IndexPolicy};

    #[test]
    fn test_serialize_as_sequence() {
        let t = FixedTuple::new([1i32, -2, 3]);
        assert_eq!(serde_json::to_string(&t).unwrap(), "[1,-2,3]");
    }

    #[test]
    fn test_deserialize_sequence() {
        let t: FixedTuple<u64, 4> = serde_json::from_str("[4, 3, 2, 1]").unwrap();
        assert_eq!(t, FixedTuple::new([4, 3, 2, 1]));

        let f: FixedTuple<f64, 2> = serde_json::from_str("[0.5, 1e3]").unwrap();
        assert_eq!(f, FixedTuple::xy(0.5, 1000.0));
    }

    #[test]
    fn test_deserialize_wrong_length() {
        let short: Result<FixedTuple<i32, 3>, _> = serde_json::from_str("[1, 2]");
        assert!(short.is_err());

        let long: Result<FixedTuple<i32, 2>, _> = serde_json::from_str("[1, 2, 3]");
        assert!(long.is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = FormatConfig::indexed().with_separator(" ; ");
        let json = serde_json::to_string(&config).unwrap();
        let back: FormatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.naming, FieldNaming::Indexed);

        let policy: IndexPolicy = serde_json::from_str("\"LegacyClamp\"").unwrap();
        assert_eq!(policy, IndexPolicy::LegacyClamp);
    }
}
