use crate::{model::FieldKind, traits::FieldValue, value::Value};
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

///
/// Bytes
///
/// Owned byte payload with its own field shape. `Vec<u8>` declares as a
/// list of unsigned integers; wrap it in `Bytes` for blob semantics and a
/// compact value representation.
///

#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl FieldValue for Bytes {
    const KIND: &'static FieldKind = &FieldKind::Bytes;

    fn to_value(&self) -> Value {
        Value::Bytes(self.0.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bytes(bytes) => Some(Self(bytes.clone())),
            _ => None,
        }
    }
}
