mod tag;

#[cfg(feature = "json")]
mod json;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// re-exports
pub use tag::ValueTag;

///
/// Value
///
/// The runtime currency for field contents: every record field crosses the
/// generic get/set boundary as one of these variants.
///
/// Null → the absence state of an optional field; never the value of a
///        non-optional field.
/// Map  → ordered key/value pairs. A text-keyed map doubles as a dynamic
///        patch record (see `Updater::update_value`).
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Bytes(Vec<u8>),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    /// Runtime shape tag of this value.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::runtime_tag(self)
    }

    /// True for the absence state.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Build a text-keyed map in entry order, the shape `update_value`
    /// accepts as a dynamic patch record.
    #[must_use]
    pub fn record<N, I>(entries: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Self)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(name, value)| (Self::Text(name.into()), value))
                .collect(),
        )
    }
}

macro_rules! impl_value_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_value_from! {
    bool => Bool,
    f64 => Float,
    i32 => Int,
    i64 => Int,
    u32 => Uint,
    u64 => Uint,
    String => Text,
    &str => Text,
}
