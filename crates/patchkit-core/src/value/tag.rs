use crate::value::Value;
use serde::{Deserialize, Serialize};

///
/// ValueTag
///
/// Flat runtime shape tag for `Value` variants, used by diagnostics and
/// dynamic-patch descriptors. Composite tags carry no element shape; the
/// declared side of a comparison uses `FieldKind` instead.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ValueTag {
    Bool,
    Bytes,
    Float,
    Int,
    List,
    Map,
    Null,
    Text,
    Uint,
}

impl ValueTag {
    /// Stable human-readable value shape label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Bytes => "Bytes",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::List => "List",
            Self::Map => "Map",
            Self::Null => "Null",
            Self::Text => "Text",
            Self::Uint => "Uint",
        }
    }
}

impl std::fmt::Display for ValueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Runtime shape tag of a value.
#[must_use]
pub(super) const fn runtime_tag(value: &Value) -> ValueTag {
    match value {
        Value::Bool(_) => ValueTag::Bool,
        Value::Bytes(_) => ValueTag::Bytes,
        Value::Float(_) => ValueTag::Float,
        Value::Int(_) => ValueTag::Int,
        Value::List(_) => ValueTag::List,
        Value::Map(_) => ValueTag::Map,
        Value::Null => ValueTag::Null,
        Value::Text(_) => ValueTag::Text,
        Value::Uint(_) => ValueTag::Uint,
    }
}
