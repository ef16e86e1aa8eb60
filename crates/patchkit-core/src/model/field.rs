use crate::value::ValueTag;
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// Declared type shape of a record field.
/// Aligned with `Value` variants; optionality is carried by `FieldModel`,
/// never by the kind, so `Option<u64>` and `u64` share `FieldKind::Uint`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Bool,
    Bytes,
    Float,
    Int,
    List(&'static FieldKind),
    Map {
        key: &'static FieldKind,
        value: &'static FieldKind,
    },
    Text,
    Uint,
}

impl FieldKind {
    /// Top-level runtime shape this kind materializes as.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Bool => ValueTag::Bool,
            Self::Bytes => ValueTag::Bytes,
            Self::Float => ValueTag::Float,
            Self::Int => ValueTag::Int,
            Self::List(_) => ValueTag::List,
            Self::Map { .. } => ValueTag::Map,
            Self::Text => ValueTag::Text,
            Self::Uint => ValueTag::Uint,
        }
    }
}

///
/// FieldModel
///
/// Static field-table entry, generated once per record type by
/// `#[derive(Record)]`. Tables preserve declaration order; the update
/// engine iterates and matches against them instead of reflecting.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldModel {
    /// Field name as spelled in the record declaration.
    pub name: &'static str,
    /// Declared shape; for optional fields, the shape of the wrapped value.
    pub kind: &'static FieldKind,
    /// Whether the field carries an optional wrapper with an absence state.
    pub optional: bool,
}

impl FieldModel {
    /// Runtime descriptor for this table entry.
    #[must_use]
    pub fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name.to_string(),
            tag: self.kind.tag(),
            optional: self.optional,
        }
    }
}

///
/// FieldDescriptor
///
/// Runtime descriptor for one patch field, as stored in the classification
/// collections and handed to skip policies. Typed patches describe their
/// declared shape; dynamic patch fields carry the shape of the value they
/// arrived with and always count as optional-wrapped.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub tag: ValueTag,
    pub optional: bool,
}
