pub mod field;

pub use field::{FieldDescriptor, FieldKind, FieldModel};
