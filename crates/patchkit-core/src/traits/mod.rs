mod field_value;

pub use field_value::FieldValue;

use crate::{model::FieldModel, update::FieldError, value::Value};

///
/// Record
///
/// Capability trait exposing a record's field table plus name-addressed
/// access. Implement via `#[derive(Record)]` on a named-field struct; the
/// table replaces runtime reflection for every generic field operation.
///
/// ## Contract
/// - `FIELDS` lists every field in declaration order.
/// - `get_value` returns `Some` for every name in `FIELDS`, with
///   `Value::Null` standing in for an absent optional.
/// - `set_value` converts the whole value before writing; a failed
///   conversion leaves the record untouched.
///

pub trait Record {
    /// Field table in declaration order.
    const FIELDS: &'static [FieldModel];

    /// Current value of `field`; `None` for names outside the table.
    fn get_value(&self, field: &str) -> Option<Value>;

    /// Replace `field` with `value` under strict conversion rules.
    /// Null clears an optional field and is rejected by a plain one.
    fn set_value(&mut self, field: &str, value: Value) -> Result<(), FieldError>;

    /// Field-table entry for `field` (byte-exact name match).
    #[must_use]
    fn field(name: &str) -> Option<&'static FieldModel>
    where
        Self: Sized,
    {
        Self::FIELDS.iter().find(|model| model.name == name)
    }
}
