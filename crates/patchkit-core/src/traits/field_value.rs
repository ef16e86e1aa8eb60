use crate::{model::FieldKind, value::Value};
use std::collections::BTreeMap;

///
/// FieldValue
///
/// Conversion boundary between concrete field types and `Value`.
///
/// `from_value` is strict about shape families: no string coercion and no
/// lossy narrowing; `None` means the value does not fit the declared
/// shape. Integer conversions are range-checked and accept either
/// signedness when the magnitude fits, because transports like JSON carry
/// a single integer shape. Declared-kind compatibility in the typed update
/// path is still exact; this leniency only reaches dynamic patches.
///

pub trait FieldValue {
    /// Declared shape of this type in a field table.
    const KIND: &'static FieldKind;

    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>
    where
        Self: Sized;
}

macro_rules! impl_field_value_int {
    ($($type:ty),* $(,)?) => {
        $(
            impl FieldValue for $type {
                const KIND: &'static FieldKind = &FieldKind::Int;

                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Int(int) => Self::try_from(*int).ok(),
                        Value::Uint(uint) => Self::try_from(*uint).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_field_value_uint {
    ($($type:ty),* $(,)?) => {
        $(
            impl FieldValue for $type {
                const KIND: &'static FieldKind = &FieldKind::Uint;

                fn to_value(&self) -> Value {
                    Value::Uint(u64::from(*self))
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Uint(uint) => Self::try_from(*uint).ok(),
                        Value::Int(int) => Self::try_from(*int).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value_int!(i8, i16, i32, i64);
impl_field_value_uint!(u8, u16, u32, u64);

impl FieldValue for bool {
    const KIND: &'static FieldKind = &FieldKind::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    const KIND: &'static FieldKind = &FieldKind::Float;

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    #[expect(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(float) => Some(*float),
            Value::Int(int) => Some(*int as Self),
            Value::Uint(uint) => Some(*uint as Self),
            _ => None,
        }
    }
}

impl FieldValue for f32 {
    const KIND: &'static FieldKind = &FieldKind::Float;

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(float) => Some(*float as Self),
            Value::Int(int) => Some(*int as Self),
            Value::Uint(uint) => Some(*uint as Self),
            _ => None,
        }
    }
}

impl FieldValue for String {
    const KIND: &'static FieldKind = &FieldKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

impl<T> FieldValue for Vec<T>
where
    T: FieldValue,
{
    const KIND: &'static FieldKind = &FieldKind::List(T::KIND);

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<K, V> FieldValue for BTreeMap<K, V>
where
    K: FieldValue + Ord,
    V: FieldValue,
{
    const KIND: &'static FieldKind = &FieldKind::Map {
        key: K::KIND,
        value: V::KIND,
    };

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.to_value(), value.to_value()))
                .collect(),
        )
    }

    /// Duplicate keys are rejected rather than silently collapsed.
    fn from_value(value: &Value) -> Option<Self> {
        let Value::Map(entries) = value else {
            return None;
        };

        let mut map = Self::new();
        for (key, value) in entries {
            let key = K::from_value(key)?;
            let value = V::from_value(value)?;
            if map.insert(key, value).is_some() {
                return None;
            }
        }

        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_conversions_are_range_checked() {
        assert_eq!(i8::from_value(&Value::Int(127)), Some(127));
        assert_eq!(i8::from_value(&Value::Int(128)), None);
        assert_eq!(u8::from_value(&Value::Uint(300)), None);
        assert_eq!(u64::from_value(&Value::Int(-1)), None);
        assert_eq!(i64::from_value(&Value::Uint(u64::MAX)), None);
    }

    #[test]
    fn integers_accept_either_signedness_when_in_range() {
        assert_eq!(u32::from_value(&Value::Int(31)), Some(31));
        assert_eq!(i64::from_value(&Value::Uint(31)), Some(31));
    }

    #[test]
    fn no_cross_family_coercion() {
        assert_eq!(String::from_value(&Value::Int(1)), None);
        assert_eq!(i64::from_value(&Value::Text("1".to_string())), None);
        assert_eq!(i64::from_value(&Value::Float(1.0)), None);
        assert_eq!(bool::from_value(&Value::Null), None);
    }

    #[test]
    fn list_conversion_is_all_or_nothing() {
        let ok = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(Vec::<i64>::from_value(&ok), Some(vec![1, 2]));

        let mixed = Value::List(vec![Value::Int(1), Value::Text("x".to_string())]);
        assert_eq!(Vec::<i64>::from_value(&mixed), None);
    }

    #[test]
    fn map_conversion_rejects_duplicate_keys() {
        let dup = Value::Map(vec![
            (Value::Text("a".to_string()), Value::Int(1)),
            (Value::Text("a".to_string()), Value::Int(2)),
        ]);
        assert_eq!(BTreeMap::<String, i64>::from_value(&dup), None);

        let ok = Value::Map(vec![
            (Value::Text("a".to_string()), Value::Int(1)),
            (Value::Text("b".to_string()), Value::Int(2)),
        ]);
        let map = BTreeMap::<String, i64>::from_value(&ok).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn declared_kinds_nest() {
        assert_eq!(<Vec<Vec<u8>>>::KIND, &FieldKind::List(&FieldKind::List(&FieldKind::Uint)));
        assert_eq!(
            <BTreeMap<String, i64>>::KIND,
            &FieldKind::Map {
                key: &FieldKind::Text,
                value: &FieldKind::Int,
            }
        );
    }
}
