use crate::value::Value;
use serde_json::Value as JsonValue;

impl From<JsonValue> for Value {
    /// Decode a JSON document into the runtime value model. Objects become
    /// text-keyed maps in the decoder's entry order (sorted by key under
    /// serde_json's default map), so a decoded PATCH body feeds
    /// `Updater::update_value` directly. Numbers keep their narrowest JSON
    /// representation: i64, then u64, then f64.
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(flag) => Self::Bool(flag),
            JsonValue::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else if let Some(uint) = number.as_u64() {
                    Self::Uint(uint)
                } else {
                    Self::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(text) => Self::Text(text),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (Self::Text(key), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for JsonValue {
    /// Encode the runtime value model as JSON for export and diagnostics.
    /// Non-finite floats have no JSON representation and encode as null.
    /// Maps with non-text keys encode as arrays of `[key, value]` pairs.
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(flag) => Self::Bool(flag),
            Value::Bytes(bytes) => Self::Array(bytes.into_iter().map(Self::from).collect()),
            Value::Float(float) => serde_json::Number::from_f64(float).map_or(Self::Null, Self::Number),
            Value::Int(int) => Self::from(int),
            Value::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Map(entries) => {
                let text_keyed = entries
                    .iter()
                    .all(|(key, _)| matches!(key, Value::Text(_)));

                if text_keyed {
                    Self::Object(
                        entries
                            .into_iter()
                            .filter_map(|(key, value)| match key {
                                Value::Text(name) => Some((name, Self::from(value))),
                                _ => None,
                            })
                            .collect(),
                    )
                } else {
                    Self::Array(
                        entries
                            .into_iter()
                            .map(|(key, value)| Self::Array(vec![Self::from(key), Self::from(value)]))
                            .collect(),
                    )
                }
            }
            Value::Null => Self::Null,
            Value::Text(text) => Self::String(text),
            Value::Uint(uint) => Self::from(uint),
        }
    }
}
