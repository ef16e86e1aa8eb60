use crate::value::{Value, ValueTag};

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[test]
fn tags_follow_variants() {
    assert_eq!(Value::Bool(true).tag(), ValueTag::Bool);
    assert_eq!(Value::Bytes(vec![1]).tag(), ValueTag::Bytes);
    assert_eq!(Value::Float(1.5).tag(), ValueTag::Float);
    assert_eq!(Value::Int(-1).tag(), ValueTag::Int);
    assert_eq!(Value::List(vec![]).tag(), ValueTag::List);
    assert_eq!(Value::Map(vec![]).tag(), ValueTag::Map);
    assert_eq!(Value::Null.tag(), ValueTag::Null);
    assert_eq!(v_txt("x").tag(), ValueTag::Text);
    assert_eq!(Value::Uint(1).tag(), ValueTag::Uint);
}

#[test]
fn null_detection() {
    assert!(Value::Null.is_null());
    assert!(!Value::Int(0).is_null());
    assert!(!v_txt("").is_null());
}

#[test]
fn record_builder_keeps_entry_order() {
    let record = Value::record([("b", Value::Int(2)), ("a", Value::Int(1))]);

    let Value::Map(entries) = record else {
        panic!("record() must build a map");
    };
    assert_eq!(entries[0].0, v_txt("b"));
    assert_eq!(entries[1].0, v_txt("a"));
}

#[test]
fn from_impls_pick_the_matching_variant() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(7u64), Value::Uint(7));
    assert_eq!(Value::from("x"), v_txt("x"));
}

#[cfg(feature = "json")]
mod json {
    use super::v_txt;
    use crate::value::Value;
    use serde_json::{Value as JsonValue, json};

    #[test]
    fn decodes_objects_as_text_keyed_maps() {
        let decoded = Value::from(json!({"name": "x", "age": 31, "gone": null}));

        let Value::Map(entries) = decoded else {
            panic!("object must decode to a map");
        };
        // serde_json's default map iterates sorted by key
        assert_eq!(entries[0], (v_txt("age"), Value::Int(31)));
        assert_eq!(entries[1], (v_txt("gone"), Value::Null));
        assert_eq!(entries[2], (v_txt("name"), v_txt("x")));
    }

    #[test]
    fn numbers_keep_their_narrowest_shape() {
        assert_eq!(Value::from(json!(-1)), Value::Int(-1));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Uint(u64::MAX));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
    }

    #[test]
    fn encodes_back_to_json() {
        let value = Value::record([
            ("flag", Value::Bool(true)),
            ("items", Value::List(vec![Value::Int(1), Value::Int(2)])),
        ]);

        assert_eq!(
            JsonValue::from(value),
            json!({"flag": true, "items": [1, 2]})
        );
    }

    #[test]
    fn non_finite_floats_encode_as_null() {
        assert_eq!(JsonValue::from(Value::Float(f64::NAN)), JsonValue::Null);
    }
}
