//! Serde support for values.
//!
//! `Value` deserializes from any self-describing format: unit and missing
//! options become `null`, sequences become arrays and maps become ordinary
//! objects whose keys follow the usual key canonicalisation.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use super::{Key, Object, Value};

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Value, E> {
        Ok(Value::BigInt(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Value::from(elements))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut builder = Object::builder();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            builder = builder.property(Key::from(key), value);
        }
        Ok(Value::from(builder.build()))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{is_array_of, is_like, is_number, is_record, is_string, Guard, GuardExt, Shape};

    #[test]
    fn test_json_primitives() {
        assert_eq!(serde_json::from_str::<Value>("null").unwrap(), Value::Null);
        assert_eq!(serde_json::from_str::<Value>("true").unwrap(), Value::from(true));
        assert_eq!(serde_json::from_str::<Value>("-3").unwrap(), Value::from(-3));
        assert_eq!(serde_json::from_str::<Value>("1.5").unwrap(), Value::from(1.5));
        assert_eq!(serde_json::from_str::<Value>("\"x\"").unwrap(), Value::from("x"));
    }

    #[test]
    fn test_json_document_is_classified() {
        let value: Value =
            serde_json::from_str(r#"{"name": "ada", "scores": [1, 2, 3], "0": null}"#).unwrap();

        assert!(is_record().check(&value));
        assert!(value.has_own(&Key::Index(0)));

        let guard = is_like(
            Shape::new()
                .field("name", is_string())
                .field("scores", is_array_of(is_number())),
        );
        assert!(guard.check(&value));
        assert!(!guard.and(|v: &Value| v.has_own(&Key::from("email"))).check(&value));
    }

    #[test]
    fn test_value_inside_derived_struct() {
        #[derive(serde::Deserialize)]
        struct Envelope {
            kind: String,
            payload: Value,
        }

        let envelope: Envelope =
            serde_json::from_str(r#"{"kind": "point", "payload": {"x": 1, "y": 2}}"#).unwrap();
        assert_eq!(envelope.kind, "point");
        let point = is_like(Shape::new().field("x", is_number()).field("y", is_number()));
        assert!(point.check(&envelope.payload));
    }
}
