//! Strict accessors for loosely typed JSON arrays
//!
//! `swift package dump-package` encodes several values as positional arrays
//! rather than objects. These helpers pull typed values out of such arrays
//! with bounds and type checks, reporting a [`FieldExtractionError`] instead
//! of panicking or coercing. [`null_as_default`] gives known keys the
//! missing-key treatment when the tool prints them as `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::FieldExtractionError;

/// Name of a JSON value's kind, for error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrow the elements of an array payload
pub fn array_payload(payload: &Value) -> Result<&[Value], FieldExtractionError> {
    match payload {
        Value::Array(values) => Ok(values),
        Value::Null => Err(FieldExtractionError::MissingPayload),
        other => Err(FieldExtractionError::NotAnArray {
            found: kind_name(other),
        }),
    }
}

/// Return the string at `index`, failing if the index is out of range or the
/// value there is not a string
pub fn string_at_index(values: &[Value], index: usize) -> Result<&str, FieldExtractionError> {
    let value = values
        .get(index)
        .ok_or(FieldExtractionError::IndexOutOfRange {
            index,
            len: values.len(),
        })?;

    value.as_str().ok_or(FieldExtractionError::NotAString {
        index,
        found: kind_name(value),
    })
}

/// Deserialize a field, treating an explicit `null` like a missing key.
///
/// Use with `#[serde(default, deserialize_with = "...")]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_at_index() {
        let values = vec![json!("Foo"), json!(1), json!(["nested"])];
        assert_eq!(string_at_index(&values, 0), Ok("Foo"));
        assert_eq!(
            string_at_index(&values, 1),
            Err(FieldExtractionError::NotAString {
                index: 1,
                found: "number"
            })
        );
        assert_eq!(
            string_at_index(&values, 2),
            Err(FieldExtractionError::NotAString {
                index: 2,
                found: "array"
            })
        );
        assert_eq!(
            string_at_index(&values, 3),
            Err(FieldExtractionError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_string_at_index_empty() {
        assert_eq!(
            string_at_index(&[], 0),
            Err(FieldExtractionError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_null_element_is_not_a_string() {
        let values = vec![json!(null)];
        assert_eq!(
            string_at_index(&values, 0),
            Err(FieldExtractionError::NotAString {
                index: 0,
                found: "null"
            })
        );
    }

    #[derive(Debug, Default, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn test_null_as_default() {
        let held: Result<Holder, _> = serde_json::from_value(json!({"items": null}));
        assert!(matches!(held, Ok(ref h) if h.items.is_empty()));

        let held: Result<Holder, _> = serde_json::from_value(json!({}));
        assert!(matches!(held, Ok(ref h) if h.items.is_empty()));

        let held: Result<Holder, _> = serde_json::from_value(json!({"items": ["a"]}));
        assert!(matches!(held, Ok(ref h) if h.items == vec!["a".to_string()]));

        let held: Result<Holder, _> = serde_json::from_value(json!({"items": 3}));
        assert!(held.is_err());
    }

    #[test]
    fn test_array_payload() {
        let payload = json!(["a", "b"]);
        assert_eq!(array_payload(&payload).map(<[Value]>::len), Ok(2));
        assert_eq!(
            array_payload(&Value::Null),
            Err(FieldExtractionError::MissingPayload)
        );
        assert_eq!(
            array_payload(&json!({"a": 1})),
            Err(FieldExtractionError::NotAnArray { found: "object" })
        );
        assert_eq!(
            array_payload(&json!("Foo")),
            Err(FieldExtractionError::NotAnArray { found: "string" })
        );
    }
}
