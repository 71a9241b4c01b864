//! Lenient deserializers for catalog payload fields.
//!
//! The catalog backend emits switches as `0`/`1` integers, booleans or
//! strings depending on the doctype field, and quantities as floats or
//! numeric strings. These helpers are meant for `#[serde(deserialize_with)]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value the way the storefront scripts test a field.
///
/// `null`, `false`, `0`, `""`, `"0"` and `"false"` are off; everything else is on.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Deserialize a feature flag from any JSON scalar.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(truthy).unwrap_or(false))
}

/// Deserialize an optional quantity from a number or numeric string.
///
/// Unparseable values read as absent rather than failing the whole payload.
pub fn quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(Value::Bool(b)) => Some(if b { 1.0 } else { 0.0 }),
        _ => None,
    })
}

/// Deserialize an optional string, accepting numbers as their decimal text.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "flag")]
        on: bool,
        #[serde(default, deserialize_with = "quantity")]
        qty: Option<f64>,
        #[serde(default, deserialize_with = "text")]
        label: Option<String>,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flag_accepts_ints_and_bools() {
        assert!(probe(json!({ "on": 1 })).on);
        assert!(probe(json!({ "on": true })).on);
        assert!(!probe(json!({ "on": 0 })).on);
        assert!(!probe(json!({ "on": null })).on);
        assert!(!probe(json!({})).on);
    }

    #[test]
    fn test_flag_strings() {
        assert!(probe(json!({ "on": "yes" })).on);
        assert!(!probe(json!({ "on": "0" })).on);
        assert!(!probe(json!({ "on": "" })).on);
        assert!(!probe(json!({ "on": "False" })).on);
    }

    #[test]
    fn test_quantity() {
        assert_eq!(probe(json!({ "qty": 3 })).qty, Some(3.0));
        assert_eq!(probe(json!({ "qty": "2.5" })).qty, Some(2.5));
        assert_eq!(probe(json!({ "qty": "lots" })).qty, None);
        assert_eq!(probe(json!({})).qty, None);
    }

    #[test]
    fn test_text_accepts_numbers() {
        assert_eq!(probe(json!({ "label": 15 })).label.as_deref(), Some("15"));
        assert_eq!(probe(json!({ "label": "10%" })).label.as_deref(), Some("10%"));
        assert_eq!(probe(json!({ "label": null })).label, None);
    }
}
