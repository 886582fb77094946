//! Decoding criteria from untyped JSON.
//!
//! JSON input follows the loose shape callers usually assemble by hand:
//!
//! ```text
//! null            -> Empty
//! "fragment"      -> Leaf
//! ["OR", a, b]    -> Group; a leading "AND"/"OR" string is the operator
//! {"k": v, ...}   -> Record; an "operator" key selects AND/OR
//! ```
//!
//! Decoding is total. Shapes with no meaning at a given position (a number
//! where a criteria node is expected, an object as a record field value)
//! decode to nothing rather than failing. Object keys keep document order.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::criteria::{Criteria, Group, Record};
use crate::error::Result;
use crate::op::Operator;
use crate::serializer::serialize;
use crate::value::{FieldValue, Number, Scalar};

impl Criteria {
    /// Decodes a criteria tree from a JSON value.
    ///
    /// # Example
    ///
    /// ```
    /// use criteria_sql::{serialize, Criteria};
    /// use serde_json::json;
    ///
    /// let criteria = Criteria::from_json(&json!([
    ///     "OR",
    ///     ["a > 0", "b > 0"],
    ///     {"code": ["1", "2"]},
    /// ]));
    ///
    /// assert_eq!(
    ///     serialize(&criteria),
    ///     "(((a > 0) AND (b > 0)) OR (((code in ('1', '2')))))"
    /// );
    /// ```
    pub fn from_json(value: &Value) -> Criteria {
        match value {
            Value::Null => Criteria::Empty,
            Value::String(fragment) => Criteria::Leaf(fragment.clone()),
            Value::Array(items) => Criteria::Group(group_from_json(items)),
            Value::Object(map) => {
                let mut record = Record::new();
                for (key, value) in map {
                    record.insert(key.clone(), field_from_json(key, value));
                }
                Criteria::Record(record)
            }
            Value::Bool(_) | Value::Number(_) => {
                tracing::debug!(value = %value, "ignoring non-criteria JSON value");
                Criteria::Empty
            }
        }
    }
}

fn group_from_json(items: &[Value]) -> Group {
    let (operator, rest) = match items.split_first() {
        Some((Value::String(token), rest)) => match Operator::from_token(token) {
            Some(operator) => (Some(operator), rest),
            None => (None, items),
        },
        _ => (None, items),
    };
    Group {
        operator,
        items: rest.iter().map(Criteria::from_json).collect(),
    }
}

fn field_from_json(key: &str, value: &Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Array(items) => FieldValue::List(
            items
                .iter()
                .filter_map(|item| {
                    let scalar = scalar_from_json(item);
                    if scalar.is_none() {
                        tracing::debug!(field = key, "dropping non-scalar list element");
                    }
                    scalar
                })
                .collect(),
        ),
        Value::Object(_) => {
            tracing::debug!(field = key, "nested objects are not supported as field values");
            FieldValue::Null
        }
        scalar => scalar_from_json(scalar).map_or(FieldValue::Null, FieldValue::Scalar),
    }
}

fn scalar_from_json(value: &Value) -> Option<Scalar> {
    match value {
        Value::String(s) => Some(Scalar::String(s.clone())),
        Value::Bool(b) => Some(Scalar::Bool(*b)),
        Value::Number(n) => number_from_json(n).map(Scalar::Number),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn number_from_json(n: &serde_json::Number) -> Option<Number> {
    if let Some(i) = n.as_i64() {
        Some(Number::I64(i))
    } else if let Some(u) = n.as_u64() {
        Some(Number::U64(u))
    } else {
        n.as_f64().map(Number::F64)
    }
}

impl From<Value> for Criteria {
    fn from(value: Value) -> Self {
        Criteria::from_json(&value)
    }
}

impl From<&Value> for Criteria {
    fn from(value: &Value) -> Self {
        Criteria::from_json(value)
    }
}

impl<'de> Deserialize<'de> for Criteria {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Criteria::from_json(&value))
    }
}

/// Parses JSON text and renders it.
///
/// Fails only if `text` is not valid JSON.
///
/// # Example
///
/// ```
/// use criteria_sql::serialize_json;
///
/// let sql = serialize_json(r#"{"operator": "OR", "x": ["1", "2"]}"#).unwrap();
/// assert_eq!(sql, "((x in ('1', '2')))");
///
/// assert!(serialize_json("[unterminated").is_err());
/// ```
pub fn serialize_json(text: &str) -> Result<String> {
    let criteria: Criteria = serde_json::from_str(text)?;
    Ok(serialize(&criteria))
}
