//! Attribute values as the key-value table stores them, and their mapping to
//! and from JSON.
//!
//! Every stored kind has a JSON rendering, so a record read back from the
//! table can always be returned to the caller.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Number, Value};

use crate::decimal::DecimalText;

pub type Record = BTreeMap<String, StoredValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    String(String),
    /// Exact decimal text, as the table transmits numbers.
    Number(String),
    Bool(bool),
    Null,
    Binary(Vec<u8>),
    List(Vec<StoredValue>),
    Map(Record),
    StringSet(Vec<String>),
    NumberSet(Vec<String>),
    BinarySet(Vec<Vec<u8>>),
}

impl StoredValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(*flag),
            Value::Number(number) => Self::Number(number.to_string()),
            Value::String(text) => Self::String(text.clone()),
            Value::Array(values) => Self::List(values.iter().map(Self::from_json).collect()),
            Value::Object(object) => Self::Map(record_from_json(object)),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::String(text) => Value::String(text.clone()),
            Self::Number(text) => number_to_json(text),
            Self::Bool(flag) => Value::Bool(*flag),
            Self::Null => Value::Null,
            Self::Binary(bytes) => Value::String(STANDARD.encode(bytes)),
            Self::List(values) => Value::Array(values.iter().map(Self::to_json).collect()),
            Self::Map(record) => record_to_json(record),
            Self::StringSet(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
            Self::NumberSet(values) => {
                Value::Array(values.iter().map(|text| number_to_json(text)).collect())
            }
            Self::BinarySet(values) => Value::Array(
                values
                    .iter()
                    .map(|bytes| Value::String(STANDARD.encode(bytes)))
                    .collect(),
            ),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

pub fn record_from_json(object: &Map<String, Value>) -> Record {
    object
        .iter()
        .map(|(name, value)| (name.clone(), StoredValue::from_json(value)))
        .collect()
}

pub fn record_to_json(record: &Record) -> Value {
    Value::Object(
        record
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect(),
    )
}

/// Integral values render as exact JSON integers of any width; everything
/// else renders as a float. Text that is not a finite number is passed
/// through as a string.
fn number_to_json(text: &str) -> Value {
    let Some(decimal) = DecimalText::parse(text) else {
        return Value::String(text.to_string());
    };
    if let Some(number) = decimal
        .to_integer_string()
        .and_then(|digits| digits.parse::<Number>().ok())
    {
        return Value::Number(number);
    }

    text.trim()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(text.to_string()))
}
