//! Value types for LENS properties.
//!
//! Values are the atomic data held in an element's property record.
//! LENS supports scalar variants (Bool, Number, Text), a List variant for
//! multi-choice properties, and a Json variant for structured documents.
//!
//! Extension blocks persist every value as text; `parse_as` and
//! `to_extension_text` are the two halves of that codec.

use crate::PropertyKind;
use std::fmt;
use thiserror::Error;

/// A value that can be stored in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value (64-bit float).
    Number(f64),
    /// UTF-8 text. Also carries single-choice and date/time values.
    Text(String),
    /// List of values (multi-choice selections).
    List(Vec<Value>),
    /// Structured JSON document.
    Json(serde_json::Value),
}

/// Failure to parse persisted text into a declared kind.
///
/// Non-fatal by policy: callers fall back to the kind's zero value and
/// keep loading the element.
#[derive(Debug, Clone, Error)]
#[error("cannot parse {text:?} as {kind}")]
pub struct CoerceError {
    pub kind: PropertyKind,
    pub text: String,
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number if this is a Number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as slice if this is a List value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get as JSON document if this is a Json value.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Json(doc) => Some(doc),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::List(_) => "List",
            Value::Json(_) => "Json",
        }
    }

    /// Boolean coercion for condition expressions.
    ///
    /// Falsy: Null, false, 0, empty text, empty list, JSON null.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Text(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Json(doc) => !doc.is_null(),
        }
    }

    /// Returns true if this value counts as absent for `required` checks.
    ///
    /// Null, empty text, empty list and JSON null are absent; `false` and
    /// `0` are present values.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Json(doc) => doc.is_null(),
            _ => false,
        }
    }

    /// The zero value for a property kind: `''`, `0`, `false`, empty list,
    /// empty object.
    pub fn zero(kind: PropertyKind) -> Value {
        match kind {
            PropertyKind::ShortText
            | PropertyKind::LongText
            | PropertyKind::SingleChoice
            | PropertyKind::DateTime => Value::Text(String::new()),
            PropertyKind::Number => Value::Number(0.0),
            PropertyKind::Boolean => Value::Bool(false),
            PropertyKind::MultiChoice => Value::List(Vec::new()),
            PropertyKind::Json => Value::Json(serde_json::Value::Object(serde_json::Map::new())),
        }
    }

    /// Parse persisted extension text into a value of the given kind.
    ///
    /// Booleans accept exactly "true"/"false", numbers decimal text,
    /// multi-choice a comma-joined list, JSON a serialized document.
    /// Textual kinds take the text as-is.
    pub fn parse_as(kind: PropertyKind, text: &str) -> Result<Value, CoerceError> {
        match kind {
            PropertyKind::ShortText
            | PropertyKind::LongText
            | PropertyKind::SingleChoice
            | PropertyKind::DateTime => Ok(Value::Text(text.to_string())),
            PropertyKind::Boolean => match text.trim() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(CoerceError {
                    kind,
                    text: text.to_string(),
                }),
            },
            PropertyKind::Number => text.trim().parse::<f64>().map(Value::Number).map_err(|_| {
                CoerceError {
                    kind,
                    text: text.to_string(),
                }
            }),
            PropertyKind::MultiChoice => {
                if text.is_empty() {
                    return Ok(Value::List(Vec::new()));
                }
                let items = text
                    .split(',')
                    .map(|part| Value::Text(part.trim().to_string()))
                    .collect();
                Ok(Value::List(items))
            }
            PropertyKind::Json => serde_json::from_str(text).map(Value::Json).map_err(|_| {
                CoerceError {
                    kind,
                    text: text.to_string(),
                }
            }),
        }
    }

    /// Encode this value as extension text for the given kind.
    ///
    /// The inverse of `parse_as` for well-formed values.
    pub fn to_extension_text(&self, kind: PropertyKind) -> String {
        match (kind, self) {
            (PropertyKind::Boolean, Value::Bool(b)) => b.to_string(),
            (PropertyKind::Number, Value::Number(n)) => format_number(*n),
            (PropertyKind::MultiChoice, Value::List(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Text(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            (PropertyKind::Json, Value::Json(doc)) => {
                serde_json::to_string(doc).unwrap_or_else(|_| "null".to_string())
            }
            (_, Value::Text(s)) => s.clone(),
            (_, Value::Null) => String::new(),
            (_, other) => other.to_string(),
        }
    }
}

/// Format a number without a trailing `.0` for whole values, so that
/// extension text round-trips cleanly.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Json(doc) => write!(f, "{}", doc),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(doc: serde_json::Value) -> Self {
        Value::Json(doc)
    }
}

/// Type alias for property storage.
pub type PropertyMap = std::collections::HashMap<String, Value>;

/// Helper macro to create property maps.
#[macro_export]
macro_rules! props {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
