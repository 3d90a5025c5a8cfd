//! JSON request bodies
//!
//! Handlers read a body as a [`serde_json::Value`] and only then pick fields
//! out of it, so anything other than a JSON object is refused before a
//! payload exists. Ids are read the way PostgreSQL would coerce them into an
//! `INTEGER` column: integers, integral floats and numeric strings.

use std::fmt;

use serde_json::{Map, Value};

use super::ValidationError;

/// Request body that cannot become a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyError {
    /// Body parsed as JSON but is not an object
    NotAnObject { found: &'static str },

    /// Field holds a value that is not a 32-bit integer
    NotAnInteger { field: &'static str, value: String },

    /// Field holds a value that is not a string
    NotAString { field: &'static str, value: String },

    /// Required field missing or blank
    Invalid(ValidationError),
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { found } => {
                write!(f, "request body must be a JSON object, got {}", found)
            }
            Self::NotAnInteger { field, value } => {
                write!(f, "invalid integer value {} for {}", value, field)
            }
            Self::NotAString { field, value } => {
                write!(f, "invalid string value {} for {}", value, field)
            }
            Self::Invalid(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for BodyError {}

impl From<ValidationError> for BodyError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

/// Top-level JSON object of a request body
#[derive(Debug, Clone, Default)]
pub struct JsonBody(Map<String, Value>);

impl JsonBody {
    pub fn from_value(value: Value) -> Result<Self, BodyError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(BodyError::NotAnObject {
                found: kind(&other),
            }),
        }
    }

    /// Remove a field; JSON `null` reads as absent.
    pub fn take(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field).filter(|v| !v.is_null())
    }

    pub fn take_string(&mut self, field: &'static str) -> Result<Option<String>, BodyError> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(BodyError::NotAString {
                field,
                value: other.to_string(),
            }),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `false`, zero, `""`, `[]` and `{}` count as not supplied.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Read an id field as `i32`.
pub fn coerce_id(field: &'static str, value: &Value) -> Result<i32, BodyError> {
    let wide = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    wide.and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| BodyError::NotAnInteger {
            field,
            value: value.to_string(),
        })
}
