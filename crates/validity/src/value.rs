//! Field kinds and type coercion
//!
//! Raw input arrives as [`serde_json::Value`]. Before any rule runs, the
//! value is coerced into the field's declared kind. Coercion failure is a
//! validation outcome (`"Int"` / `"Float"`), not an error.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::SchemaError;

// ============================================================================
// FIELD KIND
// ============================================================================

/// The declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldKind {
    /// Signed 64-bit integer.
    Int,
    /// 64-bit float.
    Float,
    /// Free text.
    Text,
    /// Text checked by domain rules (bank account, company ID, personal ID, dates).
    Special,
}

impl FieldKind {
    /// Canonical name, as used in messages and schema documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Text => "String",
            Self::Special => "Special",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "string" | "text" => Ok(Self::Text),
            "special" => Ok(Self::Special),
            _ => Err(SchemaError::InvalidKind { name: s.to_owned() }),
        }
    }
}

impl TryFrom<String> for FieldKind {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_owned()
    }
}

// ============================================================================
// TYPED VALUE
// ============================================================================

/// A raw value after coercion to its field's kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl TypedValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

// ============================================================================
// COERCION
// ============================================================================

/// Coercion to a numeric kind failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionFailure {
    Int,
    Float,
}

impl CoercionFailure {
    /// The failure code recorded in results.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Float => "Float",
        }
    }
}

/// The text form of a raw value: strings verbatim, anything else as JSON.
pub fn text_form(raw: &Value) -> Cow<'_, str> {
    match raw {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Parses a raw value as a base-10 `i64`.
///
/// JSON floats with no fractional part (`40.0`) are accepted when they fit.
pub fn coerce_int(raw: &Value) -> Result<i64, CoercionFailure> {
    match raw {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .and_then(whole_number)
            .ok_or(CoercionFailure::Int),
        Value::Number(n) => n.as_i64().ok_or(CoercionFailure::Int),
        other => text_form(other).parse().map_err(|_| CoercionFailure::Int),
    }
}

fn whole_number(value: f64) -> Option<i64> {
    // 2^63, the first float past `i64::MAX`.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (value.fract() == 0.0 && (-LIMIT..LIMIT).contains(&value)).then_some(value as i64)
}

/// Parses a raw value as a finite `f64`.
pub fn coerce_float(raw: &Value) -> Result<f64, CoercionFailure> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        other => text_form(other).parse::<f64>().ok(),
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or(CoercionFailure::Float)
}
