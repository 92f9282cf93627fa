//! The tagged scalar value carried by expression literals and node bags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tagged scalar: integer, float, boolean, or string.
///
/// Integers and floats are distinct tags but comparable to one another
/// (see [`values_equal`] and [`Value::to_number`]); strings are arbitrary
/// UTF-8, including empty.
///
/// Serializes/deserializes untagged, as a plain JSON scalar (`1`, `1.5`,
/// `true`, `"x"`) rather than an internally-tagged enum, since this is
/// the representation the configuration document's bags use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Str(String),
}

impl Value {
    /// Widen to a float. Succeeds for `Int`/`Float`, fails otherwise.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Bool(_) | Value::Str(_) => None,
        }
    }

    /// Extract a boolean. Succeeds only for `Bool`.
    pub fn to_boolean(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract a string slice. Succeeds only for `Str`.
    pub fn to_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness in boolean position: nonzero int/float, nonempty string,
    /// or the boolean itself.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// Structural equality across tags, per the promotion rule: same-tag
/// comparisons are structural, integer-vs-float widens both sides to
/// float, and every other cross-tag pairing is `false`.
///
/// Deliberately does *not* extend to booleans or strings: `true == 1`
/// and `"1" == 1` are both `false`, by design (see spec open questions).
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => (*a as f64) == *b,
        _ => false,
    }
}
