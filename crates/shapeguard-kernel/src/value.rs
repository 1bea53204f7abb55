//! The value model asserters operate on.
//!
//! Untrusted data arrives as a borrowed [`serde_json::Value`]. JSON has no
//! `undefined`, so an asserter actually receives an [`Unknown`]: either a
//! present value, an explicit `undefined`, or the missing-property sentinel
//! produced when an object lookup finds no such key.

use serde_json::Value;

/// A value of unknown shape, as seen by an asserter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unknown<'v> {
    /// A present JSON value.
    Value(&'v Value),
    /// An explicit `undefined` (e.g. an absent optional argument).
    Undefined,
    /// A declared property that the inspected object does not carry.
    Missing,
}

impl<'v> Unknown<'v> {
    /// The present value, if any.
    pub fn as_value(self) -> Option<&'v Value> {
        match self {
            Unknown::Value(value) => Some(value),
            Unknown::Undefined | Unknown::Missing => None,
        }
    }

    /// True for `undefined` and for a missing property.
    pub fn is_undefined(self) -> bool {
        self.as_value().is_none()
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Unknown::Missing)
    }

    /// The runtime type discriminator used in rendered messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Unknown::Value(value) => json_type_name(value),
            Unknown::Undefined | Unknown::Missing => "undefined",
        }
    }

    /// The numeric payload, when this is a JSON number.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Unknown::Value(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }
}

impl<'v> From<&'v Value> for Unknown<'v> {
    fn from(value: &'v Value) -> Self {
        Unknown::Value(value)
    }
}

impl<'v> From<Option<&'v Value>> for Unknown<'v> {
    fn from(value: Option<&'v Value>) -> Self {
        value.map_or(Unknown::Undefined, Unknown::Value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// True for values that compare by value rather than by reference.
pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Strict equality between two JSON values.
///
/// Numbers compare numerically, so `1` and `1.0` are the same literal.
/// Containers are never strictly equal: they have reference identity, and
/// literal sets only hold primitives.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        _ => false,
    }
}

/// Render a number the way it appears in requirement strings.
///
/// `NaN` and the infinities use their host spellings, negative zero prints
/// as `0`, and integral values carry no fractional part.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

/// Render a literal for use inside a type name: strings are quoted.
pub fn render_literal(value: &Value) -> String {
    match value {
        Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), format_number),
        other => other.to_string(),
    }
}

/// The value name used for a property slot.
///
/// Identifier-like keys are used bare; anything else is rendered as a
/// bracketed string index, e.g. `["content-type"]`.
pub fn property_label(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        format!("[{}]", Value::String(key.to_string()))
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Read a declared property off a value.
///
/// Objects are looked up by key. Arrays answer canonical index keys
/// (`"0"`, `"12"`, never `"01"`). Everything else is missing.
pub fn lookup_property<'v>(value: &'v Value, key: &str) -> Unknown<'v> {
    let found = match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => canonical_index(key).and_then(|index| items.get(index)),
        _ => None,
    };
    found.map_or(Unknown::Missing, Unknown::Value)
}

fn canonical_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}
