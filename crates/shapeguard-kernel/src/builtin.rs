//! Built-in primitive asserters.
//!
//! Each is a process-wide singleton: repeated calls return the same `Arc`,
//! so composites that compare asserters by identity see them as equal.

use crate::asserter::{SharedAsserter, type_asserter};
use crate::value::Unknown;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// Largest integer a double represents exactly: 2^53 - 1.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn shared(cell: &'static OnceLock<SharedAsserter>, init: fn() -> SharedAsserter) -> SharedAsserter {
    Arc::clone(cell.get_or_init(init))
}

fn is_integer(value: Unknown<'_>) -> bool {
    value
        .as_f64()
        .is_some_and(|n| n.is_finite() && n.fract() == 0.0)
}

pub fn string() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || {
        type_asserter("string", |v| matches!(v.as_value(), Some(Value::String(_))))
    })
}

pub fn number() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || type_asserter("number", |v| v.as_f64().is_some()))
}

pub fn boolean() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || {
        type_asserter("boolean", |v| matches!(v.as_value(), Some(Value::Bool(_))))
    })
}

pub fn null() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || {
        type_asserter("null", |v| matches!(v.as_value(), Some(Value::Null)))
    })
}

/// Accepts `undefined` and missing properties.
pub fn undefined() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || type_asserter("undefined", |v| v.is_undefined()))
}

pub fn unknown() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || type_asserter("unknown", |_| true))
}

pub fn integer() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || type_asserter("Integer", is_integer))
}

pub fn safe_integer() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || {
        type_asserter("SafeInteger", |v| {
            is_integer(v) && v.as_f64().is_some_and(|n| n.abs() <= MAX_SAFE_INTEGER)
        })
    })
}

pub fn any_array() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || {
        type_asserter("Array<unknown>", |v| matches!(v.as_value(), Some(Value::Array(_))))
    })
}

/// Any non-null object, arrays included.
pub fn any_object() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || {
        type_asserter("object", |v| {
            matches!(v.as_value(), Some(Value::Object(_) | Value::Array(_)))
        })
    })
}

/// A plain object with arbitrary entries.
pub fn any_record() -> SharedAsserter {
    static CELL: OnceLock<SharedAsserter> = OnceLock::new();
    shared(&CELL, || {
        type_asserter("Record<string, unknown>", |v| {
            matches!(v.as_value(), Some(Value::Object(_)))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asserter::Asserter;
    use serde_json::json;

    #[test]
    fn singletons_keep_identity() {
        assert!(Arc::ptr_eq(&string(), &string()));
        assert!(Arc::ptr_eq(&integer(), &integer()));
        assert!(!Arc::ptr_eq(&integer(), &number()));
    }

    #[test]
    fn primitive_checks() {
        assert!(string().assert(&json!("s")).is_ok());
        assert!(string().assert(&json!(1)).is_err());
        assert!(number().assert(&json!(1.5)).is_ok());
        assert!(boolean().assert(&json!(false)).is_ok());
        assert!(null().assert(&json!(null)).is_ok());
        assert!(null().assert(&json!(0)).is_err());
        assert!(unknown().check(Unknown::Missing, "x").is_ok());
        assert!(undefined().check(Unknown::Undefined, "x").is_ok());
        assert!(undefined().assert(&json!(null)).is_err());
    }

    #[test]
    fn integers() {
        assert!(integer().assert(&json!(3)).is_ok());
        assert!(integer().assert(&json!(3.0)).is_ok());
        assert!(integer().assert(&json!(3.5)).is_err());
        assert!(safe_integer().assert(&json!(9_007_199_254_740_991_i64)).is_ok());
        assert!(safe_integer().assert(&json!(9_007_199_254_740_993_i64)).is_err());
    }

    #[test]
    fn containers() {
        assert!(any_array().assert(&json!([])).is_ok());
        assert!(any_object().assert(&json!([])).is_ok());
        assert!(any_object().assert(&json!(null)).is_err());
        assert!(any_record().assert(&json!({})).is_ok());
        assert!(any_record().assert(&json!([])).is_err());
    }
}
