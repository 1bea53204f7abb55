//! Records: objects whose every key and value follow one declared type.
//!
//! A record over an open key type (e.g. `string`) only inspects the keys a
//! value happens to carry. A record over a literal-union key type has a
//! closed key domain and is checked exhaustively: literal keys the value
//! lacks are checked as missing, so `Record<"a" | "b", number>` rejects
//! `{ "a": 1 }`.

use crate::asserter::{Asserter, AsserterKind, SharedAsserter};
use crate::error::{Issue, TypeAssertionError};
use crate::names;
use crate::value::{Unknown, format_number, property_label};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RecordAsserter {
    type_name: String,
    key: SharedAsserter,
    value: SharedAsserter,
}

impl RecordAsserter {
    /// Blank names become [`names::UNNAMED_RECORD`].
    pub fn new(type_name: impl Into<String>, key: SharedAsserter, value: SharedAsserter) -> Self {
        let type_name = names::resolve(type_name, names::UNNAMED_RECORD);
        tracing::debug!(
            type_name = %type_name,
            closed_keys = key.literals().is_some(),
            "record asserter built"
        );
        Self {
            type_name,
            key,
            value,
        }
    }

    /// Named `Record<K, V>`.
    pub fn of(key: SharedAsserter, value: SharedAsserter) -> Self {
        let type_name = format!("Record<{}, {}>", key.type_name(), value.type_name());
        Self::new(type_name, key, value)
    }

    pub fn key_asserter(&self) -> &SharedAsserter {
        &self.key
    }

    pub fn value_asserter(&self) -> &SharedAsserter {
        &self.value
    }

    /// Keys of the closed key domain, as they would appear on an object.
    fn literal_keys(&self) -> Vec<String> {
        self.key
            .literals()
            .unwrap_or_default()
            .iter()
            .filter_map(|literal| match literal {
                Value::String(key) => Some(key.clone()),
                Value::Number(n) => n.as_f64().map(format_number),
                _ => None,
            })
            .collect()
    }
}

impl Asserter for RecordAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::Record
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        let Some(Value::Object(map)) = value.as_value() else {
            return Err(TypeAssertionError::leaf(&self.type_name, value, value_name));
        };

        let mut issues = Vec::new();
        for (key, entry) in map {
            let key_value = Value::String(key.clone());
            let key_name = format!("key {key_value}");
            if let Err(error) = self.key.check(Unknown::Value(&key_value), &key_name) {
                issues.push(Issue::Nested(error));
            }
            if let Err(error) = self.value.check(Unknown::Value(entry), &property_label(key)) {
                issues.push(Issue::Nested(error));
            }
        }
        for key in self.literal_keys() {
            if map.contains_key(&key) {
                continue;
            }
            if let Err(error) = self.value.check(Unknown::Missing, &property_label(&key)) {
                issues.push(Issue::Nested(error));
            }
        }

        if issues.is_empty() {
            return Ok(());
        }
        tracing::trace!(
            type_name = %self.type_name,
            value_name,
            failing = issues.len(),
            "record rejected"
        );
        Err(TypeAssertionError::new(
            &self.type_name,
            value,
            value_name,
            issues,
        ))
    }
}
