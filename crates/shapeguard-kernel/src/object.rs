//! Objects with a fixed set of declared properties.
//!
//! The check is width-open: undeclared properties always pass, and arrays
//! are accepted as objects (only their declared keys are inspected).
//!
//! Derivations (`pick`, `partial`, `intersect`) build new asserters from
//! existing ones without mutating them; unchanged property asserters are
//! shared by reference.

use crate::asserter::{Asserter, AsserterKind, SharedAsserter, TypeAsserter};
use crate::error::{ConfigError, Issue, TypeAssertionError};
use crate::names::{self, parenthesize_open};
use crate::narrow::is;
use crate::union::OptionAsserter;
use crate::value::{Unknown, lookup_property, property_label, render_literal};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ObjectAsserter {
    type_name: String,
    properties: Vec<(String, SharedAsserter)>,
}

impl ObjectAsserter {
    /// Declare properties in the order their issues will be reported.
    ///
    /// Blank names become [`names::UNNAMED_OBJECT`].
    pub fn new<K: Into<String>>(
        type_name: impl Into<String>,
        properties: impl IntoIterator<Item = (K, SharedAsserter)>,
    ) -> Result<Self, ConfigError> {
        let mut declared: Vec<(String, SharedAsserter)> = Vec::new();
        for (key, asserter) in properties {
            let key = key.into();
            if declared.iter().any(|(existing, _)| *existing == key) {
                return Err(ConfigError::DuplicateProperty { key });
            }
            declared.push((key, asserter));
        }
        Ok(Self::from_parts(
            names::resolve(type_name, names::UNNAMED_OBJECT),
            declared,
        ))
    }

    fn from_parts(type_name: String, properties: Vec<(String, SharedAsserter)>) -> Self {
        tracing::debug!(
            type_name = %type_name,
            properties = properties.len(),
            "object asserter built"
        );
        Self {
            type_name,
            properties,
        }
    }

    pub fn properties(&self) -> &[(String, SharedAsserter)] {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&SharedAsserter> {
        self.properties
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, asserter)| asserter)
    }

    /// Project down to `keys`, named `Pick<T, "a" | "b">`.
    pub fn pick<K: AsRef<str>>(&self, keys: &[K]) -> Result<Self, ConfigError> {
        let rendered: Vec<String> = keys
            .iter()
            .map(|key| render_literal(&Value::String(key.as_ref().to_string())))
            .collect();
        let type_name = format!("Pick<{}, {}>", self.type_name, rendered.join(" | "));
        self.pick_named(type_name, keys)
    }

    /// Project down to exactly `keys`, in the order given.
    pub fn pick_named<K: AsRef<str>>(
        &self,
        type_name: impl Into<String>,
        keys: &[K],
    ) -> Result<Self, ConfigError> {
        let mut picked: Vec<(String, SharedAsserter)> = Vec::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref();
            let asserter = self.property(key).ok_or_else(|| ConfigError::UnknownProperty {
                key: key.to_string(),
                type_name: self.type_name.clone(),
            })?;
            if !picked.iter().any(|(existing, _)| existing == key) {
                picked.push((key.to_string(), Arc::clone(asserter)));
            }
        }
        Ok(Self::from_parts(
            names::resolve(type_name, names::UNNAMED_OBJECT),
            picked,
        ))
    }

    /// Every property additionally accepts `undefined`, named `Partial<T>`.
    pub fn partial(&self) -> Self {
        self.partial_named(format!("Partial<{}>", self.type_name))
    }

    /// Wrap each property in an option unless it already is one.
    pub fn partial_named(&self, type_name: impl Into<String>) -> Self {
        let properties = self
            .properties
            .iter()
            .map(|(key, asserter)| {
                let optional: SharedAsserter = if asserter.kind() == AsserterKind::Option {
                    Arc::clone(asserter)
                } else {
                    Arc::new(OptionAsserter::of(Arc::clone(asserter)))
                };
                (key.clone(), optional)
            })
            .collect();
        Self::from_parts(names::resolve(type_name, names::UNNAMED_OBJECT), properties)
    }

    /// Intersect with `other`, named `A & B`.
    pub fn intersect(&self, other: &ObjectAsserter) -> Self {
        self.intersect_named(
            format!(
                "{} & {}",
                parenthesize_open(&self.type_name),
                parenthesize_open(&other.type_name)
            ),
            other,
        )
    }

    /// Merge both property sets.
    ///
    /// A key declared on both sides with distinct asserters gets a fresh
    /// asserter requiring both; a key shared by reference, or declared on
    /// one side only, keeps its asserter.
    pub fn intersect_named(&self, type_name: impl Into<String>, other: &ObjectAsserter) -> Self {
        let mut properties: Vec<(String, SharedAsserter)> = self
            .properties
            .iter()
            .map(|(key, left)| {
                let merged = match other.property(key) {
                    Some(right) if !Arc::ptr_eq(left, right) => both(left, right),
                    _ => Arc::clone(left),
                };
                (key.clone(), merged)
            })
            .collect();
        for (key, right) in &other.properties {
            if self.property(key).is_none() {
                properties.push((key.clone(), Arc::clone(right)));
            }
        }
        Self::from_parts(names::resolve(type_name, names::UNNAMED_OBJECT), properties)
    }
}

fn both(left: &SharedAsserter, right: &SharedAsserter) -> SharedAsserter {
    let type_name = format!(
        "{} & {}",
        parenthesize_open(left.type_name()),
        parenthesize_open(right.type_name())
    );
    let (left, right) = (Arc::clone(left), Arc::clone(right));
    Arc::new(TypeAsserter::new(type_name, move |value| {
        is(left.as_ref(), value) && is(right.as_ref(), value)
    }))
}

impl Asserter for ObjectAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::Object
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        let target = match value.as_value() {
            Some(target @ (Value::Object(_) | Value::Array(_))) => target,
            _ => return Err(TypeAssertionError::leaf(&self.type_name, value, value_name)),
        };
        let issues: Vec<Issue> = self
            .properties
            .iter()
            .filter_map(|(key, asserter)| {
                asserter
                    .check(lookup_property(target, key), &property_label(key))
                    .err()
                    .map(Issue::Nested)
            })
            .collect();
        if issues.is_empty() {
            return Ok(());
        }
        tracing::trace!(
            type_name = %self.type_name,
            value_name,
            failing = issues.len(),
            "object rejected"
        );
        Err(TypeAssertionError::new(
            &self.type_name,
            value,
            value_name,
            issues,
        ))
    }
}
