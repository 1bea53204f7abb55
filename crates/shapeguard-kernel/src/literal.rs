//! Finite value sets: enums and literal unions.
//!
//! Membership is strict equality against primitives. Failures are always
//! flat: there is no slot to point at.

use crate::asserter::{Asserter, AsserterKind};
use crate::error::{ConfigError, TypeAssertionError};
use crate::names;
use crate::value::{Unknown, is_primitive, render_literal, strict_equals};
use serde_json::{Map, Value};

fn validate_members(members: &[Value], kind: &'static str) -> Result<(), ConfigError> {
    if members.is_empty() {
        return Err(ConfigError::NoMembers { kind });
    }
    match members.iter().find(|member| !is_primitive(member)) {
        Some(member) => Err(ConfigError::NonPrimitiveLiteral {
            literal: member.to_string(),
        }),
        None => Ok(()),
    }
}

fn contains(members: &[Value], value: Unknown<'_>) -> bool {
    value
        .as_value()
        .is_some_and(|value| members.iter().any(|member| strict_equals(member, value)))
}

/// The values of an enum-like object.
#[derive(Debug, Clone)]
pub struct EnumAsserter {
    type_name: String,
    values: Vec<Value>,
}

impl EnumAsserter {
    /// Blank names become [`names::UNNAMED_ENUM`].
    pub fn new(type_name: impl Into<String>, values: Vec<Value>) -> Result<Self, ConfigError> {
        validate_members(&values, "enum")?;
        let type_name = names::resolve(type_name, names::UNNAMED_ENUM);
        tracing::debug!(type_name = %type_name, values = values.len(), "enum asserter built");
        Ok(Self { type_name, values })
    }

    /// Take the values of an enum-like object.
    ///
    /// Entries under numeric-string keys are reverse mappings (`"0": "Red"`)
    /// and are skipped.
    pub fn from_enum_object(
        type_name: impl Into<String>,
        object: &Map<String, Value>,
    ) -> Result<Self, ConfigError> {
        let values = object
            .iter()
            .filter(|(key, _)| !is_numeric_key(key))
            .map(|(_, value)| value.clone())
            .collect();
        Self::new(type_name, values)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

fn is_numeric_key(key: &str) -> bool {
    key.trim().parse::<f64>().is_ok_and(|n| !n.is_nan())
}

impl Asserter for EnumAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::Enum
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        if contains(&self.values, value) {
            Ok(())
        } else {
            Err(TypeAssertionError::leaf(&self.type_name, value, value_name))
        }
    }
}

/// One of an explicit list of literals, e.g. `"on" | "off"`.
#[derive(Debug, Clone)]
pub struct LiteralUnionAsserter {
    type_name: String,
    literals: Vec<Value>,
}

impl LiteralUnionAsserter {
    /// Blank names become [`names::UNNAMED_LITERAL_UNION`].
    pub fn new(type_name: impl Into<String>, literals: Vec<Value>) -> Result<Self, ConfigError> {
        validate_members(&literals, "literal union")?;
        let type_name = names::resolve(type_name, names::UNNAMED_LITERAL_UNION);
        tracing::debug!(
            type_name = %type_name,
            literals = literals.len(),
            "literal union asserter built"
        );
        Ok(Self {
            type_name,
            literals,
        })
    }

    /// Named by the rendered literals, e.g. `"on" | "off" | 0`.
    pub fn of(literals: Vec<Value>) -> Result<Self, ConfigError> {
        let type_name = literals
            .iter()
            .map(render_literal)
            .collect::<Vec<_>>()
            .join(" | ");
        Self::new(type_name, literals)
    }
}

impl Asserter for LiteralUnionAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::LiteralUnion
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        if contains(&self.literals, value) {
            Ok(())
        } else {
            Err(TypeAssertionError::leaf(&self.type_name, value, value_name))
        }
    }

    fn literals(&self) -> Option<&[Value]> {
        Some(&self.literals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn enum_skips_reverse_mappings() {
        let Value::Object(object) = json!({ "Red": 0, "Green": 1, "0": "Red", "1": "Green" }) else {
            unreachable!()
        };
        let color = EnumAsserter::from_enum_object("Color", &object).unwrap();
        assert_eq!(color.values(), [json!(0), json!(1)]);
        assert!(color.assert(&json!(1)).is_ok());
        assert!(color.assert(&json!(1.0)).is_ok());
        assert!(color.assert(&json!("Red")).is_err());
    }

    #[test]
    fn string_enum_membership() {
        let Value::Object(object) = json!({ "Up": "UP", "Down": "DOWN" }) else {
            unreachable!()
        };
        let direction = EnumAsserter::from_enum_object("Direction", &object).unwrap();
        let up = json!("UP");
        assert!(std::ptr::eq(direction.assert(&up).unwrap(), &up));
        let err = direction.assert_named(&json!("LEFT"), "dir").unwrap_err();
        assert!(err.issues().is_empty());
        assert_snapshot!(err.message(), @"`dir` is of type `string`; expected type of `Direction`");
    }

    #[test]
    fn literal_union_membership_and_name() {
        let switch = LiteralUnionAsserter::of(vec![json!("on"), json!("off"), json!(0)]).unwrap();
        assert_eq!(switch.type_name(), "\"on\" | \"off\" | 0");
        assert!(switch.assert(&json!("off")).is_ok());
        assert!(switch.assert(&json!(0)).is_ok());
        assert!(switch.assert(&json!("0")).is_err());
        assert!(switch.check(Unknown::Missing, "s").is_err());
        assert_eq!(switch.literals().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn members_must_be_primitive_and_present() {
        assert!(matches!(
            LiteralUnionAsserter::new("Bad", vec![json!({ "a": 1 })]),
            Err(ConfigError::NonPrimitiveLiteral { .. })
        ));
        assert!(matches!(
            EnumAsserter::new("Empty", Vec::new()),
            Err(ConfigError::NoMembers { kind: "enum" })
        ));
    }

    #[test]
    fn blank_names_default() {
        let literal = LiteralUnionAsserter::new("", vec![json!(true)]).unwrap();
        assert_eq!(literal.type_name(), "UnnamedLiteralUnion");
        let enumeration = EnumAsserter::new("", vec![json!(1)]).unwrap();
        assert_eq!(enumeration.type_name(), "UnnamedEnum");
        assert!(enumeration.literals().is_none());
    }
}
