//! Alternatives: unions and options.
//!
//! These composites accept a value when any one alternative does. Member
//! failures are discarded; a rejection is always flat, citing only the
//! composite's own type name.

use crate::asserter::{Asserter, AsserterKind, SharedAsserter};
use crate::error::{ConfigError, TypeAssertionError};
use crate::names;
use crate::value::Unknown;

#[derive(Debug, Clone)]
pub struct UnionAsserter {
    type_name: String,
    members: Vec<SharedAsserter>,
}

impl UnionAsserter {
    /// Blank names become [`names::UNNAMED_UNION`].
    pub fn new(
        type_name: impl Into<String>,
        members: Vec<SharedAsserter>,
    ) -> Result<Self, ConfigError> {
        if members.is_empty() {
            return Err(ConfigError::NoMembers { kind: "union" });
        }
        let type_name = names::resolve(type_name, names::UNNAMED_UNION);
        tracing::debug!(
            type_name = %type_name,
            members = members.len(),
            "union asserter built"
        );
        Ok(Self { type_name, members })
    }

    /// A union named by its members joined with `" | "`.
    pub fn of(members: Vec<SharedAsserter>) -> Result<Self, ConfigError> {
        let type_name = members
            .iter()
            .map(|member| member.type_name())
            .collect::<Vec<_>>()
            .join(" | ");
        Self::new(type_name, members)
    }

    pub fn members(&self) -> &[SharedAsserter] {
        &self.members
    }
}

impl Asserter for UnionAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::Union
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        if self
            .members
            .iter()
            .any(|member| member.check(value, value_name).is_ok())
        {
            return Ok(());
        }
        tracing::trace!(type_name = %self.type_name, value_name, "union rejected");
        Err(TypeAssertionError::leaf(&self.type_name, value, value_name))
    }
}

/// `T | undefined`, with its own kind so derivations can recognise it.
#[derive(Debug, Clone)]
pub struct OptionAsserter {
    type_name: String,
    inner: SharedAsserter,
}

impl OptionAsserter {
    /// Blank names become [`names::UNNAMED_OPTION`].
    pub fn new(type_name: impl Into<String>, inner: SharedAsserter) -> Self {
        Self {
            type_name: names::resolve(type_name, names::UNNAMED_OPTION),
            inner,
        }
    }

    /// Named `T | undefined`.
    pub fn of(inner: SharedAsserter) -> Self {
        let type_name = format!("{} | undefined", inner.type_name());
        Self::new(type_name, inner)
    }

    pub fn inner(&self) -> &SharedAsserter {
        &self.inner
    }
}

impl Asserter for OptionAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::Option
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        if value.is_undefined() || self.inner.check(value, value_name).is_ok() {
            return Ok(());
        }
        Err(TypeAssertionError::leaf(&self.type_name, value, value_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::object::ObjectAsserter;
    use insta::assert_snapshot;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn first_accepting_member_wins() {
        let id = UnionAsserter::of(vec![builtin::string(), builtin::integer()]).unwrap();
        assert_eq!(id.type_name(), "string | Integer");
        let text = json!("abc");
        let number = json!(12);
        assert!(std::ptr::eq(id.assert(&text).unwrap(), &text));
        assert!(std::ptr::eq(id.assert(&number).unwrap(), &number));
    }

    #[test]
    fn rejection_is_flat() {
        let point = ObjectAsserter::new("Point", [("x", builtin::number())]).unwrap();
        let members: Vec<SharedAsserter> = vec![Arc::new(point), builtin::string()];
        let shape = UnionAsserter::new("Shape", members).unwrap();
        let err = shape.assert_named(&json!({ "x": "1" }), "shape").unwrap_err();
        assert!(err.issues().is_empty());
        assert_snapshot!(err.message(), @"`shape` is of type `Object`; expected type of `Shape`");
    }

    #[test]
    fn empty_union_fails_construction() {
        assert!(matches!(
            UnionAsserter::new("Never", Vec::new()),
            Err(ConfigError::NoMembers { kind: "union" })
        ));
    }

    #[test]
    fn blank_name_defaults() {
        let union = UnionAsserter::new("", vec![builtin::string()]).unwrap();
        assert_eq!(union.type_name(), "UnnamedUnion");
        let option = OptionAsserter::new(" ", builtin::string());
        assert_eq!(option.type_name(), "UnnamedOption");
    }

    #[test]
    fn option_accepts_undefined_and_missing() {
        let maybe = OptionAsserter::of(builtin::number());
        assert_eq!(maybe.type_name(), "number | undefined");
        assert!(maybe.check(Unknown::Undefined, "n").is_ok());
        assert!(maybe.check(Unknown::Missing, "n").is_ok());
        assert!(maybe.assert(&json!(1.5)).is_ok());

        let err = maybe.assert(&json!(null)).unwrap_err();
        assert!(err.issues().is_empty());
        assert_snapshot!(
            err.message(),
            @"`value` is of type `null`; expected type of `number | undefined`"
        );
    }

    #[test]
    fn option_hides_inner_issues() {
        let point = ObjectAsserter::new("Point", [("x", builtin::number())]).unwrap();
        let maybe = OptionAsserter::of(Arc::new(point));
        let err = maybe.assert(&json!({})).unwrap_err();
        assert!(err.issues().is_empty());
        assert_eq!(err.expected_type_name(), "Point | undefined");
    }
}
