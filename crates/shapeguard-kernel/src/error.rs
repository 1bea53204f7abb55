//! Error types for Shapeguard.
//!
//! Two disjoint kinds: [`TypeAssertionError`] is a normal outcome of checking
//! untrusted input, [`ConfigError`] is a programmer error raised while an
//! asserter is being built.

use crate::asserter::DEFAULT_VALUE_NAME;
use crate::value::Unknown;

/// One unit of failure detail beneath a [`TypeAssertionError`].
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// A violated rule, e.g. `must be >= 0`.
    Requirement(String),
    /// A failing slot (property, element, record entry).
    Nested(TypeAssertionError),
}

impl Issue {
    fn render(&self) -> &str {
        match self {
            Issue::Requirement(text) => text,
            Issue::Nested(error) => error.message(),
        }
    }
}

impl From<String> for Issue {
    fn from(text: String) -> Self {
        Issue::Requirement(text)
    }
}

impl From<TypeAssertionError> for Issue {
    fn from(error: TypeAssertionError) -> Self {
        Issue::Nested(error)
    }
}

/// A value did not conform to its declared type.
///
/// The message is rendered once, at construction:
///
/// ```text
/// `<valueName>` is of type `<actual>`; expected type of `<expected>`:
///   - <issue>
///   - `<child>` is missing; expected type of `<childType>`
/// ```
///
/// Nested issues are indented two more spaces per level.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct TypeAssertionError {
    expected_type_name: String,
    actual_type_name: &'static str,
    missing: bool,
    value_name: String,
    issues: Vec<Issue>,
    message: String,
}

impl TypeAssertionError {
    /// Build an error, rendering its message immediately.
    pub fn new(
        expected_type_name: impl Into<String>,
        value: Unknown<'_>,
        value_name: &str,
        issues: Vec<Issue>,
    ) -> Self {
        let expected_type_name = expected_type_name.into();
        let value_name = if value_name.is_empty() {
            DEFAULT_VALUE_NAME.to_string()
        } else {
            value_name.to_string()
        };
        let missing = value.is_missing();
        let actual_type_name = value.type_name();
        let message = render_message(
            &expected_type_name,
            actual_type_name,
            missing,
            &value_name,
            &issues,
        );
        Self {
            expected_type_name,
            actual_type_name,
            missing,
            value_name,
            issues,
            message,
        }
    }

    /// A failure with no nested detail.
    pub fn leaf(expected_type_name: impl Into<String>, value: Unknown<'_>, value_name: &str) -> Self {
        Self::new(expected_type_name, value, value_name, Vec::new())
    }

    pub fn expected_type_name(&self) -> &str {
        &self.expected_type_name
    }

    /// Runtime type of the rejected value; `undefined` when it was missing.
    pub fn actual_type_name(&self) -> &'static str {
        self.actual_type_name
    }

    /// True when the rejected value was an absent object property.
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn render_message(
    expected_type_name: &str,
    actual_type_name: &str,
    missing: bool,
    value_name: &str,
    issues: &[Issue],
) -> String {
    let observed = if missing {
        "is missing".to_string()
    } else {
        format!("is of type `{actual_type_name}`")
    };
    let mut message = format!("`{value_name}` {observed}; expected type of `{expected_type_name}`");
    if issues.is_empty() {
        return message;
    }
    message.push(':');
    for issue in issues {
        message.push_str("\n- ");
        message.push_str(issue.render());
    }
    // Children already carry their own indentation; one uniform shift per
    // level keeps depth compounding.
    message.replace('\n', "\n  ")
}

/// An asserter was configured with options that can never be satisfied.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{option} must be a positive integer, got {value}")]
    InvalidLength { option: &'static str, value: usize },

    #[error("minLength ({min}) must not exceed maxLength ({max})")]
    InvertedLength { min: usize, max: usize },

    #[error("{option} bound must be a number, got {value}")]
    InvalidBound { option: &'static str, value: f64 },

    #[error("min ({min}) must not exceed max ({max})")]
    InvertedBounds { min: f64, max: f64 },

    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    #[error("{context} requirements must not be empty")]
    EmptyRequirements { context: String },

    #[error("{context} requirements must not contain blank strings")]
    BlankRequirement { context: String },

    #[error("invalid regex pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{kind} requires at least one member")]
    NoMembers { kind: &'static str },

    #[error("literal {literal} is not a primitive value")]
    NonPrimitiveLiteral { literal: String },

    #[error("property {key:?} is declared more than once")]
    DuplicateProperty { key: String },

    #[error("property {key:?} is not declared on {type_name}")]
    UnknownProperty { key: String, type_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn leaf_message() {
        let err = TypeAssertionError::leaf("string", Unknown::from(&json!(3)), "id");
        assert_snapshot!(err.to_string(), @"`id` is of type `number`; expected type of `string`");
        assert!(err.issues().is_empty());
        assert_eq!(err.actual_type_name(), "number");
    }

    #[test]
    fn empty_value_name_defaults() {
        let err = TypeAssertionError::leaf("null", Unknown::from(&json!(true)), "");
        assert_eq!(err.value_name(), "value");
        assert_snapshot!(err.message(), @"`value` is of type `boolean`; expected type of `null`");
    }

    #[test]
    fn missing_renders_as_missing() {
        let err = TypeAssertionError::leaf("string", Unknown::Missing, "name");
        assert!(err.is_missing());
        assert_eq!(err.actual_type_name(), "undefined");
        assert_snapshot!(err.message(), @"`name` is missing; expected type of `string`");

        let err = TypeAssertionError::leaf("string", Unknown::Undefined, "name");
        assert!(!err.is_missing());
        assert_snapshot!(err.message(), @"`name` is of type `undefined`; expected type of `string`");
    }

    #[test]
    fn requirement_issues() {
        let err = TypeAssertionError::new(
            "Pct",
            Unknown::from(&json!(101.5)),
            "value",
            vec![
                Issue::from("must be <= 100".to_string()),
                Issue::from("must be a multiple of 1".to_string()),
            ],
        );
        assert_snapshot!(err.message(), @r"
        `value` is of type `number`; expected type of `Pct`:
          - must be <= 100
          - must be a multiple of 1
        ");
    }

    #[test]
    fn nested_issues_indent_per_level() {
        let value = json!({ "inner": { "n": "x" } });
        let leaf = TypeAssertionError::leaf("number", Unknown::from(&value["inner"]["n"]), "n");
        let middle = TypeAssertionError::new(
            "Inner",
            Unknown::from(&value["inner"]),
            "inner",
            vec![Issue::from(leaf)],
        );
        let outer = TypeAssertionError::new("Outer", Unknown::from(&value), "value", vec![
            Issue::from(middle),
        ]);
        assert_snapshot!(outer.message(), @r"
        `value` is of type `Object`; expected type of `Outer`:
          - `inner` is of type `Object`; expected type of `Inner`:
            - `n` is of type `string`; expected type of `number`
        ");
    }

    #[test]
    fn mixed_issue_kinds_render() {
        let value = json!([]);
        let child = TypeAssertionError::leaf("string", Unknown::Missing, "x");
        let err = TypeAssertionError::new("T", Unknown::from(&value), "v", vec![
            Issue::from("must have a minimum of 1".to_string()),
            Issue::from(child),
        ]);
        assert_snapshot!(err.message(), @r"
        `v` is of type `Array`; expected type of `T`:
          - must have a minimum of 1
          - `x` is missing; expected type of `string`
        ");
    }
}
