//! Arrays of a single element type.

use crate::asserter::{Asserter, AsserterKind, SharedAsserter};
use crate::error::{ConfigError, Issue, TypeAssertionError};
use crate::length;
use crate::names;
use crate::value::Unknown;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArrayAsserterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Asserts an array and every one of its elements.
///
/// A length violation is reported on its own; otherwise each failing
/// element contributes one nested issue named by its index.
#[derive(Debug, Clone)]
pub struct ArrayAsserter {
    type_name: String,
    element: SharedAsserter,
    options: ArrayAsserterOptions,
}

impl ArrayAsserter {
    /// Blank names become [`names::UNNAMED_ARRAY`].
    pub fn new(
        type_name: impl Into<String>,
        element: SharedAsserter,
        options: ArrayAsserterOptions,
    ) -> Result<Self, ConfigError> {
        length::validate_bounds(options.min_length, options.max_length)?;
        let type_name = names::resolve(type_name, names::UNNAMED_ARRAY);
        tracing::debug!(
            type_name = %type_name,
            element = element.type_name(),
            "array asserter built"
        );
        Ok(Self {
            type_name,
            element,
            options,
        })
    }

    /// An unconstrained `Array<T>`.
    pub fn of(element: SharedAsserter) -> Self {
        Self {
            type_name: format!("Array<{}>", element.type_name()),
            element,
            options: ArrayAsserterOptions::default(),
        }
    }

    pub fn element(&self) -> &SharedAsserter {
        &self.element
    }

    pub fn options(&self) -> ArrayAsserterOptions {
        self.options
    }
}

impl Asserter for ArrayAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::Array
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        let Some(Value::Array(items)) = value.as_value() else {
            return Err(TypeAssertionError::leaf(&self.type_name, value, value_name));
        };

        let length_issues = length::violations(
            items.len(),
            self.options.min_length,
            self.options.max_length,
            None,
        );
        if !length_issues.is_empty() {
            return Err(TypeAssertionError::new(
                &self.type_name,
                value,
                value_name,
                length_issues.into_iter().map(Issue::Requirement).collect(),
            ));
        }

        let issues: Vec<Issue> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                self.element
                    .check(Unknown::Value(item), &index.to_string())
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
            "array rejected"
        );
        Err(TypeAssertionError::new(
            &self.type_name,
            value,
            value_name,
            issues,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn accepts_and_returns_same_reference() {
        let tags = ArrayAsserter::of(builtin::string());
        let value = json!(["a", "b"]);
        assert!(std::ptr::eq(tags.assert(&value).unwrap(), &value));
        assert_eq!(tags.type_name(), "Array<string>");
    }

    #[test]
    fn reports_every_failing_index_in_order() {
        let tags = ArrayAsserter::new("Tags", builtin::string(), ArrayAsserterOptions::default())
            .unwrap();
        let err = tags.assert(&json!(["a", 1, "b", null, false])).unwrap_err();
        let names: Vec<&str> = err
            .issues()
            .iter()
            .map(|issue| match issue {
                Issue::Nested(child) => child.value_name(),
                Issue::Requirement(text) => text.as_str(),
            })
            .collect();
        assert_eq!(names, ["1", "3", "4"]);
        assert_snapshot!(err.message(), @r"
        `value` is of type `Array`; expected type of `Tags`:
          - `1` is of type `number`; expected type of `string`
          - `3` is of type `null`; expected type of `string`
          - `4` is of type `boolean`; expected type of `string`
        ");
    }

    #[test]
    fn non_array_is_leaf() {
        let tags = ArrayAsserter::of(builtin::string());
        let err = tags.assert(&json!({ "0": "a" })).unwrap_err();
        assert!(err.issues().is_empty());
        assert_eq!(err.actual_type_name(), "Object");
    }

    #[test]
    fn length_violations_come_before_elements() {
        let pair = ArrayAsserter::new("Pair", builtin::number(), ArrayAsserterOptions {
            min_length: Some(2),
            max_length: Some(2),
        })
        .unwrap();
        let err = pair.assert(&json!(["x"])).unwrap_err();
        assert_snapshot!(err.message(), @r"
        `value` is of type `Array`; expected type of `Pair`:
          - must have 2
        ");

        let bounded = ArrayAsserter::new("Bounded", builtin::number(), ArrayAsserterOptions {
            min_length: Some(1),
            max_length: Some(3),
        })
        .unwrap();
        let err = bounded.assert(&json!([])).unwrap_err();
        assert_eq!(err.issues(), [Issue::Requirement("must have a minimum of 1".to_string())]);
        let err = bounded.assert(&json!([1, 2, 3, 4])).unwrap_err();
        assert_eq!(err.issues(), [Issue::Requirement("must have a maximum of 3".to_string())]);
    }

    #[test]
    fn nested_arrays_indent_per_level() {
        let matrix = ArrayAsserter::new(
            "Matrix",
            std::sync::Arc::new(ArrayAsserter::of(builtin::number())),
            ArrayAsserterOptions::default(),
        )
        .unwrap();
        let err = matrix.assert(&json!([[1, 2], [3, "4"]])).unwrap_err();
        assert_snapshot!(err.message(), @r"
        `value` is of type `Array`; expected type of `Matrix`:
          - `1` is of type `Array`; expected type of `Array<number>`:
            - `1` is of type `string`; expected type of `number`
        ");
    }

    #[test]
    fn invalid_options_and_default_name() {
        let inverted = ArrayAsserter::new("", builtin::number(), ArrayAsserterOptions {
            min_length: Some(4),
            max_length: Some(1),
        });
        assert!(matches!(inverted, Err(ConfigError::InvertedLength { .. })));

        let unnamed =
            ArrayAsserter::new("", builtin::number(), ArrayAsserterOptions::default()).unwrap();
        assert_eq!(unnamed.type_name(), "UnnamedArray");
    }
}
