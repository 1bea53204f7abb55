//! Strings with length, pattern and custom-rule constraints.

use crate::asserter::{Asserter, AsserterKind, Rule, Validator, validate_requirements, validate_rules};
use crate::error::{ConfigError, Issue, TypeAssertionError};
use crate::length;
use crate::names;
use crate::value::Unknown;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Requirement reported when the value is not a string at all.
pub const STRING_TYPE_REQUIREMENT: &str = "must be a string";

/// A pattern the whole string must match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringPattern {
    pub pattern: String,
    /// Reported, all of them, when the pattern does not match.
    pub requirements: Vec<String>,
}

impl StringPattern {
    pub fn new<S: Into<String>>(
        pattern: impl Into<String>,
        requirements: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            requirements: requirements.into_iter().map(Into::into).collect(),
        }
    }
}

/// Constraints for a [`StringAsserter`]. Lengths count characters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StringAsserterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<StringPattern>,
    #[serde(skip)]
    pub rules: Vec<Rule<str>>,
}

#[derive(Debug, Clone)]
pub struct StringAsserter {
    type_name: String,
    options: StringAsserterOptions,
    regex: Option<Regex>,
}

impl StringAsserter {
    /// Validate `options`, compile the pattern, and build the asserter.
    ///
    /// Blank names become [`names::UNNAMED_STRING`].
    pub fn new(
        type_name: impl Into<String>,
        options: StringAsserterOptions,
    ) -> Result<Self, ConfigError> {
        length::validate_bounds(options.min_length, options.max_length)?;
        let regex = options.regex.as_ref().map(compile_pattern).transpose()?;
        validate_rules(&options.rules)?;
        let type_name = names::resolve(type_name, names::UNNAMED_STRING);
        tracing::debug!(
            type_name = %type_name,
            pattern = options.regex.as_ref().map(|r| r.pattern.as_str()),
            rules = options.rules.len(),
            "string asserter built"
        );
        Ok(Self {
            type_name,
            options,
            regex,
        })
    }

    pub fn options(&self) -> &StringAsserterOptions {
        &self.options
    }
}

/// Compile a pattern anchored at both ends.
fn compile_pattern(pattern: &StringPattern) -> Result<Regex, ConfigError> {
    validate_requirements(&pattern.requirements, "regex")?;
    Regex::new(&format!("^(?:{})$", pattern.pattern)).map_err(|source| {
        ConfigError::InvalidPattern {
            pattern: pattern.pattern.clone(),
            source,
        }
    })
}

impl Validator<str> for StringAsserter {
    fn validate(&self, value: &str) -> Vec<String> {
        let options = &self.options;
        let mut issues = length::violations(
            value.chars().count(),
            options.min_length,
            options.max_length,
            Some("character"),
        );
        if let (Some(regex), Some(pattern)) = (&self.regex, &options.regex)
            && !regex.is_match(value)
        {
            issues.extend(pattern.requirements.iter().cloned());
        }
        for rule in &options.rules {
            if !rule.validate(value) {
                issues.extend(rule.requirements().iter().cloned());
            }
        }
        issues
    }
}

impl Asserter for StringAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::String
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        let Some(Value::String(text)) = value.as_value() else {
            return Err(TypeAssertionError::new(
                &self.type_name,
                value,
                value_name,
                vec![Issue::Requirement(STRING_TYPE_REQUIREMENT.to_string())],
            ));
        };
        let issues = self.validate(text);
        if issues.is_empty() {
            return Ok(());
        }
        tracing::trace!(
            type_name = %self.type_name,
            value_name,
            issues = issues.len(),
            "string rejected"
        );
        Err(TypeAssertionError::new(
            &self.type_name,
            value,
            value_name,
            issues.into_iter().map(Issue::Requirement).collect(),
        ))
    }
}
