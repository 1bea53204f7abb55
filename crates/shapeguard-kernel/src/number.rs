//! Numbers with declarative constraints.
//!
//! Constraints are evaluated in a fixed order and every violation is
//! reported: NaN handling, then `min`/`max`, then `step`, then custom rules.

use crate::asserter::{Asserter, AsserterKind, Rule, Validator, validate_rules};
use crate::error::{ConfigError, Issue, TypeAssertionError};
use crate::names;
use crate::step::is_step_aligned;
use crate::value::{Unknown, format_number};
use serde::{Deserialize, Serialize};

/// One end of a numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberBound {
    pub value: f64,
    pub inclusive: bool,
}

impl NumberBound {
    pub fn inclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    pub fn exclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// Constraints for a [`NumberAsserter`].
///
/// Loadable from configuration; `rules` are code and never serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberAsserterOptions {
    /// When false, `NaN` is accepted and skips every other constraint.
    #[serde(rename = "disallowNaN")]
    pub disallow_nan: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<NumberBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<NumberBound>,
    /// Counted from `min.value`, or from zero without a minimum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip)]
    pub rules: Vec<Rule<f64>>,
}

#[derive(Debug, Clone)]
pub struct NumberAsserter {
    type_name: String,
    options: NumberAsserterOptions,
}

impl NumberAsserter {
    /// Validate `options` and build the asserter.
    ///
    /// Blank names become [`names::UNNAMED_NUMBER`].
    pub fn new(
        type_name: impl Into<String>,
        options: NumberAsserterOptions,
    ) -> Result<Self, ConfigError> {
        validate_options(&options)?;
        let type_name = names::resolve(type_name, names::UNNAMED_NUMBER);
        tracing::debug!(
            type_name = %type_name,
            rules = options.rules.len(),
            "number asserter built"
        );
        Ok(Self { type_name, options })
    }

    pub fn options(&self) -> &NumberAsserterOptions {
        &self.options
    }
}

fn validate_options(options: &NumberAsserterOptions) -> Result<(), ConfigError> {
    if let Some(min) = options.min
        && min.value.is_nan()
    {
        return Err(ConfigError::InvalidBound {
            option: "min",
            value: min.value,
        });
    }
    if let Some(max) = options.max
        && max.value.is_nan()
    {
        return Err(ConfigError::InvalidBound {
            option: "max",
            value: max.value,
        });
    }
    if let (Some(min), Some(max)) = (options.min, options.max)
        && min.value > max.value
    {
        return Err(ConfigError::InvertedBounds {
            min: min.value,
            max: max.value,
        });
    }
    if let Some(step) = options.step
        && !(step.is_finite() && step > 0.0)
    {
        return Err(ConfigError::InvalidStep(step));
    }
    validate_rules(&options.rules)
}

impl Validator<f64> for NumberAsserter {
    fn validate(&self, value: &f64) -> Vec<String> {
        let value = *value;
        let options = &self.options;
        let mut issues = Vec::new();

        if value.is_nan() {
            if !options.disallow_nan {
                return issues;
            }
            issues.push("must be a valid number".to_string());
        }

        if let Some(min) = options.min {
            if min.inclusive && value < min.value {
                issues.push(format!("must be >= {}", format_number(min.value)));
            } else if !min.inclusive && value <= min.value {
                issues.push(format!("must be > {}", format_number(min.value)));
            }
        }
        if let Some(max) = options.max {
            if max.inclusive && value > max.value {
                issues.push(format!("must be <= {}", format_number(max.value)));
            } else if !max.inclusive && value >= max.value {
                issues.push(format!("must be < {}", format_number(max.value)));
            }
        }

        if let Some(step) = options.step {
            let base = options.min.map_or(0.0, |min| min.value);
            if !is_step_aligned(value, base, step) {
                let mut requirement = format!("must be a multiple of {}", format_number(step));
                if base != 0.0 && !base.is_nan() {
                    requirement.push_str(&format!(" from {}", format_number(base)));
                }
                issues.push(requirement);
            }
        }

        for rule in &options.rules {
            if !rule.validate(&value) {
                issues.extend(rule.requirements().iter().cloned());
            }
        }
        issues
    }
}

impl Asserter for NumberAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::Number
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        let Some(n) = value.as_f64() else {
            return Err(TypeAssertionError::leaf(&self.type_name, value, value_name));
        };
        let issues = self.validate(&n);
        if issues.is_empty() {
            return Ok(());
        }
        tracing::trace!(
            type_name = %self.type_name,
            value_name,
            issues = issues.len(),
            "number rejected"
        );
        Err(TypeAssertionError::new(
            &self.type_name,
            value,
            value_name,
            issues.into_iter().map(Issue::Requirement).collect(),
        ))
    }
}
