//! The asserter contract.
//!
//! Every primitive and composite implements [`Asserter`]. Asserters are
//! built once, shared as [`SharedAsserter`], and hold no per-call state:
//! each `check` only reads configuration and builds a call-local issue list.

use crate::error::{ConfigError, TypeAssertionError};
use crate::names;
use crate::value::Unknown;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Value name used when the caller does not supply one.
pub const DEFAULT_VALUE_NAME: &str = "value";

/// Closed set of asserter kinds.
///
/// Composites branch on this tag instead of downcasting, e.g. partial
/// derivation leaves `Option` properties alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsserterKind {
    Type,
    Number,
    String,
    Array,
    Record,
    Object,
    Union,
    Option,
    Enum,
    LiteralUnion,
}

/// A validator for a declared type.
pub trait Asserter: fmt::Debug + Send + Sync {
    /// Display name of the declared type.
    fn type_name(&self) -> &str;

    fn kind(&self) -> AsserterKind;

    /// Accept `value` or explain why it does not conform.
    ///
    /// `value_name` is the name the value is reported under; an empty name
    /// renders as [`DEFAULT_VALUE_NAME`].
    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError>;

    /// The finite literal set this asserter accepts, for literal unions.
    ///
    /// Records use it to validate closed key domains exhaustively.
    fn literals(&self) -> Option<&[Value]> {
        None
    }

    /// Assert a present value, returning the same reference on success.
    fn assert<'v>(&self, value: &'v Value) -> Result<&'v Value, TypeAssertionError> {
        self.assert_named(value, DEFAULT_VALUE_NAME)
    }

    fn assert_named<'v>(
        &self,
        value: &'v Value,
        value_name: &str,
    ) -> Result<&'v Value, TypeAssertionError> {
        self.check(Unknown::Value(value), value_name)?;
        Ok(value)
    }

    /// Assert a value that may be `undefined` or missing.
    fn assert_unknown<'v>(
        &self,
        value: Unknown<'v>,
        value_name: Option<&str>,
    ) -> Result<Unknown<'v>, TypeAssertionError> {
        self.check(value, value_name.unwrap_or(DEFAULT_VALUE_NAME))?;
        Ok(value)
    }
}

/// Asserters are shared by reference; identity is `Arc::ptr_eq`.
pub type SharedAsserter = Arc<dyn Asserter>;

type Predicate = Arc<dyn for<'a> Fn(Unknown<'a>) -> bool + Send + Sync>;

/// A leaf asserter over a boolean predicate.
#[derive(Clone)]
pub struct TypeAsserter {
    type_name: String,
    predicate: Predicate,
}

impl TypeAsserter {
    /// Blank names become [`names::UNNAMED_TYPE`].
    pub fn new(
        type_name: impl Into<String>,
        predicate: impl Fn(Unknown<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            type_name: names::resolve(type_name, names::UNNAMED_TYPE),
            predicate: Arc::new(predicate),
        }
    }
}

impl fmt::Debug for TypeAsserter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeAsserter")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl Asserter for TypeAsserter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> AsserterKind {
        AsserterKind::Type
    }

    fn check(&self, value: Unknown<'_>, value_name: &str) -> Result<(), TypeAssertionError> {
        if (self.predicate)(value) {
            Ok(())
        } else {
            Err(TypeAssertionError::leaf(&self.type_name, value, value_name))
        }
    }
}

/// Wrap a predicate into a shared asserter.
pub fn type_asserter(
    type_name: impl Into<String>,
    predicate: impl Fn(Unknown<'_>) -> bool + Send + Sync + 'static,
) -> SharedAsserter {
    Arc::new(TypeAsserter::new(type_name, predicate))
}

/// The constraint-only half of a scalar asserter.
///
/// Returns every violated requirement, in evaluation order; empty means
/// the value satisfies all constraints.
pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> Vec<String>;
}

/// A custom constraint: a check plus the requirements it stands for.
pub struct Rule<T: ?Sized> {
    check: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    requirements: Vec<String>,
}

impl<T: ?Sized> Rule<T> {
    pub fn new<S: Into<String>>(
        requirements: impl IntoIterator<Item = S>,
        check: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            check: Arc::new(check),
            requirements: requirements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn validate(&self, value: &T) -> bool {
        (self.check)(value)
    }

    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
            requirements: self.requirements.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("requirements", &self.requirements)
            .finish_non_exhaustive()
    }
}

/// Requirement lists must be non-empty and free of blank entries.
pub(crate) fn validate_requirements(
    requirements: &[String],
    context: &str,
) -> Result<(), ConfigError> {
    if requirements.is_empty() {
        return Err(ConfigError::EmptyRequirements {
            context: context.to_string(),
        });
    }
    if requirements.iter().any(|r| r.trim().is_empty()) {
        return Err(ConfigError::BlankRequirement {
            context: context.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_rules<T: ?Sized>(rules: &[Rule<T>]) -> Result<(), ConfigError> {
    rules.iter().enumerate().try_for_each(|(index, rule)| {
        validate_requirements(rule.requirements(), &format!("rule {index}"))
    })
}
