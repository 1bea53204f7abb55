//! Predicate and assertion adapters over any asserter.

use crate::asserter::{Asserter, DEFAULT_VALUE_NAME};
use crate::error::TypeAssertionError;
use crate::value::Unknown;

/// True when `asserter` accepts `value`. Never fails.
pub fn is<'v>(asserter: &dyn Asserter, value: impl Into<Unknown<'v>>) -> bool {
    asserter.check(value.into(), DEFAULT_VALUE_NAME).is_ok()
}

/// Check `value` for its side effect only, propagating the rejection.
pub fn assert_is<'v>(
    asserter: &dyn Asserter,
    value: impl Into<Unknown<'v>>,
    value_name: Option<&str>,
) -> Result<(), TypeAssertionError> {
    asserter.check(value.into(), value_name.unwrap_or(DEFAULT_VALUE_NAME))
}
