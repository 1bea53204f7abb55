//! Typed narrowing: assert a value, then deserialize it.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shapeguard_kernel::{Asserter, DEFAULT_VALUE_NAME, SharedAsserter, TypeAssertionError, is};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrowError {
    #[error(transparent)]
    Assertion(#[from] TypeAssertionError),

    /// The value conformed but does not fit the Rust type it is bound to.
    #[error("`{value_name}` conforms to `{type_name}` but cannot be read: {source}")]
    Deserialize {
        type_name: String,
        value_name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that declares the Rust type its accepted values narrow to.
pub trait Declares {
    type Output;
}

/// The Rust type a declaration narrows to.
pub type Asserted<A> = <A as Declares>::Output;

/// An asserter bound to the Rust type `T` it describes.
pub struct Typed<T> {
    asserter: SharedAsserter,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    pub fn new(asserter: SharedAsserter) -> Self {
        Self {
            asserter,
            _marker: PhantomData,
        }
    }

    pub fn asserter(&self) -> &SharedAsserter {
        &self.asserter
    }

    pub fn type_name(&self) -> &str {
        self.asserter.type_name()
    }

    pub fn is(&self, value: &Value) -> bool {
        is(self.asserter.as_ref(), value)
    }
}

impl<T: DeserializeOwned> Typed<T> {
    pub fn assert(&self, value: &Value) -> Result<T, NarrowError> {
        self.assert_named(value, DEFAULT_VALUE_NAME)
    }

    /// Validate under `value_name`; only conforming values reach serde.
    pub fn assert_named(&self, value: &Value, value_name: &str) -> Result<T, NarrowError> {
        self.asserter.assert_named(value, value_name)?;
        T::deserialize(value).map_err(|source| NarrowError::Deserialize {
            type_name: self.asserter.type_name().to_string(),
            value_name: value_name.to_string(),
            source,
        })
    }
}

impl<T> Declares for Typed<T> {
    type Output = T;
}

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.asserter))
    }
}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typed")
            .field("type_name", &self.asserter.type_name())
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}
