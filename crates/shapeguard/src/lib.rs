//! # Shapeguard
//!
//! Composable runtime type assertions for JSON values of unknown shape.
//!
//! This crate re-exports [`shapeguard_kernel`] and adds [`Typed`], which
//! pairs an asserter with a Rust type: a value that passes the asserter is
//! deserialized into that type.
//!
//! ```
//! use serde::Deserialize;
//! use serde_json::json;
//! use shapeguard::{Asserted, ObjectAsserter, Typed, builtin};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Deserialize, PartialEq)]
//! struct User {
//!     name: String,
//! }
//!
//! let user: Typed<User> =
//!     Typed::new(Arc::new(ObjectAsserter::new("User", [("name", builtin::string())]).unwrap()));
//!
//! let ada: Asserted<Typed<User>> = user.assert(&json!({ "name": "Ada" })).unwrap();
//! assert_eq!(ada, User { name: "Ada".into() });
//! assert!(user.assert(&json!({ "name": 1 })).is_err());
//! ```

pub mod typed;

pub use shapeguard_kernel::*;
pub use typed::{Asserted, Declares, NarrowError, Typed};
