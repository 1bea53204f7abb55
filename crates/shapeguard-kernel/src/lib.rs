//! # Shapeguard Kernel
//!
//! Runtime type assertions for values of unknown shape: a value is accepted
//! exactly when it conforms to a declared type, and a rejection carries a
//! tree of issues explaining which slot or rule failed.
//!
//! The kernel is **source-agnostic**: it does not care whether a value came
//! from a file, a socket or a test fixture. It only prescribes how asserters
//! compose and how their failures render.
//!
//! ## Architecture
//!
//! ```text
//! Unknown<'v>            ← Borrowed value, `undefined`, or missing property
//!     │
//! TypeAssertionError     ← Expected type + actual type + issue tree
//!     │
//! Asserter               ← type_name / kind / check, shared as Arc<dyn _>
//!     │
//! Number / String        ← Primitive check + declarative constraints
//!     │
//! Array / Record / Object← Per-slot delegation, all failures aggregated
//!     │
//! Union / Option / Enum  ← First match wins, flat failure otherwise
//! ```
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use shapeguard_kernel::{Asserter, ObjectAsserter, builtin};
//!
//! let user = ObjectAsserter::new(
//!     "User",
//!     [("name", builtin::string()), ("age", builtin::integer())],
//! )
//! .unwrap();
//!
//! let value = json!({ "name": "Ada", "age": 36 });
//! assert!(std::ptr::eq(user.assert(&value).unwrap(), &value));
//!
//! let err = user.assert(&json!({ "name": 7 })).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "`value` is of type `Object`; expected type of `User`:\n  \
//!      - `name` is of type `number`; expected type of `string`\n  \
//!      - `age` is missing; expected type of `Integer`"
//! );
//! ```

pub mod array;
pub mod asserter;
pub mod builtin;
pub mod error;
mod length;
pub mod literal;
pub mod names;
pub mod narrow;
pub mod number;
pub mod object;
pub mod record;
pub mod step;
pub mod string;
pub mod union;
pub mod value;

pub use array::{ArrayAsserter, ArrayAsserterOptions};
pub use asserter::{
    Asserter, AsserterKind, DEFAULT_VALUE_NAME, Rule, SharedAsserter, TypeAsserter, Validator,
    type_asserter,
};
pub use error::{ConfigError, Issue, TypeAssertionError};
pub use literal::{EnumAsserter, LiteralUnionAsserter};
pub use names::{is_open_type_name, parenthesize_open};
pub use narrow::{assert_is, is};
pub use number::{NumberAsserter, NumberAsserterOptions, NumberBound};
pub use object::ObjectAsserter;
pub use record::RecordAsserter;
pub use step::{decimal_places, is_step_aligned};
pub use string::{StringAsserter, StringAsserterOptions, StringPattern};
pub use union::{OptionAsserter, UnionAsserter};
pub use value::{Unknown, format_number};
