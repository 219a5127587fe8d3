//! # Shapelint
//!
//! Composable shape checks for JSON-like trees that report ALL violations,
//! rather than stopping at the first one.
//!
//! ## Overview
//!
//! A schema is written as a tree of small checks. Each check is a pure
//! function from a decoded [`Value`] to a [`Warning`], an ordered list of
//! human-readable messages where the empty list means valid. Structural
//! checks walk into arrays and objects and prefix what their children report
//! (`in array `, `key:'name' `), so a single evaluation explains every
//! problem in a document along with where it was found.
//!
//! ## Core Types
//!
//! - [`Value`]: the decoded tree (null, bool, number, string, array, object)
//! - [`Warning`]: zero or more failure messages, a monoid under concatenation
//! - [`Check`]: an immutable, cheaply cloned check built from the
//!   combinators in [`check`]
//! - [`CheckRegistry`]: named checks shared across threads
//! - [`lint::Linter`]: decodes JSON text and lints batches of documents
//!
//! ## Example
//!
//! ```rust
//! use shapelint::check::{
//!     and, array_of, either, is_number, is_string, mutex, required, string_enum, white_list,
//!     Check, ObjectCheck,
//! };
//! use shapelint::Value;
//! use serde_json::json;
//!
//! let check = and([
//!     required(["uuid", "kind"]),
//!     white_list(["uuid", "kind", "tags", "url", "path"]),
//!     mutex(["url", "path"]),
//!     ObjectCheck::new()
//!         .key("uuid", is_number)
//!         .key("kind", string_enum(["file", "link"]).unwrap())
//!         .key("tags", either([Check::new(is_string), array_of(is_string)]).unwrap())
//!         .build(),
//! ]);
//!
//! let warning = check.evaluate(&Value::from(json!({
//!     "kind": "dir",
//!     "url": "a",
//!     "path": "b",
//!     "tags": [1],
//!     "extra": true
//! })));
//!
//! assert_eq!(
//!     warning.messages(),
//!     [
//!         "missing key 'uuid'",
//!         "unexpected key 'extra'",
//!         "mutually exclusive keys found url,path",
//!         "key:'kind' expected one of [file link]",
//!         "key:'tags' (expected string,in array expected string)",
//!     ]
//! );
//! ```

pub mod check;
pub mod error;
pub mod lint;
pub mod registry;
pub mod value;

pub use check::{Check, ObjectCheck, Predicate};
pub use error::{CheckError, Warning};
pub use registry::{CheckRegistry, RegistryError};
pub use value::Value;

/// Type alias for validation results carrying a `Warning`.
pub type ValidationResult<T> = stillwater::Validation<T, Warning>;
