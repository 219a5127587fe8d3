//! Check combinators.
//!
//! A check is a pure function from a [`Value`] to a [`Warning`]. Atomic
//! checks test a single node's type; structural combinators (`array_of`,
//! `object`, `required`, `white_list`, `mutex`) walk into sequences and
//! mappings and prefix what their children report; logical combinators
//! (`and`, `either`) join independent checks.
//!
//! Every combinator is exhaustive: it visits all elements, keys and
//! sub-checks and reports every failure. The one early exit is `either`,
//! which stops at the first alternative that passes.
//!
//! # Example
//!
//! ```rust
//! use shapelint::check::{and, array_of, is_number, is_string, required, ObjectCheck};
//! use shapelint::Value;
//! use serde_json::json;
//!
//! let item = and([
//!     required(["uuid"]),
//!     ObjectCheck::new()
//!         .key("uuid", is_number)
//!         .key("tags", array_of(is_string))
//!         .build(),
//! ]);
//!
//! let warning = item.evaluate(&Value::from(json!({"tags": ["a", 2]})));
//! assert_eq!(
//!     warning.messages(),
//!     ["missing key 'uuid'", "key:'tags' in array expected string"]
//! );
//! ```

mod array;
mod atomic;
mod combinators;
mod object;
mod traits;

use std::fmt;
use std::sync::Arc;

use crate::error::Warning;
use crate::value::Value;
use crate::ValidationResult;

pub use array::array_of;
pub use atomic::{
    is_array, is_bool, is_double, is_null, is_number, is_object, is_string, string_enum,
};
pub use combinators::{and, either};
pub use object::{mutex, object, required, white_list, ObjectCheck};
pub use traits::Predicate;

/// A reusable, immutable check.
///
/// `Check` is a cheap-to-clone handle around any [`Predicate`]. Build one
/// tree of checks at startup and evaluate it against as many inputs as
/// needed, from as many threads as needed.
///
/// # Example
///
/// ```rust
/// use shapelint::check::{is_number, is_string, Check};
/// use shapelint::Value;
///
/// let id = Check::new(is_string).or(Check::new(is_number));
///
/// assert!(id.evaluate(&Value::from(7.0)).is_empty());
/// assert_eq!(
///     id.evaluate(&Value::from(true)).messages(),
///     ["(expected string,expected number)"]
/// );
/// ```
#[derive(Clone)]
pub struct Check(Arc<dyn Predicate>);

impl Check {
    /// Wraps a predicate.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Evaluates the value and returns every violation found.
    pub fn evaluate(&self, value: &Value) -> Warning {
        self.0.evaluate(value)
    }

    /// Returns true if the value produces no warnings.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.evaluate(value).is_empty()
    }

    /// Evaluates the value as a stillwater `Validation`.
    pub fn validate(&self, value: &Value) -> ValidationResult<()> {
        self.evaluate(value).into_validation()
    }

    /// Both this check and `other` must pass; failures of both are reported.
    pub fn and(self, other: Check) -> Check {
        and([self, other])
    }

    /// Either this check or `other` must pass.
    ///
    /// Equivalent to `either([self, other])`. Chained calls nest, so
    /// `a.or(b).or(c)` reports `((a,b),c)`; use [`either`] with all
    /// alternatives for a single flat message.
    pub fn or(self, other: Check) -> Check {
        let alternatives = vec![self, other];
        Check::new(move |value: &Value| combinators::first_passing(&alternatives, value))
    }
}

impl Predicate for Check {
    fn evaluate(&self, value: &Value) -> Warning {
        self.0.evaluate(value)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Check(..)")
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Check>();
    assert_sync::<Check>();
};
