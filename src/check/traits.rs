//! The predicate trait shared by every check.
//!
//! This module provides the [`Predicate`] trait that lets plain functions,
//! closures and composed [`Check`](super::Check) values be used
//! interchangeably wherever a nested check is expected.

use crate::error::Warning;
use crate::value::Value;

/// Something that can inspect a [`Value`] and report what is wrong with it.
///
/// A predicate must be total: every input, whatever its shape, yields a
/// [`Warning`], empty when the value is acceptable. Predicates never mutate
/// their input and hold no per-evaluation state, so one predicate can be
/// evaluated from many threads at once.
///
/// Any `Fn(&Value) -> Warning` is a predicate, which is how the atomic checks
/// such as [`is_string`](super::is_string) are written:
///
/// ```rust
/// use shapelint::{Predicate, Value, Warning};
///
/// fn is_positive(value: &Value) -> Warning {
///     Warning::when(!value.as_f64().is_some_and(|n| n > 0.0), "expected positive")
/// }
///
/// assert!(is_positive.evaluate(&Value::from(3.0)).is_empty());
/// assert_eq!(is_positive.evaluate(&Value::from(-1.0)).len(), 1);
/// ```
pub trait Predicate: Send + Sync {
    /// Evaluates the value and returns every violation found.
    fn evaluate(&self, value: &Value) -> Warning;
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> Warning + Send + Sync,
{
    fn evaluate(&self, value: &Value) -> Warning {
        self(value)
    }
}
