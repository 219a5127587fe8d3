//! Key-scoped checks over mappings.
//!
//! This module provides the structural checks that look at an object's keys:
//! [`object`] / [`ObjectCheck`] check the values under given keys, while
//! [`required`], [`white_list`] and [`mutex`] check which keys are present.
//! Value checks and presence checks are kept apart on purpose so they can be
//! combined with [`and`](super::and).

use indexmap::IndexMap;

use crate::error::Warning;
use crate::value::Value;

use super::{Check, Predicate};

const EXPECTED_OBJ: &str = "expected obj";

/// Builds a check that applies a per-key check to each listed key present.
///
/// Non-objects report `expected obj`. Keys in `table` that the input lacks
/// are skipped, and input keys missing from `table` are ignored. Messages
/// are prefixed with `key:'<key>' ` and reported in table order.
///
/// # Example
///
/// ```rust
/// use shapelint::check::{is_number, object, Check};
/// use shapelint::Value;
/// use serde_json::json;
///
/// let check = object([("uuid", Check::new(is_number))]);
///
/// assert_eq!(
///     check.evaluate(&Value::from(json!({"uuid": "1"}))).messages(),
///     ["key:'uuid' expected number"]
/// );
/// assert!(check.evaluate(&Value::from(json!({}))).is_empty());
/// ```
pub fn object<I, K>(table: I) -> Check
where
    I: IntoIterator<Item = (K, Check)>,
    K: Into<String>,
{
    let table: IndexMap<String, Check> = table
        .into_iter()
        .map(|(key, check)| (key.into(), check))
        .collect();

    Check::new(move |value: &Value| -> Warning {
        let Some(obj) = value.as_object() else {
            return Warning::single(EXPECTED_OBJ);
        };

        table
            .iter()
            .filter_map(|(key, check)| {
                obj.get(key).map(|field| {
                    check
                        .evaluate(field)
                        .prefixed(|msg| format!("key:'{}' {}", key, msg))
                })
            })
            .collect()
    })
}

/// Builder for [`object`] checks that keeps declaration order.
///
/// Declaring the same key twice replaces the earlier check but keeps its
/// original position.
///
/// # Example
///
/// ```rust
/// use shapelint::check::{array_of, is_bool, is_string, ObjectCheck};
/// use shapelint::Value;
/// use serde_json::json;
///
/// let check = ObjectCheck::new()
///     .key("name", is_string)
///     .key("tags", array_of(is_string))
///     .key("enabled", is_bool)
///     .build();
///
/// let warning = check.evaluate(&Value::from(json!({
///     "enabled": "yes",
///     "name": 4
/// })));
/// assert_eq!(
///     warning.messages(),
///     ["key:'name' expected string", "key:'enabled' expected bool"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectCheck {
    keys: IndexMap<String, Check>,
}

impl ObjectCheck {
    /// Creates a builder with no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the check applied to `name` when present.
    pub fn key<P>(mut self, name: impl Into<String>, check: P) -> Self
    where
        P: Predicate + 'static,
    {
        self.keys.insert(name.into(), Check::new(check));
        self
    }

    /// Returns the number of declared keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no keys have been declared.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Finishes the builder as an [`object`] check.
    pub fn build(self) -> Check {
        object(self.keys)
    }
}

impl From<ObjectCheck> for Check {
    fn from(builder: ObjectCheck) -> Self {
        builder.build()
    }
}

/// Builds a check that every one of `keys` is present.
///
/// Each absent key reports `missing key '<key>'`, in the order given.
pub fn required<I, S>(keys: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let keys = collect_keys(keys);

    Check::new(move |value: &Value| -> Warning {
        let Some(obj) = value.as_object() else {
            return Warning::single(EXPECTED_OBJ);
        };

        keys.iter()
            .filter(|key| !obj.contains_key(key.as_str()))
            .map(|key| Warning::single(format!("missing key '{}'", key)))
            .collect()
    })
}

/// Builds a check that no keys other than `keys` are present.
///
/// Each extra key reports `unexpected key '<key>'`, in the input's key order.
pub fn white_list<I, S>(keys: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let keys = collect_keys(keys);

    Check::new(move |value: &Value| -> Warning {
        let Some(obj) = value.as_object() else {
            return Warning::single(EXPECTED_OBJ);
        };

        obj.keys()
            .filter(|key| !keys.contains(*key))
            .map(|key| Warning::single(format!("unexpected key '{}'", key)))
            .collect()
    })
}

/// Builds a check that at most one of `keys` is present.
///
/// When two or more are present a single message lists them in the order
/// given here, e.g. `mutually exclusive keys found a,b`.
///
/// # Example
///
/// ```rust
/// use shapelint::check::mutex;
/// use shapelint::Value;
/// use serde_json::json;
///
/// let check = mutex(["a", "b", "c"]);
///
/// assert!(check.evaluate(&Value::from(json!({"b": 1}))).is_empty());
/// assert_eq!(
///     check.evaluate(&Value::from(json!({"c": 1, "a": 2}))).messages(),
///     ["mutually exclusive keys found a,c"]
/// );
/// ```
pub fn mutex<I, S>(keys: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();

    Check::new(move |value: &Value| -> Warning {
        let Some(obj) = value.as_object() else {
            return Warning::single(EXPECTED_OBJ);
        };

        let found: Vec<&str> = keys
            .iter()
            .filter(|key| obj.contains_key(key.as_str()))
            .map(String::as_str)
            .collect();

        Warning::when(
            found.len() > 1,
            format!("mutually exclusive keys found {}", found.join(",")),
        )
    })
}

// Duplicates collapse so a key listed twice is reported once.
fn collect_keys<I, S>(keys: I) -> indexmap::IndexSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keys.into_iter().map(Into::into).collect()
}
