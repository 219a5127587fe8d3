//! Element-scoped checks over sequences.

use crate::error::Warning;
use crate::value::Value;

use super::{Check, Predicate};

/// Builds a check that every element of a sequence passes `check`.
///
/// Non-sequences report `expected array`. Every element is visited, and each
/// message from a failing element is prefixed with `in array `, so the
/// number of messages grows with the number of failing elements.
///
/// # Example
///
/// ```rust
/// use shapelint::check::{array_of, is_string};
/// use shapelint::Value;
/// use serde_json::json;
///
/// let names = array_of(is_string);
///
/// assert!(names.evaluate(&Value::from(json!(["a", "b"]))).is_empty());
/// assert_eq!(
///     names.evaluate(&Value::from(json!([1, "b", 2]))).messages(),
///     ["in array expected string", "in array expected string"]
/// );
/// ```
pub fn array_of<P>(check: P) -> Check
where
    P: Predicate + 'static,
{
    Check::new(move |value: &Value| -> Warning {
        match value.as_array() {
            None => Warning::single("expected array"),
            Some(items) => items
                .iter()
                .map(|item| check.evaluate(item).with_prefix("in array "))
                .collect(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{is_number, string_enum};
    use serde_json::json;

    #[test]
    fn test_empty_array_passes() {
        assert!(array_of(is_number).evaluate(&Value::from(json!([]))).is_empty());
    }

    #[test]
    fn test_non_array() {
        let check = array_of(is_number);
        assert_eq!(
            check.evaluate(&Value::from(json!({"0": 1}))),
            Warning::single("expected array")
        );
        assert_eq!(check.evaluate(&Value::Null), Warning::single("expected array"));
    }

    #[test]
    fn test_nested_arrays_stack_prefixes() {
        let check = array_of(array_of(is_number));
        let warning = check.evaluate(&Value::from(json!([[1], [2, "x"], 3])));

        assert_eq!(
            warning.messages(),
            ["in array in array expected number", "in array expected array"]
        );
    }

    #[test]
    fn test_accepts_composed_check() {
        let check = array_of(string_enum(["on", "off"]).unwrap());
        let warning = check.evaluate(&Value::from(json!(["on", "dim"])));

        assert_eq!(warning.messages(), ["in array expected one of [on off]"]);
    }
}
