//! Atomic checks on a single node's type.

use crate::error::{CheckError, Warning};
use crate::value::Value;

use super::Check;

/// Reports `expected string` unless the value is a string.
pub fn is_string(value: &Value) -> Warning {
    Warning::when(!matches!(value, Value::String(_)), "expected string")
}

/// Reports `expected number` unless the value is a number.
///
/// Integers and floats are not told apart: `1` and `1.5` both pass.
pub fn is_number(value: &Value) -> Warning {
    Warning::when(!matches!(value, Value::Number(_)), "expected number")
}

/// Reports `expected bool` unless the value is a boolean.
pub fn is_bool(value: &Value) -> Warning {
    Warning::when(!matches!(value, Value::Bool(_)), "expected bool")
}

/// Same acceptance as [`is_number`], reported as `expected double`.
pub fn is_double(value: &Value) -> Warning {
    Warning::when(!matches!(value, Value::Number(_)), "expected double")
}

/// Reports `expected null` unless the value is null.
pub fn is_null(value: &Value) -> Warning {
    Warning::when(!value.is_null(), "expected null")
}

/// Reports `expected array` unless the value is an array.
pub fn is_array(value: &Value) -> Warning {
    Warning::when(!matches!(value, Value::Array(_)), "expected array")
}

/// Reports `expected obj` unless the value is an object.
pub fn is_object(value: &Value) -> Warning {
    Warning::when(!matches!(value, Value::Object(_)), "expected obj")
}

/// Builds a check for a string equal to one of `values`.
///
/// Non-strings report `expected string`; strings outside the set report the
/// allowed set, e.g. `expected one of [red green]`.
///
/// # Errors
///
/// Returns [`CheckError::EmptyEnum`] if `values` is empty, since no input
/// could ever satisfy the check.
///
/// # Example
///
/// ```rust
/// use shapelint::check::string_enum;
/// use shapelint::Value;
///
/// let color = string_enum(["red", "green"]).unwrap();
///
/// assert!(color.evaluate(&Value::from("red")).is_empty());
/// assert_eq!(
///     color.evaluate(&Value::from("blue")).messages(),
///     ["expected one of [red green]"]
/// );
/// assert!(string_enum(Vec::<String>::new()).is_err());
/// ```
pub fn string_enum<I, S>(values: I) -> Result<Check, CheckError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let values: Vec<String> = values.into_iter().map(Into::into).collect();
    if values.is_empty() {
        return Err(CheckError::EmptyEnum);
    }

    let expected = format!("expected one of [{}]", values.join(" "));
    Ok(Check::new(move |value: &Value| -> Warning {
        match value.as_str() {
            None => Warning::single("expected string"),
            Some(s) => Warning::when(!values.iter().any(|v| v == s), expected.as_str()),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_string() {
        assert!(is_string(&Value::from("Hello")).is_empty());
        assert_eq!(is_string(&Value::from(1.0)), Warning::single("expected string"));
    }

    #[test]
    fn test_is_number_accepts_ints_and_floats() {
        assert!(is_number(&Value::from(json!(1))).is_empty());
        assert!(is_number(&Value::from(json!(1.25))).is_empty());
        assert_eq!(is_number(&Value::from("1")), Warning::single("expected number"));
    }

    #[test]
    fn test_is_bool() {
        assert!(is_bool(&Value::from(false)).is_empty());
        assert_eq!(is_bool(&Value::Null), Warning::single("expected bool"));
    }

    #[test]
    fn test_is_double() {
        assert!(is_double(&Value::from(2.5)).is_empty());
        assert_eq!(is_double(&Value::from(true)), Warning::single("expected double"));
    }

    #[test]
    fn test_null_is_just_a_wrong_type() {
        assert_eq!(is_string(&Value::Null), Warning::single("expected string"));
        assert!(is_null(&Value::Null).is_empty());
        assert_eq!(is_null(&Value::from(0.0)), Warning::single("expected null"));
    }

    #[test]
    fn test_shape_predicates() {
        assert!(is_array(&Value::from(json!([]))).is_empty());
        assert_eq!(is_array(&Value::from(json!({}))), Warning::single("expected array"));
        assert!(is_object(&Value::from(json!({}))).is_empty());
        assert_eq!(is_object(&Value::from(json!([]))), Warning::single("expected obj"));
    }

    #[test]
    fn test_string_enum() {
        let check = string_enum(["a", "b", "c"]).unwrap();

        assert!(check.evaluate(&Value::from("b")).is_empty());
        assert_eq!(
            check.evaluate(&Value::from("d")),
            Warning::single("expected one of [a b c]")
        );
        assert_eq!(
            check.evaluate(&Value::from(1.0)),
            Warning::single("expected string")
        );
    }

    #[test]
    fn test_string_enum_is_case_sensitive() {
        let check = string_enum(["GET"]).unwrap();
        assert_eq!(check.evaluate(&Value::from("get")).len(), 1);
    }

    #[test]
    fn test_empty_string_enum_is_rejected() {
        let result = string_enum(Vec::<&str>::new());
        assert_eq!(result.unwrap_err(), CheckError::EmptyEnum);
    }
}
