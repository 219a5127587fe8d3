//! Logical combinators.
//!
//! - [`and`]: every check must pass; failures from all of them are reported.
//! - [`either`]: at least one check must pass; stops at the first that does.

use crate::error::{CheckError, Warning};
use crate::value::Value;

use super::Check;

/// Builds the conjunction of `checks`.
///
/// Every check runs, in order, and the result is the concatenation of what
/// they report. An empty list of checks accepts everything.
///
/// # Example
///
/// ```rust
/// use shapelint::check::{and, is_number, required, ObjectCheck};
/// use shapelint::Value;
/// use serde_json::json;
///
/// let check = and([
///     required(["uuid"]),
///     ObjectCheck::new().key("uuid", is_number).build(),
/// ]);
///
/// assert!(check.evaluate(&Value::from(json!({"uuid": 1.0}))).is_empty());
/// assert_eq!(
///     check.evaluate(&Value::from(json!({}))).messages(),
///     ["missing key 'uuid'"]
/// );
/// ```
pub fn and<I>(checks: I) -> Check
where
    I: IntoIterator<Item = Check>,
{
    let checks: Vec<Check> = checks.into_iter().collect();

    Check::new(move |value: &Value| -> Warning {
        checks.iter().map(|check| check.evaluate(value)).collect()
    })
}

/// Builds the disjunction of `checks`.
///
/// Alternatives are tried in order and the first one that passes makes the
/// whole check pass. If none pass, every message from every alternative is
/// joined with `,` inside parentheses into one message, e.g.
/// `(expected string,expected array)`.
///
/// # Errors
///
/// Returns [`CheckError::EmptyEither`] if `checks` is empty, since no input
/// could ever satisfy the check.
///
/// # Example
///
/// ```rust
/// use shapelint::check::{array_of, either, is_string, Check};
/// use shapelint::Value;
/// use serde_json::json;
///
/// let check = either([Check::new(is_string), array_of(is_string)]).unwrap();
///
/// assert!(check.evaluate(&Value::from(json!(["a"]))).is_empty());
/// assert_eq!(
///     check.evaluate(&Value::from(json!({}))).messages(),
///     ["(expected string,expected array)"]
/// );
/// ```
pub fn either<I>(checks: I) -> Result<Check, CheckError>
where
    I: IntoIterator<Item = Check>,
{
    let checks: Vec<Check> = checks.into_iter().collect();
    if checks.is_empty() {
        return Err(CheckError::EmptyEither);
    }

    Ok(Check::new(move |value: &Value| first_passing(&checks, value)))
}

pub(super) fn first_passing(checks: &[Check], value: &Value) -> Warning {
    let mut reasons = Vec::new();

    for check in checks {
        let warning = check.evaluate(value);
        if warning.is_empty() {
            return Warning::empty();
        }
        reasons.extend(warning);
    }

    Warning::single(format!("({})", reasons.join(",")))
}
