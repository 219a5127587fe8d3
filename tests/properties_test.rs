//! Property-based tests for the warning monoid and check laws.

use proptest::prelude::*;
use shapelint::check::{array_of, is_string, required, white_list, Check};
use shapelint::{Value, Warning};
use stillwater::Semigroup;

fn arb_warning() -> impl Strategy<Value = Warning> {
    prop::collection::vec("[a-z ',]{0,12}", 0..5).prop_map(Warning::from)
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec(("[a-c]", inner), 0..4)
                .prop_map(|pairs| pairs.into_iter().collect::<Value>()),
        ]
    })
}

proptest! {
    #[test]
    fn concat_is_associative(a in arb_warning(), b in arb_warning(), c in arb_warning()) {
        let left = a.clone().concat(b.clone()).concat(c.clone());
        let right = a.concat(b.concat(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn empty_is_identity(a in arb_warning()) {
        prop_assert_eq!(Warning::empty().concat(a.clone()), a.clone());
        prop_assert_eq!(a.clone().concat(Warning::empty()), a.clone());
        prop_assert_eq!(a.clone().combine(Warning::empty()), a);
    }

    #[test]
    fn prefixed_preserves_count_and_order(a in arb_warning()) {
        let prefixed = a.clone().with_prefix("in array ");
        prop_assert_eq!(prefixed.len(), a.len());
        for (p, m) in prefixed.iter().zip(a.iter()) {
            prop_assert_eq!(p, format!("in array {}", m));
        }
    }

    #[test]
    fn array_of_reports_one_message_per_failing_element(items in prop::collection::vec(arb_scalar(), 0..20)) {
        let failing = items.iter().filter(|item| item.as_str().is_none()).count();
        let warning = array_of(is_string).evaluate(&Value::from(items));

        prop_assert_eq!(warning.len(), failing);
        prop_assert!(warning.iter().all(|msg| msg == "in array expected string"));
    }

    #[test]
    fn evaluation_is_total_and_pure(value in arb_value()) {
        let check = Check::new(is_string)
            .or(array_of(required(["a"])))
            .and(white_list(["a", "b"]));

        let before = value.clone();
        let first = check.evaluate(&value);
        let second = check.evaluate(&value);

        prop_assert_eq!(&value, &before);
        prop_assert_eq!(first, second);
    }
}
