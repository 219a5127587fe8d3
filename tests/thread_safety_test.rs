//! Checks and registries are shared across threads without locking.

use serde_json::json;
use shapelint::check::{and, array_of, is_number, is_string, required, ObjectCheck};
use shapelint::{CheckRegistry, Value};
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_evaluation_of_one_check() {
    let check = and([
        required(["id"]),
        ObjectCheck::new()
            .key("id", is_number)
            .key("tags", array_of(is_string))
            .build(),
    ]);

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let check = check.clone();
            thread::spawn(move || {
                let valid = Value::from(json!({"id": i, "tags": ["t"]}));
                let invalid = Value::from(json!({"tags": [i]}));

                assert!(check.evaluate(&valid).is_empty());
                assert_eq!(
                    check.evaluate(&invalid).messages(),
                    ["missing key 'id'", "key:'tags' in array expected string"]
                );
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registry_access() {
    let registry = Arc::new(CheckRegistry::new());
    registry
        .register("Id", ObjectCheck::new().key("id", is_number).build())
        .unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let warning = registry
                    .evaluate("Id", &Value::from(json!({"id": i})))
                    .unwrap();
                assert!(warning.is_empty());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registration() {
    let registry = CheckRegistry::new();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry
                    .register(format!("check{}", i), required([format!("k{}", i)]))
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 10);
}
