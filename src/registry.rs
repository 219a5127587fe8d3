//! Named check storage.
//!
//! This module provides the [`CheckRegistry`] type that stores checks under
//! names, so a schema built once at startup can be looked up and evaluated
//! by name from anywhere in a program.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::check::Check;
use crate::error::Warning;
use crate::value::Value;

type CheckMap = Arc<RwLock<HashMap<String, Check>>>;

/// A thread-safe registry of named checks.
///
/// Cloning a registry is cheap and yields a handle to the same storage.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>`:
/// - Multiple threads can look up and evaluate checks concurrently
/// - Registration operations are serialized
///
/// # Example
///
/// ```rust
/// use shapelint::check::{and, is_number, required, ObjectCheck};
/// use shapelint::{CheckRegistry, Value};
/// use serde_json::json;
///
/// let registry = CheckRegistry::new();
/// registry
///     .register("item", and([
///         required(["uuid"]),
///         ObjectCheck::new().key("uuid", is_number).build(),
///     ]))
///     .unwrap();
///
/// let warning = registry.evaluate("item", &Value::from(json!({}))).unwrap();
/// assert_eq!(warning.messages(), ["missing key 'uuid'"]);
/// ```
#[derive(Clone, Default)]
pub struct CheckRegistry {
    checks: CheckMap,
}

impl CheckRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a check under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    pub fn register(&self, name: impl Into<String>, check: Check) -> Result<(), RegistryError> {
        let name = name.into();
        let mut checks = self.checks.write();

        if checks.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(check = %name, "registered check");
        checks.insert(name, check);
        Ok(())
    }

    /// Retrieves a check by name.
    pub fn get(&self, name: &str) -> Option<Check> {
        self.checks.read().get(name).cloned()
    }

    /// Returns true if a check is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.checks.read().contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.checks.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.read().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.checks.read().is_empty()
    }

    /// Evaluates a value against the named check.
    ///
    /// The lock is released before evaluation starts, so long evaluations do
    /// not block registration.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::CheckNotFound` if the name doesn't exist.
    pub fn evaluate(&self, name: &str, value: &Value) -> Result<Warning, RegistryError> {
        let check = self
            .get(name)
            .ok_or_else(|| RegistryError::CheckNotFound(name.to_string()))?;

        let warning = check.evaluate(value);
        tracing::trace!(check = name, warnings = warning.len(), "evaluated check");
        Ok(warning)
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a check with a name that already exists.
    #[error("check '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to evaluate with a check name that doesn't exist.
    #[error("check '{0}' not found")]
    CheckNotFound(String),
}
