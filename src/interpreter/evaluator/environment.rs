use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Maps identifiers to their current values.
///
/// Names are case-sensitive and unique; assigning to an existing name
/// replaces its value.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::environment::Environment, value::core::Value};
///
/// let mut env = Environment::default();
/// env.assign("x", Value::Integer(1));
/// env.assign("x", Value::Integer(2));
///
/// assert_eq!(env.get("x"), Some(&Value::Integer(2)));
/// assert_eq!(env.get("X"), None);
/// assert_eq!(env.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, returning the value it replaced, if any.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over every binding in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}
