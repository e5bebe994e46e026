use crate::error::Error;
use crate::value::Value;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Storage for the variables assigned by statements.
///
/// A single table is meant to live for a whole session and be passed to
/// every statement evaluation. Values are only ever added or overwritten.
///
/// ```
/// use rafmat::{evaluate_statement, Value, Variables};
///
/// let mut variables = Variables::new();
/// assert_eq!(evaluate_statement("x = 4 * 2", &mut variables), Ok(None));
/// assert_eq!(variables.get("x"), Ok(Value::Int(8)));
/// assert!(variables.get("y").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<String, Value>,
}

impl Variables {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of the variable `name`, or a `NameError` if it was never
    /// assigned.
    pub fn get(&self, name: &str) -> Result<Value, Error> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| Error::NameError(format!("name '{}' is not defined", name)))
    }

    /// Assign `value` to `name`, overwriting any previous value
    pub fn set<S: Into<String>>(&mut self, name: S, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Check if `name` has a value
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of assigned variables
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no variable was assigned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the variables, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl From<HashMap<String, Value>> for Variables {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}

/// A variable table that can be used from multiple threads.
///
/// The lock is held for the whole evaluation of a statement, so a statement
/// never sees a partial update from another one.
#[derive(Debug, Default)]
pub struct SharedVariables {
    inner: Mutex<Variables>,
}

impl SharedVariables {
    /// Create an empty shared table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a single statement against the shared table. See
    /// [`evaluate_statement`](fn.evaluate_statement.html).
    pub fn evaluate(&self, input: &str) -> Result<Option<Value>, Error> {
        // assignments only happen after a statement succeeded, so the table is
        // consistent even when another thread panicked while holding the lock
        let mut variables = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        crate::evaluate_statement(input, &mut variables)
    }

    /// Copy of the current content of the table
    #[must_use]
    pub fn snapshot(&self) -> Variables {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl From<Variables> for SharedVariables {
    fn from(variables: Variables) -> Self {
        Self {
            inner: Mutex::new(variables),
        }
    }
}
