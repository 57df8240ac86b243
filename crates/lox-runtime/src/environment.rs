//! Chained variable scopes
//!
//! An [`Environment`] maps names to values and optionally links to the
//! scope that encloses it. The chain is rooted at the global scope; each
//! executing block pushes one child scope for its duration.

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Shared handle to a scope in the chain
pub type EnvRef = Rc<RefCell<Environment>>;

/// Lookup failure in the scope chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    /// Name is not bound in any scope of the chain
    #[error("Variable {name} not defined")]
    Undefined { name: String },
}

/// A single scope plus a link to its enclosing scope
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    /// Create a root (global) scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child scope of `enclosing`
    pub fn with_enclosing(enclosing: EnvRef) -> Self {
        Self {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    /// Wrap in a shared handle
    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    /// Bind `name` in this scope, shadowing any outer binding
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Look `name` up, innermost scope first
    pub fn get(&self, name: &str) -> Result<Value, EnvironmentError> {
        if let Some(value) = self.values.get(name) {
            return Ok(value.clone());
        }
        match &self.enclosing {
            Some(enclosing) => enclosing.borrow().get(name),
            None => Err(EnvironmentError::Undefined {
                name: name.to_string(),
            }),
        }
    }

    /// Overwrite an existing binding, innermost scope first. Never creates one.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), EnvironmentError> {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.enclosing {
            Some(enclosing) => enclosing.borrow_mut().assign(name, value),
            None => Err(EnvironmentError::Undefined {
                name: name.to_string(),
            }),
        }
    }

    /// Bindings of this scope only
    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    /// The enclosing scope, if any
    pub fn enclosing(&self) -> Option<EnvRef> {
        self.enclosing.clone()
    }
}
