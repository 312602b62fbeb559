//! Lexical scope chain used by the tree-walking evaluator.
//!
//! An [`Environment`] maps names to values and optionally points at an outer
//! scope. Lookup walks outward; `let` always binds in the current scope. A
//! closure captures the `Env` active at its definition site by sharing it
//! (see [`crate::value::FunctionValue`]) — since nothing mutates a binding
//! after `let`, this is safe without any cycle-breaking machinery.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

/// A reference-counted, interior-mutable handle to an [`Environment`],
/// cheap to clone and share across closures.
pub type Env = Rc<RefCell<Environment>>;

#[derive(Debug)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_binding_in_current_scope() {
        let env = Environment::new();
        env.borrow_mut().set("x", Value::Integer(5));
        assert!(matches!(env.borrow().get("x"), Some(Value::Integer(5))));
    }

    #[test]
    fn lookup_walks_outward_to_enclosing_scope() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(5));
        let inner = Environment::new_enclosed(outer);
        assert!(matches!(inner.borrow().get("x"), Some(Value::Integer(5))));
    }

    #[test]
    fn inner_binding_shadows_outer_without_mutating_it() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(5));
        let inner = Environment::new_enclosed(outer.clone());
        inner.borrow_mut().set("x", Value::Integer(10));

        assert!(matches!(inner.borrow().get("x"), Some(Value::Integer(10))));
        assert!(matches!(outer.borrow().get("x"), Some(Value::Integer(5))));
    }

    #[test]
    fn missing_binding_is_none() {
        let env = Environment::new();
        assert!(env.borrow().get("missing").is_none());
    }
}
