//! Runtime value model shared by the tree-walking evaluator and the
//! bytecode VM.
//!
//! Values are immutable leaves or immutable composites — nothing mutates a
//! value cell after construction, so sharing one behind an [`Rc`] instead of
//! cloning its contents is always safe. `ReturnMarker` and `ErrorMsg` are
//! internal sentinels used to unwind evaluation; they are produced by
//! [`crate::evaluator`] and never appear in a value a caller constructs by
//! hand.
//!
//! # See Also
//!
//! * [`crate::environment`] - name-to-value scope chain
//! * [`crate::evaluator`] - produces and consumes these values

mod hash_key;

pub use hash_key::HashKey;

use std::fmt;
use std::rc::Rc;

use crate::ast::BlockStatement;
use crate::environment::Env;

/// A bound function: its parameter names, body, and the environment active
/// at its point of definition (this is what makes it a closure).
#[derive(Debug)]
pub struct FunctionValue {
    pub params: Vec<String>,
    pub body: BlockStatement,
    pub env: Env,
}

pub type BuiltinFn = fn(&[Value]) -> Value;

#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    /// Unwinds block evaluation up to a function-call boundary. Never
    /// escapes `Program` evaluation — see [`crate::evaluator`].
    ReturnMarker(Box<Value>),
    /// Short-circuits evaluation. Detected only by tag, never by message
    /// content.
    ErrorMsg(String),
    Function(Rc<FunctionValue>),
    StringV(Rc<str>),
    Builtin(BuiltinFn),
    Array(Rc<Vec<Value>>),
    Hash(Rc<std::collections::HashMap<HashKey, (Value, Value)>>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::ReturnMarker(_) => "RETURN_VALUE",
            Value::ErrorMsg(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::StringV(_) => "STRING",
            Value::Builtin(_) => "BUILTIN",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }

    /// Truthiness used by `if` conditions and `!`: everything is truthy
    /// except `false` and `null`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::ErrorMsg(_))
    }

    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Boolean(b) => Some(HashKey::from_bool(*b)),
            Value::Integer(i) => Some(HashKey::from_i64(*i)),
            Value::StringV(s) => Some(HashKey::from_str(s)),
            _ => None,
        }
    }

    /// The value's `Inspect()` form, used by the REPL and as the test
    /// oracle for evaluator scenarios. See spec §6.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::ReturnMarker(inner) => write!(f, "{inner}"),
            Value::ErrorMsg(msg) => write!(f, "ERROR: {msg}"),
            Value::StringV(s) => write!(f, "{s}"),
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Array(elements) => {
                let joined: Vec<String> = elements.iter().map(|v| v.inspect()).collect();
                write!(f, "[{}]", joined.join(", "))
            }
            Value::Hash(pairs) => {
                let joined: Vec<String> = pairs
                    .values()
                    .map(|(k, v)| format!("{}: {}", k.inspect(), v.inspect()))
                    .collect();
                write!(f, "{{{}}}", joined.join(", "))
            }
            Value::Function(func) => {
                write!(f, "fn({}) {{\n{}\n", func.params.join(","), func.body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_booleans_inspect_plainly() {
        assert_eq!(Value::Integer(5).inspect(), "5");
        assert_eq!(Value::Boolean(true).inspect(), "true");
        assert_eq!(Value::Null.inspect(), "null");
    }

    #[test]
    fn error_inspects_with_prefix() {
        assert_eq!(
            Value::ErrorMsg("boom".into()).inspect(),
            "ERROR: boom"
        );
    }

    #[test]
    fn array_inspects_comma_space_joined() {
        let arr = Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2)]));
        assert_eq!(arr.inspect(), "[1, 2]");
    }

    #[test]
    fn truthiness_excludes_only_false_and_null() {
        assert!(Value::Integer(0).is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(Value::Boolean(true).is_truthy());
    }

    #[test]
    fn only_bool_int_string_are_hashable() {
        assert!(Value::Boolean(true).hash_key().is_some());
        assert!(Value::Integer(5).hash_key().is_some());
        assert!(Value::StringV("x".into()).hash_key().is_some());
        assert!(Value::Null.hash_key().is_none());
    }
}
