//! Tree-walking evaluator: `Eval(node, env) -> value` over the AST.
//!
//! Errors and early returns are represented as ordinary values
//! ([`Value::ErrorMsg`], [`Value::ReturnMarker`]) that propagate through
//! the same recursive-descent walk as everything else — there are no host
//! exceptions here. [`eval_program`] unwraps a top-level `ReturnMarker`;
//! [`eval_block_statement`] deliberately does not, so a `return` nested
//! inside an `if` can still escape a whole function body.
//!
//! # See Also
//!
//! * [`crate::value`] - the runtime value sum this module produces
//! * [`crate::environment`] - the scope chain bindings live in

mod expr;
mod operators;

use crate::ast::{Program, Stmt, StmtKind};
use crate::environment::Env;
use crate::value::Value;

pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

pub fn native_bool(value: bool) -> Value {
    if value { TRUE } else { FALSE }
}

/// Evaluates a whole program. Unwraps a top-level `ReturnMarker` (a bare
/// `return` at the top of a REPL line is still meaningful); an `ErrorMsg`
/// short-circuits immediately.
pub fn eval_program(program: &Program, env: &Env) -> Value {
    let mut result = NULL;
    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match result {
            Value::ReturnMarker(inner) => return *inner,
            Value::ErrorMsg(_) => return result,
            _ => {}
        }
    }
    result
}

/// Evaluates a block's statements in order. Unlike `eval_program`, a
/// `ReturnMarker` is returned as-is so the enclosing function call can
/// unwrap it once the whole call completes.
pub(crate) fn eval_block_statement(statements: &[Stmt], env: &Env) -> Value {
    let mut result = NULL;
    for stmt in statements {
        result = eval_statement(stmt, env);
        if matches!(result, Value::ReturnMarker(_) | Value::ErrorMsg(_)) {
            return result;
        }
    }
    result
}

fn eval_statement(stmt: &Stmt, env: &Env) -> Value {
    match &stmt.kind {
        StmtKind::Let { name, value } => {
            let val = expr::eval_expression(value, env);
            if val.is_error() {
                return val;
            }
            env.borrow_mut().set(name.clone(), val);
            NULL
        }
        StmtKind::Return { value } => {
            let val = expr::eval_expression(value, env);
            if val.is_error() {
                return val;
            }
            Value::ReturnMarker(Box::new(val))
        }
        StmtKind::Expr(expr) => expr::eval_expression(expr, env),
        StmtKind::Block(block) => eval_block_statement(&block.statements, env),
    }
}
