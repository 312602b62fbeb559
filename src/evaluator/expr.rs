//! Expression evaluation.

use std::rc::Rc;

use super::operators::{eval_index_expression, eval_infix_expression, eval_prefix_expression};
use super::{eval_block_statement, native_bool, NULL};
use crate::ast::{Expr, ExprKind};
use crate::environment::{Env, Environment};
use crate::value::{FunctionValue, Value};

pub(super) fn eval_expression(expr: &Expr, env: &Env) -> Value {
    match &expr.kind {
        ExprKind::Ident(name) => env
            .borrow()
            .get(name)
            .unwrap_or_else(|| Value::ErrorMsg(format!("identifier not found: {name}"))),
        ExprKind::IntLit(value) => Value::Integer(*value),
        ExprKind::StringLit(value) => Value::StringV(Rc::from(value.as_str())),
        ExprKind::BoolLit(value) => native_bool(*value),
        ExprKind::ArrayLit(elements) => {
            let mut evaluated = Vec::with_capacity(elements.len());
            for element in elements {
                let value = eval_expression(element, env);
                if value.is_error() {
                    return value;
                }
                evaluated.push(value);
            }
            Value::Array(Rc::new(evaluated))
        }
        ExprKind::Index { left, index } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
        ExprKind::Prefix { operator, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(operator, right)
        }
        ExprKind::Infix {
            left,
            operator,
            right,
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(operator, left, right)
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                eval_block_statement(&consequence.statements, env)
            } else if let Some(alternative) = alternative {
                eval_block_statement(&alternative.statements, env)
            } else {
                NULL
            }
        }
        ExprKind::Fn { params, body } => Value::Function(Rc::new(FunctionValue {
            params: params.clone(),
            body: body.clone(),
            env: env.clone(),
        })),
        ExprKind::Call {
            function,
            arguments,
        } => eval_call_expression(function, arguments, env),
    }
}

fn eval_call_expression(function: &Expr, arguments: &[Expr], env: &Env) -> Value {
    let function = eval_expression(function, env);
    if function.is_error() {
        return function;
    }

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        let value = eval_expression(argument, env);
        if value.is_error() {
            return value;
        }
        args.push(value);
    }

    apply_function(function, &args)
}

fn apply_function(function: Value, args: &[Value]) -> Value {
    match function {
        Value::Function(func) => {
            let call_env = Environment::new_enclosed(func.env.clone());
            for (param, arg) in func.params.iter().zip(args.iter()) {
                call_env.borrow_mut().set(param.clone(), arg.clone());
            }
            let result = eval_block_statement(&func.body.statements, &call_env);
            unwrap_return_value(result)
        }
        Value::Builtin(builtin) => builtin(args),
        other => Value::ErrorMsg(format!("not a function: {}", other.type_name())),
    }
}

fn unwrap_return_value(value: Value) -> Value {
    match value {
        Value::ReturnMarker(inner) => *inner,
        other => other,
    }
}
