//! Prefix and infix operator semantics.

use super::{native_bool, FALSE, NULL, TRUE};
use crate::value::Value;

pub(super) fn eval_prefix_expression(operator: &str, right: Value) -> Value {
    match operator {
        "!" => eval_bang_operator(right),
        "-" => eval_minus_prefix_operator(right),
        _ => Value::ErrorMsg(format!("unknown operator: {operator}{}", right.type_name())),
    }
}

fn eval_bang_operator(right: Value) -> Value {
    if right.is_truthy() { FALSE } else { TRUE }
}

fn eval_minus_prefix_operator(right: Value) -> Value {
    match right {
        Value::Integer(i) => Value::Integer(-i),
        other => Value::ErrorMsg(format!("unknown operator: -{}", other.type_name())),
    }
}

pub(super) fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_boolean_infix(operator, *l, *r),
        (Value::StringV(l), Value::StringV(r)) => eval_string_infix(operator, l, r),
        _ if left.type_name() != right.type_name() => Value::ErrorMsg(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => Value::ErrorMsg(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn eval_integer_infix(operator: &str, l: i64, r: i64) -> Value {
    match operator {
        "+" => Value::Integer(l + r),
        "-" => Value::Integer(l - r),
        "*" => Value::Integer(l * r),
        "/" if r == 0 => Value::ErrorMsg("division by zero".to_string()),
        "/" => Value::Integer(l / r),
        "<" => native_bool(l < r),
        ">" => native_bool(l > r),
        "==" => native_bool(l == r),
        "!=" => native_bool(l != r),
        _ => Value::ErrorMsg(format!("unknown operator: INTEGER {operator} INTEGER")),
    }
}

fn eval_boolean_infix(operator: &str, l: bool, r: bool) -> Value {
    match operator {
        "==" => native_bool(l == r),
        "!=" => native_bool(l != r),
        _ => Value::ErrorMsg(format!("unknown operator: BOOLEAN {operator} BOOLEAN")),
    }
}

fn eval_string_infix(operator: &str, l: &str, r: &str) -> Value {
    match operator {
        "+" => Value::StringV(format!("{l}{r}").into()),
        _ => Value::ErrorMsg(format!("unknown operator: STRING {operator} STRING")),
    }
}

pub(super) fn eval_index_expression(left: Value, index: Value) -> Value {
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                NULL
            } else {
                elements[*i as usize].clone()
            }
        }
        (Value::Hash(pairs), key) => match key.hash_key() {
            Some(hash_key) => pairs
                .get(&hash_key)
                .map(|(_, v)| v.clone())
                .unwrap_or(NULL),
            None => Value::ErrorMsg(format!("unusable as hash key: {}", key.type_name())),
        },
        _ => Value::ErrorMsg(format!("index operator not supported: {}", left.type_name())),
    }
}
