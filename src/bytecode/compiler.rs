//! AST-to-bytecode compiler.
//!
//! Walks the same [`crate::ast`] the tree-walking evaluator does, but rather
//! than computing values directly, emits an [`Instructions`] stream plus a
//! constant pool for the [`super::vm::Vm`] to execute. Only integer literals
//! and `+` emit any code; every other AST form silently produces nothing —
//! only an unsupported infix *operator* is a compile error.

use std::fmt;

use super::code::{make, Instructions, Opcode};
use crate::ast::{Expr, ExprKind, Program, Stmt, StmtKind};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub message: String,
}

impl CompileError {
    fn unknown_operator(operator: &str) -> Self {
        CompileError {
            message: format!("unknown operator {operator}"),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CompileError {}

#[derive(Default)]
pub struct Compiler {
    instructions: Instructions,
    constants: Vec<Value>,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler::default()
    }

    pub fn compile(&mut self, program: &Program) -> Result<(), CompileError> {
        for stmt in &program.statements {
            self.compile_statement(stmt)?;
        }
        Ok(())
    }

    pub fn instructions(&self) -> &Instructions {
        &self.instructions
    }

    pub fn constants(&self) -> &[Value] {
        &self.constants
    }

    fn compile_statement(&mut self, stmt: &Stmt) -> Result<(), CompileError> {
        match &stmt.kind {
            StmtKind::Expr(expr) => self.compile_expression(expr),
            // Unmatched statement forms emit no code, same as the reference
            // compiler's switch with no default case.
            StmtKind::Let { .. } | StmtKind::Return { .. } => Ok(()),
            StmtKind::Block(block) => {
                for stmt in &block.statements {
                    self.compile_statement(stmt)?;
                }
                Ok(())
            }
        }
    }

    fn compile_expression(&mut self, expr: &Expr) -> Result<(), CompileError> {
        match &expr.kind {
            ExprKind::IntLit(value) => {
                let constant = self.add_constant(Value::Integer(*value));
                self.emit(Opcode::Constant, &[constant]);
                Ok(())
            }
            ExprKind::Infix {
                left,
                operator,
                right,
            } => {
                self.compile_expression(left)?;
                self.compile_expression(right)?;
                match operator.as_str() {
                    "+" => {
                        self.emit(Opcode::Add, &[]);
                        Ok(())
                    }
                    other => Err(CompileError::unknown_operator(other)),
                }
            }
            // Every other expression form emits no code — this is the
            // boundary of the minimal bytecode back-end, not an error.
            _ => Ok(()),
        }
    }

    fn add_constant(&mut self, value: Value) -> usize {
        self.constants.push(value);
        self.constants.len() - 1
    }

    fn emit(&mut self, op: Opcode, operands: &[usize]) -> usize {
        let position = self.instructions.len();
        self.instructions.extend(make(op, operands));
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn compile_input(input: &str) -> Compiler {
        let mut parser = Parser::new(input);
        let program = parser.parse_program();
        assert!(parser.errors.is_empty(), "parse errors: {:?}", parser.errors);
        let mut compiler = Compiler::new();
        compiler.compile(&program).expect("compile should succeed");
        compiler
    }

    #[test]
    fn compiles_integer_addition() {
        let compiler = compile_input("1 + 2");
        assert!(matches!(compiler.constants(), [Value::Integer(1), Value::Integer(2)]));
        let mut expected = make(Opcode::Constant, &[0]);
        expected.extend(make(Opcode::Constant, &[1]));
        expected.extend(make(Opcode::Add, &[]));
        assert_eq!(compiler.instructions(), &expected);
    }

    #[test]
    fn unsupported_operator_is_a_compile_error() {
        let mut parser = Parser::new("1 - 2");
        let program = parser.parse_program();
        let mut compiler = Compiler::new();
        let err = compiler.compile(&program).unwrap_err();
        assert_eq!(err.message, "unknown operator -");
    }

    #[test]
    fn let_statement_compiles_to_no_code() {
        let compiler = compile_input("let x = 1;");
        assert!(compiler.instructions().is_empty());
        assert!(compiler.constants().is_empty());
    }

    #[test]
    fn unhandled_expression_forms_compile_to_no_code() {
        let compiler = compile_input("foobar");
        assert!(compiler.instructions().is_empty());
    }
}
