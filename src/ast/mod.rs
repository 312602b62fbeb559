//! Abstract syntax tree produced by the parser and consumed by the
//! evaluator and compiler.
//!
//! # Structure
//!
//! - [`Program`] - the root node, an ordered sequence of statements
//! - [`Stmt`] / [`StmtKind`] - `let`, `return`, expression, and block statements
//! - [`BlockStatement`] - a brace-delimited statement sequence, held directly
//!   by `if`/`fn` expressions
//! - [`Expr`] / [`ExprKind`] - identifiers, literals, operators, and control flow
//!
//! Every node retains the token it was parsed from, which both [`std::fmt::Display`]
//! (canonical pretty-printing) and diagnostics rely on.
//!
//! # See Also
//!
//! * [`crate::parser`] - produces the AST from tokens
//! * [`crate::evaluator`] - walks the AST directly
//! * [`crate::bytecode`] - compiles the AST to bytecode

mod expr;
mod program;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use program::Program;
pub use stmt::{BlockStatement, Stmt, StmtKind};
