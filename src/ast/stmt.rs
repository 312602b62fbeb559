use std::fmt;

use crate::ast::expr::Expr;
use crate::token::Token;

/// A statement node: its originating token plus the statement kind.
#[derive(Debug, Clone)]
pub struct Stmt {
    pub token: Token,
    pub kind: StmtKind,
}

impl Stmt {
    pub fn new(token: Token, kind: StmtKind) -> Self {
        Stmt { token, kind }
    }
}

#[derive(Debug, Clone)]
pub enum StmtKind {
    Let { name: String, value: Expr },
    Return { value: Expr },
    Expr(Expr),
    Block(BlockStatement),
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {name} = {value};"),
            StmtKind::Return { value } => write!(f, "return {value};"),
            StmtKind::Expr(expr) => write!(f, "{expr}"),
            StmtKind::Block(block) => write!(f, "{block}"),
        }
    }
}

/// A brace-delimited sequence of statements: the body of an `if` arm or a
/// function. Distinct from [`Stmt`] so `If`/`Fn` expressions can hold one
/// directly without an extra layer of indirection.
#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl BlockStatement {
    pub fn new(token: Token, statements: Vec<Stmt>) -> Self {
        BlockStatement { token, statements }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
