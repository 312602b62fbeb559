use std::fmt;

use crate::ast::BlockStatement;
use crate::token::Token;

/// An expression node: its originating token (for pretty-printing and
/// diagnostics) plus the expression kind itself.
#[derive(Debug, Clone)]
pub struct Expr {
    pub token: Token,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(token: Token, kind: ExprKind) -> Self {
        Expr { token, kind }
    }
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    Ident(String),
    IntLit(i64),
    StringLit(String),
    BoolLit(bool),
    ArrayLit(Vec<Expr>),
    Index {
        left: Box<Expr>,
        index: Box<Expr>,
    },
    Prefix {
        operator: String,
        right: Box<Expr>,
    },
    Infix {
        left: Box<Expr>,
        operator: String,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    Fn {
        params: Vec<String>,
        body: BlockStatement,
    },
    Call {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Ident(name) => write!(f, "{name}"),
            ExprKind::IntLit(value) => write!(f, "{value}"),
            ExprKind::StringLit(value) => write!(f, "{value}"),
            ExprKind::BoolLit(value) => write!(f, "{value}"),
            ExprKind::ArrayLit(elements) => {
                let joined: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", joined.join(", "))
            }
            ExprKind::Index { left, index } => write!(f, "({left}[{index}])"),
            ExprKind::Prefix { operator, right } => write!(f, "({operator}{right})"),
            ExprKind::Infix {
                left,
                operator,
                right,
            } => write!(f, "({left} {operator} {right})"),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alt) = alternative {
                    write!(f, "else {alt}")?;
                }
                Ok(())
            }
            ExprKind::Fn { params, body } => {
                write!(f, "fn({}){{{}}}", params.join(","), body)
            }
            ExprKind::Call {
                function,
                arguments,
            } => {
                let joined: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{function}({})", joined.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Span, TokenKind};

    fn ident(name: &str) -> Expr {
        let tok = Token::new(TokenKind::Ident, name, Span::initial());
        Expr::new(tok, ExprKind::Ident(name.to_string()))
    }

    fn int(value: i64) -> Expr {
        let tok = Token::new(TokenKind::Int, value.to_string(), Span::initial());
        Expr::new(tok, ExprKind::IntLit(value))
    }

    #[test]
    fn infix_prints_fully_parenthesized() {
        let expr = Expr::new(
            Token::new(TokenKind::Plus, "+", Span::initial()),
            ExprKind::Infix {
                left: Box::new(ident("a")),
                operator: "+".into(),
                right: Box::new(ident("b")),
            },
        );
        assert_eq!(expr.to_string(), "(a + b)");
    }

    #[test]
    fn prefix_prints_fully_parenthesized() {
        let expr = Expr::new(
            Token::new(TokenKind::Minus, "-", Span::initial()),
            ExprKind::Prefix {
                operator: "-".into(),
                right: Box::new(ident("a")),
            },
        );
        assert_eq!(expr.to_string(), "(-a)");
    }

    #[test]
    fn array_literal_prints_comma_space_joined() {
        let expr = Expr::new(
            Token::new(TokenKind::LBracket, "[", Span::initial()),
            ExprKind::ArrayLit(vec![int(1), int(2)]),
        );
        assert_eq!(expr.to_string(), "[1, 2]");
    }

    #[test]
    fn index_prints_with_surrounding_parens() {
        let expr = Expr::new(
            Token::new(TokenKind::LBracket, "[", Span::initial()),
            ExprKind::Index {
                left: Box::new(ident("arr")),
                index: Box::new(ident("i")),
            },
        );
        assert_eq!(expr.to_string(), "(arr[i])");
    }
}
