//! Parse error values.
//!
//! Each mismatch the parser hits produces one `ParseError` and is appended
//! to the parser's error log — parsing never aborts on error (see
//! [`crate::parser::Parser::parse`]). The REPL renders these as plain
//! tab-prefixed lines; the `run` subcommand renders them as `ariadne`
//! span reports instead, which is why the span rides along even though
//! the REPL ignores it.

use crate::token::{Span, Token, TokenKind};

#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    pub fn expected_next_token(expected: &TokenKind, got: &Token) -> Self {
        ParseError {
            message: format!(
                "expected next token to be {expected:?}, got {:?} instead",
                got.kind
            ),
            span: got.span,
        }
    }

    pub fn no_prefix_parse_fn(got: &Token) -> Self {
        ParseError {
            message: format!("no prefix parse function for {:?} found", got.kind),
            span: got.span,
        }
    }
}
