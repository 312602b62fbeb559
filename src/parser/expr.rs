//! Expression parsing: the Pratt precedence-climbing core.
//!
//! `parse_expression` is the heart of the parser. It looks up a prefix
//! parselet for the current token, runs it, then repeatedly looks for an
//! infix parselet on the *peek* token as long as that operator binds at
//! least as tightly as the precedence floor passed in.

use super::error::ParseError;
use super::{Parser, Precedence};
use crate::ast::{Expr, ExprKind};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while self.peek_token.kind != TokenKind::Semicolon && precedence < self.peek_precedence() {
            if !has_infix(&self.peek_token.kind) {
                return Some(left);
            }
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur_token.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean()),
            TokenKind::Str => Some(self.parse_string_literal()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            _ => {
                self.errors.push(ParseError::no_prefix_parse_fn(&self.cur_token));
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match self.cur_token.kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Slash
            | TokenKind::Asterisk
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => self.parse_infix_expression(left),
            TokenKind::LParen => self.parse_call_expression(left),
            TokenKind::LBracket => self.parse_index_expression(left),
            _ => Some(left),
        }
    }

    fn parse_identifier(&mut self) -> Expr {
        let token = self.cur_token.clone();
        let name = token.literal.clone();
        Expr::new(token, ExprKind::Ident(name))
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::new(token, ExprKind::IntLit(value))),
            Err(_) => {
                self.errors.push(ParseError {
                    message: format!("could not parse {:?} as integer", token.literal),
                    span: token.span,
                });
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Expr {
        let token = self.cur_token.clone();
        let value = token.kind == TokenKind::True;
        Expr::new(token, ExprKind::BoolLit(value))
    }

    fn parse_string_literal(&mut self) -> Expr {
        let token = self.cur_token.clone();
        let value = token.literal.clone();
        Expr::new(token, ExprKind::StringLit(value))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::new(
            token,
            ExprKind::Prefix {
                operator,
                right: Box::new(right),
            },
        ))
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expr::new(
            token,
            ExprKind::Infix {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            },
        ))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::new(token, ExprKind::ArrayLit(elements)))
    }

    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.cur_token.clone();
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }
        Some(Expr::new(
            token,
            ExprKind::Index {
                left: Box::new(left),
                index: Box::new(index),
            },
        ))
    }

    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::new(
            token,
            ExprKind::Call {
                function: Box::new(function),
                arguments,
            },
        ))
    }

    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_token.kind == end {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token.kind == TokenKind::Comma {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token.kind == TokenKind::Else {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::new(
            token,
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
        ))
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_function_parameters()?;
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();
        Some(Expr::new(token, ExprKind::Fn { params, body }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut identifiers = Vec::new();

        if self.peek_token.kind == TokenKind::RParen {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(self.cur_token.literal.clone());

        while self.peek_token.kind == TokenKind::Comma {
            self.next_token();
            self.next_token();
            identifiers.push(self.cur_token.literal.clone());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(identifiers)
    }
}

fn has_infix(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Slash
            | TokenKind::Asterisk
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::LParen
            | TokenKind::LBracket
    )
}
