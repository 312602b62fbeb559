//! Lexical analyzer: byte stream to token stream.
//!
//! The lexer is infallible. Bytes it can't classify become [`TokenKind::Illegal`]
//! tokens rather than errors — deciding what to do about an illegal byte is
//! the parser's job, not the lexer's (see [`crate::parser`]).
//!
//! # Examples
//!
//! ```
//! use wisp::lexer::Lexer;
//! use wisp::token::TokenKind;
//!
//! let mut lexer = Lexer::new("let x = 5;");
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().kind, TokenKind::Ident);
//! assert_eq!(lexer.next_token().kind, TokenKind::Assign);
//! ```
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

use crate::token::{Span, Token, TokenKind};

/// Scans UTF-8 source one ASCII byte at a time. Non-ASCII bytes are emitted
/// as `Illegal` tokens (no Unicode identifiers, per scope).
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    read_pos: usize,
    ch: u8,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.as_bytes(),
            pos: 0,
            read_pos: 0,
            ch: 0,
            line: 1,
            column: 1,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.ch == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if self.pos != self.read_pos {
            self.column += 1;
        }
        self.ch = if self.read_pos >= self.input.len() {
            0
        } else {
            self.input[self.read_pos]
        };
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_pos >= self.input.len() {
            0
        } else {
            self.input[self.read_pos]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while pred(self.ch) {
            self.read_char();
        }
        std::str::from_utf8(&self.input[start..self.pos]).expect("ASCII-only input stays valid UTF-8")
    }

    fn read_string(&mut self) -> String {
        let mut out = String::new();
        loop {
            self.read_char();
            if self.ch == b'\\' {
                self.read_char();
                match self.ch {
                    b'n' => out.push('\n'),
                    b'r' => out.push('\r'),
                    b't' => out.push('\t'),
                    b'b' => out.push('\u{8}'),
                    b'\\' => out.push('\\'),
                    b'"' => out.push('"'),
                    // Unknown escapes are dropped entirely, matching the
                    // reference lexer's behavior.
                    _ => {}
                }
                continue;
            }
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
            out.push(self.ch as char);
        }
        out
    }

    fn span_for(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    /// Produces the next token. Idempotent at EOF: once the input is
    /// exhausted, every subsequent call returns another `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);
        let start = self.pos;

        let two_char = |lexer: &mut Self, kind: TokenKind, literal: &str| {
            lexer.read_char();
            lexer.read_char();
            Token::new(kind, literal, lexer.span_for(start, line, column))
        };

        let one_char = |lexer: &mut Self, kind: TokenKind| {
            let literal = (lexer.ch as char).to_string();
            lexer.read_char();
            Token::new(kind, literal, lexer.span_for(start, line, column))
        };

        match self.ch {
            b'=' if self.peek_char() == b'=' => two_char(self, TokenKind::Eq, "=="),
            b'=' => one_char(self, TokenKind::Assign),
            b'+' => one_char(self, TokenKind::Plus),
            b'-' => one_char(self, TokenKind::Minus),
            b'!' if self.peek_char() == b'=' => two_char(self, TokenKind::NotEq, "!="),
            b'!' => one_char(self, TokenKind::Bang),
            b'*' => one_char(self, TokenKind::Asterisk),
            b'/' => one_char(self, TokenKind::Slash),
            b'<' => one_char(self, TokenKind::Lt),
            b'>' => one_char(self, TokenKind::Gt),
            b',' => one_char(self, TokenKind::Comma),
            b';' => one_char(self, TokenKind::Semicolon),
            b':' => one_char(self, TokenKind::Colon),
            b'(' => one_char(self, TokenKind::LParen),
            b')' => one_char(self, TokenKind::RParen),
            b'{' => one_char(self, TokenKind::LBrace),
            b'}' => one_char(self, TokenKind::RBrace),
            b'[' => one_char(self, TokenKind::LBracket),
            b']' => one_char(self, TokenKind::RBracket),
            b'"' => {
                let literal = self.read_string();
                // Consume the closing quote (or stop at EOF).
                self.read_char();
                Token::new(TokenKind::Str, literal, self.span_for(start, line, column))
            }
            0 => Token::new(TokenKind::Eof, "", self.span_for(start, line, column)),
            ch if is_letter(ch) => {
                let literal = self.read_while(is_letter);
                let kind = TokenKind::lookup_ident(literal);
                Token::new(kind, literal, self.span_for(start, line, column))
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_while(|c| c.is_ascii_digit());
                Token::new(TokenKind::Int, literal, self.span_for(start, line, column))
            }
            ch => one_char(self, {
                let _ = ch;
                TokenKind::Illegal
            }),
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            let done = tok.kind == TokenKind::Eof;
            out.push(tok.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn empty_input_yields_eof_immediately() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn tokenizes_basic_punctuation() {
        use TokenKind::*;
        assert_eq!(
            kinds("=+(){},;"),
            vec![Assign, Plus, LParen, RParen, LBrace, RBrace, Comma, Semicolon, Eof]
        );
    }

    #[test]
    fn two_char_operators_are_not_split() {
        use TokenKind::*;
        assert_eq!(kinds("== != = !"), vec![Eq, NotEq, Assign, Bang, Eof]);
    }

    #[test]
    fn keywords_and_identifiers() {
        use TokenKind::*;
        let mut lexer = Lexer::new("let five = fn(x) { return x; };");
        let kinds: Vec<_> = std::iter::from_fn(|| {
            let t = lexer.next_token();
            (t.kind != Eof).then_some(t.kind)
        })
        .collect();
        assert_eq!(
            kinds,
            vec![
                Let, Ident, Assign, Function, LParen, Ident, RParen, LBrace, Return, Ident,
                Semicolon, RBrace, Semicolon,
            ]
        );
    }

    #[test]
    fn identifier_immediately_followed_by_non_letter() {
        let mut lexer = Lexer::new("x)");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "x");
        assert_eq!(lexer.next_token().kind, TokenKind::RParen);
    }

    #[test]
    fn integers_and_identifiers_do_not_mix() {
        let mut lexer = Lexer::new("abc123");
        let first = lexer.next_token();
        assert_eq!(first.kind, TokenKind::Ident);
        assert_eq!(first.literal, "abc");
        let second = lexer.next_token();
        assert_eq!(second.kind, TokenKind::Int);
        assert_eq!(second.literal, "123");
    }

    #[test]
    fn string_literal_with_escapes() {
        let mut lexer = Lexer::new("\"foo\\nbar\\\"baz\\\"\"");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Str);
        assert_eq!(tok.literal, "foo\nbar\"baz\"");
    }

    #[test]
    fn string_literal_drops_unknown_escape() {
        let mut lexer = Lexer::new("\"a\\qb\"");
        let tok = lexer.next_token();
        assert_eq!(tok.literal, "ab");
    }

    #[test]
    fn unterminated_string_stops_at_eof() {
        let mut lexer = Lexer::new("\"abc");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Str);
        assert_eq!(tok.literal, "abc");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn illegal_byte_is_emitted_not_fatal() {
        let mut lexer = Lexer::new("@");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Illegal);
        assert_eq!(tok.literal, "@");
    }

    #[test]
    fn eof_is_idempotent() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn full_program_tokenizes() {
        use TokenKind::*;
        let input = r#"
        let result = add(five, ten);
        !-/*5;
        5 < 10 > 5;

        if (5 < 10) {
            return true;
        } else {
            return false;
        }

        10 == 10;
        10 != 9;
        "foobar"
        "foo bar"
        [1, 2];
        {"foo": "bar"}
        "#;
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            if tok.kind == Eof {
                break;
            }
            out.push(tok.kind);
        }
        assert!(out.contains(&LBracket));
        assert!(out.contains(&RBracket));
        assert!(out.contains(&Str));
        assert!(out.contains(&True));
        assert!(out.contains(&False));
        assert!(out.contains(&NotEq));
        assert!(out.contains(&Eq));
    }
}
