//! End-to-end tests for tokenization boundary behaviors.

use wisp::lexer::Lexer;
use wisp::token::TokenKind;

fn kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        out.push(token.kind);
        if done {
            break;
        }
    }
    out
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn two_char_operators_are_not_split() {
    assert_eq!(kinds("== !="), vec![TokenKind::Eq, TokenKind::NotEq, TokenKind::Eof]);
}

#[test]
fn identifier_immediately_followed_by_punctuation() {
    assert_eq!(
        kinds("foo)"),
        vec![TokenKind::Ident, TokenKind::RParen, TokenKind::Eof]
    );
}

#[test]
fn full_program_tokenizes_in_order() {
    let input = "let five = 5;\nlet add = fn(x, y) { x + y; };\nadd(five, 10);";
    let got = kinds(input);
    assert_eq!(got.first(), Some(&TokenKind::Let));
    assert_eq!(got.last(), Some(&TokenKind::Eof));
    assert!(got.contains(&TokenKind::Function));
}

#[test]
fn eof_is_idempotent() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn unrecognized_byte_is_illegal_not_an_error() {
    assert_eq!(kinds("@"), vec![TokenKind::Illegal, TokenKind::Eof]);
}
