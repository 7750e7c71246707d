//! Boundary-behavior and end-to-end scenario tests.
//!
//! These mirror the worked examples and boundary cases called out
//! separately from the per-module unit tests: numeric-literal edges,
//! the identifier/type-name feedback loop, `#line` rebasing, and the
//! fixed diagnostic message surface.

use cparse_util::Handler;

use crate::token::{IntegerBase, TokenKind};
use crate::Lexer;

fn lex_all(source: &str) -> Vec<TokenKind> {
    let handler = Handler::new();
    let lexer = Lexer::new(source.as_bytes(), "a.c", &handler, Box::new(|_| false));
    lexer.map(|t| t.kind).collect()
}

#[test]
fn test_zero_alone_is_decimal_zero() {
    match &lex_all("0")[0] {
        TokenKind::Integer(lit) => {
            assert_eq!(lit.value, 0);
            assert_eq!(lit.base, IntegerBase::Dec);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_double_zero_is_octal_zero() {
    match &lex_all("00")[0] {
        TokenKind::Integer(lit) => {
            assert_eq!(lit.value, 0);
            assert_eq!(lit.base, IntegerBase::Oct);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_bare_hex_prefix_with_no_digits_is_an_error() {
    let handler = Handler::new();
    let mut lexer = Lexer::new(b"0x", "a.c", &handler, Box::new(|_| false));
    let _ = lexer.next_token();
    assert!(handler.has_errors());
}

#[test]
fn test_leading_and_trailing_decimal_points_are_floats() {
    assert!(matches!(lex_all("1.")[0], TokenKind::Float(_)));
    assert!(matches!(lex_all(".1")[0], TokenKind::Float(_)));
    assert!(matches!(lex_all("1e0")[0], TokenKind::Float(_)));
}

#[test]
fn test_hex_float_requires_exponent() {
    assert!(matches!(lex_all("0x1p0")[0], TokenKind::Float(_)));
    assert!(matches!(lex_all("0x1")[0], TokenKind::Integer(_)));

    let handler = Handler::new();
    let mut lexer = Lexer::new(b"0x1.", "a.c", &handler, Box::new(|_| false));
    let _ = lexer.next_token();
    assert!(handler.has_errors());
}

#[test]
fn test_long_long_distinct_from_two_separate_longs() {
    match &lex_all("1ll")[0] {
        TokenKind::Integer(lit) => assert!(lit.long_long && !lit.long),
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_wide_char_and_wide_multichar() {
    match &lex_all("L'a'")[0] {
        TokenKind::Char(c) => {
            assert!(c.wide);
            assert_eq!(c.codepoints.len(), 1);
        }
        other => panic!("{:?}", other),
    }
    match &lex_all("L'ab'")[0] {
        TokenKind::Char(c) => {
            assert!(c.wide);
            assert_eq!(c.codepoints.len(), 2);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_gnu_alternate_spelling_is_keyword_not_identifier() {
    assert_eq!(lex_all("__const")[0], TokenKind::Const);
}

#[test]
fn test_scenario_plain_declaration() {
    let handler = Handler::new();
    let lexer = Lexer::new(b"int x;", "a.c", &handler, Box::new(|_| false));
    let tokens: Vec<_> = lexer.collect();
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert!(matches!(tokens[1].kind, TokenKind::Identifier(_)));
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[0].position.column(), 1);
    assert_eq!(tokens[1].position.column(), 5);
    assert_eq!(tokens[1].length, 1);
}

#[test]
fn test_scenario_typedef_feedback_reclassifies_later_use() {
    use std::cell::Cell;
    use std::rc::Rc;

    let registered = Rc::new(Cell::new(false));
    let registered_for_predicate = registered.clone();

    let handler = Handler::new();
    let mut lexer = Lexer::new(
        b"typedef int T;\nT y;",
        "a.c",
        &handler,
        Box::new(move |_name| registered_for_predicate.get()),
    );

    let mut first_t_kind = None;
    let mut second_t_kind = None;
    let mut seen_first_t = false;
    loop {
        let tok = lexer.next_token();
        if tok.kind == TokenKind::Eof {
            break;
        }
        if tok.kind == TokenKind::Semicolon {
            registered.set(true);
        }
        if matches!(tok.kind, TokenKind::Identifier(_) | TokenKind::TypeIdent(_)) && !seen_first_t
        {
            first_t_kind = Some(tok.kind.clone());
            seen_first_t = true;
        } else if matches!(tok.kind, TokenKind::Identifier(_) | TokenKind::TypeIdent(_))
            && second_t_kind.is_none()
            && seen_first_t
        {
            second_t_kind = Some(tok.kind.clone());
        }
    }

    assert!(matches!(first_t_kind, Some(TokenKind::Identifier(_))));
    assert!(matches!(second_t_kind, Some(TokenKind::TypeIdent(_))));
}

#[test]
fn test_scenario_line_directive_rebases_position() {
    let handler = Handler::new();
    let mut lexer = Lexer::new(
        b"#line 42 \"foo.c\"\nint z;",
        "a.c",
        &handler,
        Box::new(|_| false),
    );
    let tok = lexer.next_token();
    assert_eq!(tok.kind, TokenKind::Int);
    assert_eq!(tok.position.row(), 42);
    assert_eq!(tok.position.column(), 1);
    assert_eq!(tok.position.file(), "foo.c");
}

#[test]
fn test_scenario_mixed_literal_run() {
    let kinds = lex_all("0xff 0.5f 'a' \"hi\" 0x1p+3");
    match &kinds[0] {
        TokenKind::Integer(lit) => assert_eq!(lit.value, 255),
        other => panic!("{:?}", other),
    }
    match &kinds[1] {
        TokenKind::Float(lit) => assert!(lit.is_float),
        other => panic!("{:?}", other),
    }
    assert!(matches!(kinds[2], TokenKind::Char(_)));
    assert!(matches!(kinds[3], TokenKind::Str(_)));
    match &kinds[4] {
        TokenKind::Float(lit) => assert!((lit.value - 8.0).abs() < 1e-9),
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_scenario_attribute_marker_does_not_skip_parens() {
    let kinds = lex_all("__attribute__((packed)) struct S { int x; };");
    assert_eq!(kinds[0], TokenKind::Attribute);
    assert_eq!(kinds[1], TokenKind::LParen);
    assert_eq!(kinds[2], TokenKind::LParen);
}

#[test]
fn test_scenario_hex_float_missing_exponent_message() {
    let handler = Handler::new();
    let mut lexer = Lexer::new(b"0x1.", "a.c", &handler, Box::new(|_| false));
    let _ = lexer.next_token();
    let diags = handler.diagnostics();
    assert!(diags
        .iter()
        .any(|d| d.message.contains("Hexadecimal floating constant requires an exponent")));
}

#[test]
fn test_consecutive_tokens_never_overlap() {
    let handler = Handler::new();
    let lexer = Lexer::new(b"int  x ;", "a.c", &handler, Box::new(|_| false));
    let tokens: Vec<_> = lexer.collect();
    for pair in tokens.windows(2) {
        let end_of_first = pair[0].position.offset() + pair[0].length;
        assert!(pair[1].position.offset() >= end_of_first);
    }
}

#[test]
fn test_repeated_identifier_interns_to_same_name() {
    let handler = Handler::new();
    let lexer = Lexer::new(b"foo bar foo", "a.c", &handler, Box::new(|_| false));
    let tokens: Vec<_> = lexer.collect();
    let name_of = |k: &TokenKind| match k {
        TokenKind::Identifier(n) => *n,
        other => panic!("{:?}", other),
    };
    assert_eq!(name_of(&tokens[0].kind), name_of(&tokens[2].kind));
    assert_ne!(name_of(&tokens[0].kind), name_of(&tokens[1].kind));
}
