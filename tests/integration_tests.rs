//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API the way a consumer would: source text
//! through the lexer and parser, then the rendered program and any
//! diagnostics.

use monkey_syntax::{
    ast::ast::{Expr, Node, Stmt},
    format_error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parse, Parser, ParserConfig, Recovery,
};

const PROGRAM: &str = "
let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
if (5 < 10) {
  return true;
} else {
  return false;
}

10 == 10;
10 != 9;
";

#[test]
fn test_tokenize_program() {
    let tokens = tokenize(PROGRAM);

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
    ];

    for (token, (kind, value)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, *kind, "token {}", token);
        assert_eq!(token.value, *value);
    }

    let tail = tokens
        .iter()
        .rev()
        .take(9)
        .map(|token| token.kind)
        .collect::<Vec<_>>();
    assert_eq!(
        tail,
        vec![
            TokenKind::EOF,
            TokenKind::Semicolon,
            TokenKind::Integer,
            TokenKind::NotEquals,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Integer,
            TokenKind::Equals,
            TokenKind::Integer,
        ]
    );
}

#[test]
fn test_parse_program() {
    let (parser, program) = parse(PROGRAM);

    assert!(parser.errors().is_empty(), "{:?}", parser.errors());
    assert_eq!(program.len(), 7);
    assert_eq!(program.token_literal(), "let");

    let kinds = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Let(_) => "let",
            Stmt::Return(_) => "return",
            Stmt::Expression(_) => "expression",
            Stmt::Block(_) => "block",
        })
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            "let",
            "let",
            "let",
            "let",
            "expression",
            "expression",
            "expression"
        ]
    );

    assert_eq!(
        program.to_string(),
        "let five = 5;let ten = 10;let add = fn(x, y) (x + y);\
         let result = add(five, ten);if(5 < 10) return true; else return false;\
         (10 == 10)(10 != 9)"
    );
}

#[test]
fn test_function_value_in_let() {
    let (parser, program) = parse("let add = fn(x, y) { x + y; };");
    assert!(parser.errors().is_empty());

    let Stmt::Let(stmt) = &program.body[0] else {
        panic!("expected a let statement");
    };
    assert_eq!(stmt.identifier.value, "add");

    match stmt.value.as_ref() {
        Some(Expr::Function(function)) => {
            assert_eq!(function.parameters.len(), 2);
            assert_eq!(function.body.body.len(), 1);
        }
        other => panic!("expected a function literal, got {:?}", other),
    }
}

#[test]
fn test_parser_pulls_from_lexer() {
    let mut parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
}

#[test]
fn test_diagnostics_are_formatted_with_source_excerpt() {
    let source = "let x = 1;\n  let = 5;";
    let (parser, _program) = parse(source);

    let first = &parser.diagnostics()[0];
    assert_eq!(
        first.to_string(),
        "Could not properly consume token: Assignment \"=\" expected: Identifier"
    );

    let report = format_error(first, source, "main.mk");
    assert!(report.starts_with("Error: UnexpectedToken"), "{}", report);
    assert!(report.contains("-> main.mk"), "{}", report);
    assert!(report.contains("2 | let = 5;"), "{}", report);
    assert!(report.contains("  | ----^"), "{}", report);
}

#[test]
fn test_recovery_modes() {
    let source = "let x = (1 + 2; let y = 3; let z = 4;";

    let (lenient, lenient_program) = parse(source);

    let mut synchronizing = Parser::with_config(
        Lexer::new(source),
        ParserConfig {
            recovery: Recovery::Synchronize,
        },
    );
    let synchronized_program = synchronizing.parse_program();

    assert_eq!(lenient.errors().len(), 3);
    assert_eq!(lenient_program.len(), 5);

    assert_eq!(synchronizing.errors().len(), 2);
    assert_eq!(synchronized_program.len(), 2);
    assert_eq!(
        synchronized_program.to_string(),
        "let x = (1 + 2);let z = 4;"
    );
}

#[test]
fn test_garbage_input_terminates() {
    let sources = [
        "}}}{{{",
        "let let let",
        "fn fn fn (",
        "if if if {",
        "((((((",
        "1 2 3 + + +",
        "return return;",
        "#$%^&",
    ];

    for source in sources {
        let (parser, _program) = parse(source);
        assert!(!parser.errors().is_empty(), "source: {}", source);
    }
}
