//! Unit tests for AST rendering.
//!
//! Nodes are built by hand so rendering is checked independently of the parser.

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    ast::{Expr, Node, Program, Stmt},
    expressions::{BinaryExpr, BooleanExpr, CallExpr, FunctionExpr, IfExpr, NumberExpr, PrefixExpr, SymbolExpr},
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn token(kind: TokenKind, value: &str) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: Span::default(),
    }
}

fn symbol(name: &str) -> SymbolExpr {
    SymbolExpr {
        token: token(TokenKind::Identifier, name),
        value: name.to_string(),
        span: Span::default(),
    }
}

fn number(value: i64) -> Expr {
    Expr::Number(NumberExpr {
        token: token(TokenKind::Integer, &value.to_string()),
        value,
        span: Span::default(),
    })
}

fn binary(left: Expr, kind: TokenKind, operator: &str, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        left: Some(Box::new(left)),
        operator: token(kind, operator),
        right: Some(Box::new(right)),
        span: Span::default(),
    })
}

fn block(body: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        token: token(TokenKind::OpenCurly, "{"),
        body,
        span: Span::default(),
    }
}

fn expression_stmt(expression: Expr) -> Stmt {
    Stmt::Expression(ExpressionStmt {
        token: token(TokenKind::Identifier, expression.token_literal()),
        expression: Some(expression),
        span: Span::default(),
    })
}

#[test]
fn test_let_statement_rendering() {
    let program = Program {
        body: vec![Stmt::Let(LetStmt {
            token: token(TokenKind::Let, "let"),
            identifier: symbol("myVar"),
            value: Some(Expr::Symbol(symbol("anotherVar"))),
            span: Span::default(),
        })],
        span: Span::default(),
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_statement_rendering() {
    let stmt = Stmt::Return(ReturnStmt {
        token: token(TokenKind::Return, "return"),
        value: Some(number(5)),
        span: Span::default(),
    });
    assert_eq!(stmt.to_string(), "return 5;");

    let bare = Stmt::Return(ReturnStmt {
        token: token(TokenKind::Return, "return"),
        value: None,
        span: Span::default(),
    });
    assert_eq!(bare.to_string(), "return ;");
}

#[test]
fn test_nested_binary_rendering() {
    let expr = binary(
        number(1),
        TokenKind::Plus,
        "+",
        binary(number(2), TokenKind::Star, "*", number(3)),
    );

    assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    assert_eq!(expr.token_literal(), "+");
}

#[test]
fn test_prefix_rendering() {
    let expr = Expr::Prefix(PrefixExpr {
        operator: token(TokenKind::Not, "!"),
        right_expr: Some(Box::new(Expr::Boolean(BooleanExpr {
            token: token(TokenKind::True, "true"),
            value: true,
            span: Span::default(),
        }))),
        span: Span::default(),
    });

    assert_eq!(expr.to_string(), "(!true)");
}

#[test]
fn test_absent_children_render_degenerate_text() {
    let prefix = Expr::Prefix(PrefixExpr {
        operator: token(TokenKind::Dash, "-"),
        right_expr: None,
        span: Span::default(),
    });
    assert_eq!(prefix.to_string(), "(-)");

    let infix = Expr::Binary(BinaryExpr {
        left: Some(Box::new(number(1))),
        operator: token(TokenKind::Plus, "+"),
        right: None,
        span: Span::default(),
    });
    assert_eq!(infix.to_string(), "(1 + )");

    let no_left = Expr::Binary(BinaryExpr {
        left: None,
        operator: token(TokenKind::Plus, "+"),
        right: Some(Box::new(number(1))),
        span: Span::default(),
    });
    assert_eq!(no_left.to_string(), "( + 1)");

    let no_callee = Expr::Call(CallExpr {
        token: token(TokenKind::OpenParen, "("),
        callee: None,
        arguments: vec![number(1)],
        span: Span::default(),
    });
    assert_eq!(no_callee.to_string(), "(1)");

    let stmt = Stmt::Expression(ExpressionStmt {
        token: token(TokenKind::CloseParen, ")"),
        expression: None,
        span: Span::default(),
    });
    assert_eq!(stmt.to_string(), "");
}

#[test]
fn test_if_rendering() {
    let condition = binary(
        Expr::Symbol(symbol("x")),
        TokenKind::Less,
        "<",
        Expr::Symbol(symbol("y")),
    );
    let mut expr = IfExpr {
        token: token(TokenKind::If, "if"),
        condition: Some(Box::new(condition)),
        consequence: block(vec![expression_stmt(Expr::Symbol(symbol("x")))]),
        alternative: None,
        span: Span::default(),
    };
    assert_eq!(expr.to_string(), "if(x < y) x");

    expr.alternative = Some(block(vec![expression_stmt(Expr::Symbol(symbol("y")))]));
    assert_eq!(expr.to_string(), "if(x < y) x else y");
}

#[test]
fn test_function_rendering() {
    let body = block(vec![expression_stmt(binary(
        Expr::Symbol(symbol("x")),
        TokenKind::Plus,
        "+",
        Expr::Symbol(symbol("y")),
    ))]);
    let expr = Expr::Function(FunctionExpr {
        token: token(TokenKind::Fn, "fn"),
        parameters: vec![symbol("x"), symbol("y")],
        body,
        span: Span::default(),
    });

    assert_eq!(expr.to_string(), "fn(x, y) (x + y)");
    assert_eq!(expr.token_literal(), "fn");
}

#[test]
fn test_call_rendering() {
    let expr = Expr::Call(CallExpr {
        token: token(TokenKind::OpenParen, "("),
        callee: Some(Box::new(Expr::Symbol(symbol("add")))),
        arguments: vec![
            number(1),
            binary(number(2), TokenKind::Star, "*", number(3)),
        ],
        span: Span::default(),
    });

    assert_eq!(expr.to_string(), "add(1, (2 * 3))");

    let empty = Expr::Call(CallExpr {
        token: token(TokenKind::OpenParen, "("),
        callee: Some(Box::new(Expr::Symbol(symbol("f")))),
        arguments: vec![],
        span: Span::default(),
    });
    assert_eq!(empty.to_string(), "f()");
}

#[test]
fn test_block_concatenates_statements() {
    let stmt = Stmt::Block(block(vec![
        expression_stmt(number(1)),
        Stmt::Return(ReturnStmt {
            token: token(TokenKind::Return, "return"),
            value: Some(number(2)),
            span: Span::default(),
        }),
    ]));

    assert_eq!(stmt.to_string(), "1return 2;");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
    assert_eq!(program.token_literal(), "");
}
