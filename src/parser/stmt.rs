use tracing::trace;

use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, symbol_from_token},
    lookups::BindingPower,
    parser::Parser,
};

/// Dispatches on the current token's statement handler, falling back to an
/// expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Stmt {
    let kind = parser.current_token_kind();
    trace!(%kind, "parsing statement");

    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&kind).copied() {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Stmt {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default);

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Stmt::Expression(ExpressionStmt {
        span: parser.span_from(token.span.start),
        token,
        expression,
    })
}

pub fn parse_let_stmt(parser: &mut Parser) -> Stmt {
    let token = parser.advance();

    let identifier = symbol_from_token(parser.expect(TokenKind::Identifier));
    parser.expect(TokenKind::Assignment);

    let value = parse_expr(parser, BindingPower::Default);

    parser.expect(TokenKind::Semicolon);

    Stmt::Let(LetStmt {
        span: parser.span_from(token.span.start),
        token,
        identifier,
        value,
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Stmt {
    let token = parser.advance();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        parse_expr(parser, BindingPower::Default)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon);

    Stmt::Return(ReturnStmt {
        span: parser.span_from(token.span.start),
        token,
        value,
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Stmt {
    Stmt::Block(parse_block(parser))
}

/// Parses `{ <statement>* }`. A missing `{` or `}` is recorded and skipped
/// over like any other unexpected token.
pub fn parse_block(parser: &mut Parser) -> BlockStmt {
    let token = parser.expect(TokenKind::OpenCurly);

    let mut statements = Vec::new();
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF])
    {
        statements.push(parse_stmt(parser));
    }

    parser.expect(TokenKind::CloseCurly);

    BlockStmt {
        span: parser.span_from(token.span.start),
        token,
        body: statements,
    }
}
