use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{
            BinaryExpr, BooleanExpr, CallExpr, FunctionExpr, IfExpr, NumberExpr, PrefixExpr,
            SymbolExpr,
        },
        statements::BlockStmt,
    },
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let token = parser.advance();
        let position = token.span.start;
        parser.record_at(ErrorImpl::NoPrefixHandler { token }, position);
        return None;
    };

    let mut left = nud_fn(parser);

    // While the current token binds tighter than bp, keep extending lhs
    while parser.current_token_kind() != TokenKind::Semicolon
        && parser.current_binding_power() > bp
    {
        let token_kind = parser.current_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return left;
        };

        let token_bp = parser.current_binding_power();
        left = Some(led_fn(parser, left, token_bp));
    }

    left
}

/// Where an infix node starts: its left operand, or the operator itself when
/// the left side is missing.
fn start_of(left: Option<&Expr>, operator: &Token) -> Position {
    left.map_or(operator.span.start, |left| left.get_span().start)
}

/// Builds a symbol from an already consumed identifier token.
pub fn symbol_from_token(token: Token) -> SymbolExpr {
    SymbolExpr {
        value: token.value.clone(),
        span: token.span,
        token,
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance();

    match token.kind {
        TokenKind::Integer => {
            let value = match token.value.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    let position = token.span.start;
                    parser.record_at(
                        ErrorImpl::NumberParseError {
                            token: token.clone(),
                        },
                        position,
                    );
                    0
                }
            };

            Some(Expr::Number(NumberExpr {
                span: token.span,
                token,
                value,
            }))
        }
        TokenKind::True | TokenKind::False => Some(Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            span: token.span,
            token,
        })),
        _ => Some(Expr::Symbol(symbol_from_token(token))),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Unary);

    Some(Expr::Prefix(PrefixExpr {
        span: parser.span_from(operator_token.span.start),
        operator: operator_token,
        right_expr: rhs.map(Box::new),
    }))
}

/// Recurses with the operator's own binding power, so equal-precedence
/// chains group to the left.
pub fn parse_binary_expr(parser: &mut Parser, left: Option<Expr>, bp: BindingPower) -> Expr {
    let operator_token = parser.advance();
    let start = start_of(left.as_ref(), &operator_token);
    let right = parse_expr(parser, bp);

    Expr::Binary(BinaryExpr {
        span: parser.span_from(start),
        left: left.map(Box::new),
        operator: operator_token,
        right: right.map(Box::new),
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.expect(TokenKind::OpenParen);
    let expr = parse_expr(parser, BindingPower::Default);
    parser.expect(TokenKind::CloseParen);

    expr
}

pub fn parse_call_expr(parser: &mut Parser, left: Option<Expr>, _bp: BindingPower) -> Expr {
    let token = parser.advance();
    let start = start_of(left.as_ref(), &token);

    let mut args = vec![];

    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseParen, TokenKind::EOF])
    {
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            continue;
        }

        if let Some(arg) = parse_expr(parser, BindingPower::Default) {
            args.push(arg);
        }
    }

    parser.expect(TokenKind::CloseParen);

    Expr::Call(CallExpr {
        span: parser.span_from(start),
        token,
        callee: left.map(Box::new),
        arguments: args,
    })
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance();

    parser.expect(TokenKind::OpenParen);
    let condition = parse_expr(parser, BindingPower::Default);
    parser.expect(TokenKind::CloseParen);

    let consequence = parse_block(parser);

    let alternative: Option<BlockStmt> = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser))
    } else {
        None
    };

    Some(Expr::If(IfExpr {
        span: parser.span_from(token.span.start),
        token,
        condition: condition.map(Box::new),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance();

    parser.expect(TokenKind::OpenParen);

    let mut parameters = Vec::new();
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseParen, TokenKind::EOF])
    {
        let name = parser.expect(TokenKind::Identifier);
        if name.kind == TokenKind::Identifier {
            parameters.push(symbol_from_token(name));
        }

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen);

    let body = parse_block(parser);

    Some(Expr::Function(FunctionExpr {
        span: parser.span_from(token.span.start),
        token,
        parameters,
        body,
    }))
}
