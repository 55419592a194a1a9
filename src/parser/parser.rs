//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! The parser pulls tokens from a [`Lexer`] on demand, keeping one token of
//! lookahead, and uses a Pratt approach with NUD/LED handlers for
//! expression parsing and per-token statement handlers.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Syntax errors never abort parsing. They are recorded as diagnostics and
//! the parser keeps going, so one early mistake can produce several
//! follow-on messages.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How the parser continues after a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Record the diagnostic and keep consuming tokens; no resynchronization.
    #[default]
    Lenient,
    /// After a top-level statement that recorded diagnostics, skip ahead past
    /// the next `;` or `}` unless the statement already ended on one.
    Synchronize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    pub recovery: Recovery,
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    current: Token,
    next: Token,
    /// End of the most recently consumed token
    last_end: Position,
    /// Kind of the most recently consumed token
    last_kind: Option<TokenKind>,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    config: ParserConfig,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `lexer` with the default (lenient) recovery.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_config(lexer, ParserConfig::default())
    }

    /// Creates a parser and registers every statement, prefix and infix handler.
    pub fn with_config(mut lexer: Lexer, config: ParserConfig) -> Self {
        let current = lexer.next_token();
        let next = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            next,
            last_end: Position::null(),
            last_kind: None,
            errors: vec![],
            config,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses statements until `EOF` and returns the root node.
    ///
    /// Always returns a program; check [`Parser::errors`] for diagnostics.
    pub fn parse_program(&mut self) -> Program {
        let mut body = vec![];

        while self.has_tokens() {
            let recorded = self.errors.len();
            body.push(parse_stmt(self));

            if self.config.recovery == Recovery::Synchronize && self.errors.len() > recorded {
                self.synchronize();
            }
        }

        debug!(
            statements = body.len(),
            diagnostics = self.errors.len(),
            "parsed program"
        );

        Program {
            body,
            span: Span {
                start: Position::null(),
                end: self.current.span.end,
            },
        }
    }

    /// Diagnostic messages in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Diagnostics with their source positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.next
    }

    /// Advances to the next token and returns the previous current token.
    ///
    /// At `EOF` this does not move and returns the `EOF` token again.
    pub fn advance(&mut self) -> Token {
        if self.current.is_eof() {
            return self.current.clone();
        }

        let next = std::mem::replace(&mut self.next, self.lexer.next_token());
        let previous = std::mem::replace(&mut self.current, next);

        self.last_end = previous.span.end;
        self.last_kind = Some(previous.kind);
        previous
    }

    /// Consumes the current token, recording a diagnostic if it is not of
    /// `expected_kind`.
    ///
    /// The parser advances either way and returns the consumed token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Token {
        if self.current.kind != expected_kind {
            self.record(ErrorImpl::UnexpectedToken {
                token: self.current.clone(),
                expected: expected_kind,
            });
        }

        self.advance()
    }

    /// Records a diagnostic positioned at the current token.
    pub fn record(&mut self, error: ErrorImpl) {
        self.record_at(error, self.get_position());
    }

    pub fn record_at(&mut self, error: ErrorImpl, position: Position) {
        let error = Error::new(error, position);
        debug!(position = position.0, "{}", error);
        self.errors.push(error);
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.current.is_eof()
    }

    /// Returns the binding power of the current token, `Default` if it has none.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.last_end.max(start),
        }
    }

    fn synchronize(&mut self) {
        if matches!(
            self.last_kind,
            Some(TokenKind::Semicolon) | Some(TokenKind::CloseCurly)
        ) {
            return;
        }

        let mut skipped = 0;
        while !self.current.is_one_of_many(&[
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]) {
            self.advance();
            skipped += 1;
        }
        if !self.current.is_eof() {
            self.advance();
            skipped += 1;
        }

        trace!(skipped, "resynchronized at statement boundary");
    }
}

/// Parses `source` in one call.
///
/// Returns the parser (holding the diagnostics) together with the program.
pub fn parse(source: &str) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
