use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_symbol, Token, TokenKind, SINGLE_CHAR_LOOKUP, TWO_CHAR_LOOKUP};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z]+").unwrap();
}

/// A scanning step. Returns `None` when it does not apply at the current
/// character, leaving the lexer untouched.
pub type Lexlet = fn(&mut Lexer) -> Option<Token>;

/// Tried in order; the first one that produces a token wins.
const LEXLETS: [Lexlet; 5] = [
    eof_lexlet,
    two_char_lexlet,
    single_char_lexlet,
    number_lexlet,
    symbol_lexlet,
];

#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    /// Scans and returns the next token.
    ///
    /// Once the source is exhausted, or a NUL byte is reached, every call
    /// returns an `EOF` token with an empty lexeme positioned there.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = LEXLETS
            .iter()
            .find_map(|lexlet| lexlet(self))
            .unwrap_or_else(|| illegal_token(self));

        trace!(kind = %token.kind, value = %token.value, start = token.span.start.0, "lexed token");
        token
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// The current byte, or `0` once the source is exhausted.
    pub fn at(&self) -> u8 {
        self.source.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// The byte after the current one, or `0` past the end.
    pub fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.pos + 1).copied().unwrap_or(0)
    }

    pub fn remainder(&self) -> &[u8] {
        &self.source.as_bytes()[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.at(), b' ' | b'\t' | b'\r' | b'\n') {
            self.advance_n(1);
        }
    }

    /// Consumes `len` bytes as a token of `kind`.
    fn take(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let value = String::from(&self.source[start..start + len]);
        self.advance_n(len);

        MK_TOKEN!(kind, value, start, start + len)
    }
}

/// A NUL byte ends the input just like the real end does. The cursor stays
/// put, so every later call lands here again.
fn eof_lexlet(lexer: &mut Lexer) -> Option<Token> {
    if lexer.at() != 0 {
        return None;
    }

    let end = lexer.pos;
    Some(MK_TOKEN!(TokenKind::EOF, String::new(), end, end))
}

fn two_char_lexlet(lexer: &mut Lexer) -> Option<Token> {
    let kind = *TWO_CHAR_LOOKUP.get(&[lexer.at(), lexer.peek()])?;
    Some(lexer.take(kind, 2))
}

fn single_char_lexlet(lexer: &mut Lexer) -> Option<Token> {
    let kind = *SINGLE_CHAR_LOOKUP.get(&lexer.at())?;
    Some(lexer.take(kind, 1))
}

fn number_lexlet(lexer: &mut Lexer) -> Option<Token> {
    let len = NUMBER_PATTERN.find(lexer.remainder())?.end();
    Some(lexer.take(TokenKind::Integer, len))
}

fn symbol_lexlet(lexer: &mut Lexer) -> Option<Token> {
    let len = SYMBOL_PATTERN.find(lexer.remainder())?.end();
    let mut token = lexer.take(TokenKind::Identifier, len);
    token.kind = lookup_symbol(&token.value);

    Some(token)
}

/// Consumes one whole character as an `Illegal` token so scanning always
/// makes progress.
fn illegal_token(lexer: &mut Lexer) -> Token {
    let len = lexer.source[lexer.pos..]
        .chars()
        .next()
        .map_or(1, char::len_utf8);

    lexer.take(TokenKind::Illegal, len)
}

/// Scans the whole source, returning every token including the trailing `EOF`.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
