//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! tokens on demand for the parser. It handles:
//!
//! - Whitespace skipping (space, tab, carriage return, newline)
//! - One- and two-character operators and delimiters
//! - Integer literals, identifiers and keywords
//! - Illegal characters, which still produce a token

pub mod lexer;
pub mod tokens;
