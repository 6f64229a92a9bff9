//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! stream of classified tokens. It handles:
//!
//! - Mode-dispatched scanning (initial, string, raw string, comment)
//! - Keywords, identifiers, integer literals, and symbols
//! - Quote escaping in strings and verbatim raw strings
//! - Nested block comments and both line comment forms
//! - Recoverable error collection with position tracking

pub mod lexer;
pub mod tokens;
